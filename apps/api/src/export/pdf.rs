//! PDF assembly: writes the paginated line layout onto A4 pages with the
//! builtin WinAnsi faces (Helvetica/Times cover the Portuguese glyph set).

use anyhow::{anyhow, Result};
use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, Rgb};

use crate::export::layout::{self, LineKind, A4_HEIGHT_MM, A4_WIDTH_MM};
use crate::export::template::{FontFace, TemplateStyle};
use crate::models::resume::Resume;

/// Renders a resume to PDF bytes. CPU-bound — callers run it inside
/// `spawn_blocking`.
pub fn render_pdf(resume: &Resume) -> Result<Vec<u8>> {
    let style = TemplateStyle::for_kind(resume.template);
    let lines = layout::build_lines(resume, &style);
    let pages = layout::paginate(&lines, &style);

    let title = if resume.personal_data.name.trim().is_empty() {
        "Currículo".to_string()
    } else {
        format!("Currículo - {}", resume.personal_data.name.trim())
    };

    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(A4_WIDTH_MM.into()), Mm(A4_HEIGHT_MM.into()), "Conteúdo");

    let (regular, bold) = match style.face {
        FontFace::Sans => (BuiltinFont::Helvetica, BuiltinFont::HelveticaBold),
        FontFace::Serif => (BuiltinFont::TimesRoman, BuiltinFont::TimesBold),
    };
    let regular = doc
        .add_builtin_font(regular)
        .map_err(|e| anyhow!("failed to register font: {e}"))?;
    let bold = doc
        .add_builtin_font(bold)
        .map_err(|e| anyhow!("failed to register font: {e}"))?;

    for (index, page) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_idx, layer_idx) =
                doc.add_page(Mm(A4_WIDTH_MM.into()), Mm(A4_HEIGHT_MM.into()), "Conteúdo");
            doc.get_page(page_idx).get_layer(layer_idx)
        };

        for line in &page.lines {
            let font = font_for(line.kind, &regular, &bold);
            layer.set_fill_color(color_for(line.kind, &style));
            // printpdf's y axis runs from the bottom edge.
            layer.use_text(
                line.text.clone(),
                line.size_pt.into(),
                Mm(style.margin_mm.into()),
                Mm((A4_HEIGHT_MM - line.y_mm).into()),
                font,
            );
        }
    }

    doc.save_to_bytes()
        .map_err(|e| anyhow!("failed to serialize PDF: {e}"))
}

fn font_for<'a>(
    kind: LineKind,
    regular: &'a IndirectFontRef,
    bold: &'a IndirectFontRef,
) -> &'a IndirectFontRef {
    match kind {
        LineKind::Name | LineKind::Section | LineKind::ItemTitle => bold,
        LineKind::Contact | LineKind::Meta | LineKind::Body => regular,
    }
}

fn color_for(kind: LineKind, style: &TemplateStyle) -> Color {
    let (r, g, b) = match kind {
        LineKind::Name | LineKind::Section => style.accent,
        LineKind::Contact | LineKind::Meta => (0.45, 0.45, 0.45),
        LineKind::ItemTitle | LineKind::Body => (0.13, 0.13, 0.13),
    };
    Color::Rgb(Rgb::new(r.into(), g.into(), b.into(), None))
}
