//! Visual presets for the six resume templates. Accent colors match the
//! palette of the editor's template selector.

use crate::models::resume::TemplateKind;

/// Typeface group used by a template. The PDF assembler maps these to
/// concrete builtin faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Sans,
    Serif,
}

/// Fixed styling parameters for one template.
#[derive(Debug, Clone)]
pub struct TemplateStyle {
    pub face: FontFace,
    /// Accent color (0.0–1.0 RGB) used for the name and section titles.
    pub accent: (f32, f32, f32),
    pub margin_mm: f32,
    pub name_pt: f32,
    pub section_pt: f32,
    pub body_pt: f32,
    pub meta_pt: f32,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
    pub uppercase_sections: bool,
}

impl TemplateStyle {
    pub fn for_kind(kind: TemplateKind) -> TemplateStyle {
        match kind {
            TemplateKind::Modern => TemplateStyle {
                face: FontFace::Sans,
                accent: rgb(0x3b, 0x82, 0xf6),
                margin_mm: 18.0,
                name_pt: 22.0,
                section_pt: 13.0,
                body_pt: 10.0,
                meta_pt: 9.0,
                line_height: 1.4,
                uppercase_sections: false,
            },
            TemplateKind::Classic => TemplateStyle {
                face: FontFace::Serif,
                accent: rgb(0x63, 0x66, 0xf1),
                margin_mm: 22.0,
                name_pt: 20.0,
                section_pt: 12.0,
                body_pt: 10.5,
                meta_pt: 9.0,
                line_height: 1.45,
                uppercase_sections: true,
            },
            TemplateKind::Creative => TemplateStyle {
                face: FontFace::Sans,
                accent: rgb(0x8b, 0x5c, 0xf6),
                margin_mm: 16.0,
                name_pt: 24.0,
                section_pt: 14.0,
                body_pt: 10.0,
                meta_pt: 9.0,
                line_height: 1.5,
                uppercase_sections: false,
            },
            TemplateKind::Minimal => TemplateStyle {
                face: FontFace::Sans,
                accent: rgb(0x64, 0x74, 0x8b),
                margin_mm: 26.0,
                name_pt: 18.0,
                section_pt: 11.0,
                body_pt: 9.5,
                meta_pt: 8.5,
                line_height: 1.35,
                uppercase_sections: true,
            },
            TemplateKind::Professional => TemplateStyle {
                face: FontFace::Serif,
                accent: rgb(0x05, 0x96, 0x69),
                margin_mm: 20.0,
                name_pt: 21.0,
                section_pt: 12.5,
                body_pt: 10.0,
                meta_pt: 9.0,
                line_height: 1.4,
                uppercase_sections: true,
            },
            TemplateKind::Elegant => TemplateStyle {
                face: FontFace::Serif,
                accent: rgb(0xdc, 0x26, 0x26),
                margin_mm: 20.0,
                name_pt: 23.0,
                section_pt: 13.0,
                body_pt: 10.0,
                meta_pt: 9.0,
                line_height: 1.5,
                uppercase_sections: false,
            },
        }
    }
}

fn rgb(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}
