//! Text layout for the PDF export: flattens a resume into a styled line
//! sequence, word-wraps body text with an average-glyph-width estimate,
//! and tiles the lines onto A4 pages.
//!
//! The width estimate is intentionally approximate — it only decides wrap
//! points, and the builtin faces are close enough to 0.5 em average that
//! borderline lines err on the safe (earlier-wrap) side.

use crate::export::template::TemplateStyle;
use crate::models::resume::{Education, Experience, Resume};

pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

const PT_TO_MM: f32 = 0.352_778;
/// Average glyph advance in em units, used for wrap estimation.
const AVG_CHAR_WIDTH_EM: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Name,
    Contact,
    Section,
    ItemTitle,
    Meta,
    Body,
}

/// One laid-out line before pagination.
#[derive(Debug, Clone)]
pub struct LayoutLine {
    pub text: String,
    pub kind: LineKind,
    pub size_pt: f32,
    /// Extra vertical space above this line (section spacing).
    pub gap_before_mm: f32,
}

/// A line placed on a page. `y_mm` is the baseline measured from the top
/// edge of the page.
#[derive(Debug, Clone)]
pub struct PositionedLine {
    pub text: String,
    pub kind: LineKind,
    pub size_pt: f32,
    pub y_mm: f32,
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub lines: Vec<PositionedLine>,
}

pub fn line_height_mm(size_pt: f32, style: &TemplateStyle) -> f32 {
    size_pt * PT_TO_MM * style.line_height
}

fn estimated_width_mm(text: &str, size_pt: f32) -> f32 {
    text.chars().count() as f32 * size_pt * AVG_CHAR_WIDTH_EM * PT_TO_MM
}

/// Greedy word-wrap. A single word wider than the line gets its own line
/// rather than being split.
pub fn wrap_text(text: &str, size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in words {
        if current.is_empty() {
            current = word.to_string();
            continue;
        }
        let candidate_width = estimated_width_mm(&current, size_pt)
            + estimated_width_mm(" ", size_pt)
            + estimated_width_mm(word, size_pt);
        if candidate_width > max_width_mm {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }
    lines.push(current);
    lines
}

/// Renders `2020-03` / `2023-11` style dates down to the year, the way the
/// editor's preview does. Blank input stays blank.
fn year_of(date: &str) -> &str {
    let trimmed = date.trim();
    if trimmed.len() >= 4 && trimmed.as_bytes()[..4].iter().all(u8::is_ascii_digit) {
        &trimmed[..4]
    } else {
        trimmed
    }
}

fn date_range(start: &str, end: &str, ongoing: bool, ongoing_label: &str) -> String {
    let from = year_of(start);
    let to = if ongoing { ongoing_label } else { year_of(end) };
    match (from.is_empty(), to.is_empty()) {
        (true, true) => String::new(),
        (false, true) => from.to_string(),
        (true, false) => to.to_string(),
        (false, false) => format!("{from} - {to}"),
    }
}

/// Flattens a resume into the line sequence for rendering, in the section
/// order of the editor's preview.
pub fn build_lines(resume: &Resume, style: &TemplateStyle) -> Vec<LayoutLine> {
    let max_width = A4_WIDTH_MM - 2.0 * style.margin_mm;
    let section_gap = line_height_mm(style.body_pt, style) * 0.8;
    let mut lines = Vec::new();

    let name = resume.personal_data.name.trim();
    if !name.is_empty() {
        lines.push(LayoutLine {
            text: name.to_string(),
            kind: LineKind::Name,
            size_pt: style.name_pt,
            gap_before_mm: 0.0,
        });
    }

    let contact: Vec<&str> = [
        resume.personal_data.email.trim(),
        resume.personal_data.phone.trim(),
        resume.personal_data.linkedin.trim(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect();
    if !contact.is_empty() {
        lines.push(LayoutLine {
            text: contact.join(" | "),
            kind: LineKind::Contact,
            size_pt: style.meta_pt,
            gap_before_mm: 0.5,
        });
    }

    let summary = resume.personal_data.summary.trim();
    if !summary.is_empty() {
        push_section(&mut lines, "Resumo Profissional", style, section_gap);
        push_body(&mut lines, summary, style, max_width);
    }

    let objectives = resume.objectives.trim();
    if !objectives.is_empty() {
        push_section(&mut lines, "Objetivos de Carreira", style, section_gap);
        push_body(&mut lines, objectives, style, max_width);
    }

    if !resume.experiences.is_empty() {
        push_section(&mut lines, "Experiência Profissional", style, section_gap);
        for exp in &resume.experiences {
            push_experience(&mut lines, exp, style, max_width);
        }
    }

    if !resume.education.is_empty() {
        push_section(&mut lines, "Formação Acadêmica", style, section_gap);
        for edu in &resume.education {
            push_education(&mut lines, edu, style, max_width);
        }
    }

    if !resume.skills.is_empty() {
        push_section(&mut lines, "Habilidades", style, section_gap);
        for skill in &resume.skills {
            let name = skill.name.trim();
            if name.is_empty() {
                continue;
            }
            lines.push(LayoutLine {
                text: format!("{} — {}", name, skill.level.label()),
                kind: LineKind::Body,
                size_pt: style.body_pt,
                gap_before_mm: 0.0,
            });
        }
    }

    lines
}

fn push_section(lines: &mut Vec<LayoutLine>, title: &str, style: &TemplateStyle, gap_mm: f32) {
    let text = if style.uppercase_sections {
        title.to_uppercase()
    } else {
        title.to_string()
    };
    lines.push(LayoutLine {
        text,
        kind: LineKind::Section,
        size_pt: style.section_pt,
        gap_before_mm: gap_mm,
    });
}

fn push_body(lines: &mut Vec<LayoutLine>, text: &str, style: &TemplateStyle, max_width: f32) {
    for wrapped in wrap_text(text, style.body_pt, max_width) {
        lines.push(LayoutLine {
            text: wrapped,
            kind: LineKind::Body,
            size_pt: style.body_pt,
            gap_before_mm: 0.0,
        });
    }
}

fn push_experience(
    lines: &mut Vec<LayoutLine>,
    exp: &Experience,
    style: &TemplateStyle,
    max_width: f32,
) {
    let mut title = exp.position.trim().to_string();
    let company = exp.company.trim();
    if !company.is_empty() {
        if title.is_empty() {
            title = company.to_string();
        } else {
            title = format!("{title} — {company}");
        }
    }
    if !title.is_empty() {
        lines.push(LayoutLine {
            text: title,
            kind: LineKind::ItemTitle,
            size_pt: style.body_pt + 1.0,
            gap_before_mm: line_height_mm(style.body_pt, style) * 0.4,
        });
    }

    let dates = date_range(&exp.start_date, &exp.end_date, exp.is_current_job, "Atual");
    if !dates.is_empty() {
        lines.push(LayoutLine {
            text: dates,
            kind: LineKind::Meta,
            size_pt: style.meta_pt,
            gap_before_mm: 0.0,
        });
    }

    let description = exp.description.trim();
    if !description.is_empty() {
        push_body(lines, description, style, max_width);
    }
}

fn push_education(
    lines: &mut Vec<LayoutLine>,
    edu: &Education,
    style: &TemplateStyle,
    max_width: f32,
) {
    let mut title = edu.degree.trim().to_string();
    let institution = edu.institution.trim();
    if !institution.is_empty() {
        if title.is_empty() {
            title = institution.to_string();
        } else {
            title = format!("{title} — {institution}");
        }
    }
    if !title.is_empty() {
        lines.push(LayoutLine {
            text: title,
            kind: LineKind::ItemTitle,
            size_pt: style.body_pt + 1.0,
            gap_before_mm: line_height_mm(style.body_pt, style) * 0.4,
        });
    }

    let dates = date_range(
        &edu.start_date,
        &edu.end_date,
        edu.is_current_study,
        "Em andamento",
    );
    if !dates.is_empty() {
        lines.push(LayoutLine {
            text: dates,
            kind: LineKind::Meta,
            size_pt: style.meta_pt,
            gap_before_mm: 0.0,
        });
    }

    let description = edu.description.trim();
    if !description.is_empty() {
        push_body(lines, description, style, max_width);
    }
}

/// Tiles lines onto pages top-down. When the cursor would pass the bottom
/// margin, a new page starts and the pending section gap is dropped —
/// the same height-remaining arithmetic the browser exporter runs when it
/// slices the rendered canvas across PDF pages.
pub fn paginate(lines: &[LayoutLine], style: &TemplateStyle) -> Vec<Page> {
    let bottom_limit = A4_HEIGHT_MM - style.margin_mm;
    let mut pages = vec![Page::default()];
    let mut cursor = style.margin_mm;

    for line in lines {
        let height = line_height_mm(line.size_pt, style);
        let mut y = cursor + line.gap_before_mm + height;

        if y > bottom_limit {
            pages.push(Page::default());
            cursor = style.margin_mm;
            y = cursor + height;
        }

        pages.last_mut().expect("pages is never empty").lines.push(PositionedLine {
            text: line.text.clone(),
            kind: line.kind,
            size_pt: line.size_pt,
            y_mm: y,
        });
        cursor = y;
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{PersonalData, Skill, SkillLevel, TemplateKind};

    fn style() -> TemplateStyle {
        TemplateStyle::for_kind(TemplateKind::Modern)
    }

    fn base_resume() -> Resume {
        Resume {
            id: None,
            user_id: None,
            personal_data: PersonalData {
                name: "João Pereira".to_string(),
                email: "joao@example.com".to_string(),
                phone: "(21) 98888-7777".to_string(),
                linkedin: String::new(),
                summary: "Desenvolvedor com dez anos de experiência.".to_string(),
            },
            skills: vec![Skill {
                id: "s1".to_string(),
                name: "SQL".to_string(),
                level: SkillLevel::Intermediario,
            }],
            experiences: vec![],
            education: vec![],
            objectives: String::new(),
            template: TemplateKind::Modern,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        let lines = wrap_text("texto curto", 10.0, 170.0);
        assert_eq!(lines, vec!["texto curto".to_string()]);
    }

    #[test]
    fn test_wrap_long_text_multiple_lines() {
        let text = "palavra ".repeat(60);
        let lines = wrap_text(&text, 10.0, 100.0);
        assert!(lines.len() > 1);
        // No line may exceed the width estimate.
        for line in &lines {
            assert!(estimated_width_mm(line, 10.0) <= 100.0);
        }
    }

    #[test]
    fn test_wrap_preserves_all_words() {
        let text = "um dois três quatro cinco seis sete oito nove dez";
        let lines = wrap_text(text, 12.0, 40.0);
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text);
    }

    #[test]
    fn test_wrap_oversized_word_gets_own_line() {
        let lines = wrap_text("a palavraabsurdamentecompridaquenãocabe b", 12.0, 20.0);
        assert!(lines
            .iter()
            .any(|l| l == "palavraabsurdamentecompridaquenãocabe"));
    }

    #[test]
    fn test_wrap_empty_text_is_empty() {
        assert!(wrap_text("   ", 10.0, 100.0).is_empty());
    }

    #[test]
    fn test_year_of_truncates_iso_dates() {
        assert_eq!(year_of("2020-03"), "2020");
        assert_eq!(year_of("2023-11-05"), "2023");
        assert_eq!(year_of(""), "");
        assert_eq!(year_of("março"), "março");
    }

    #[test]
    fn test_date_range_current_job_renders_atual() {
        assert_eq!(date_range("2020-01", "", true, "Atual"), "2020 - Atual");
    }

    #[test]
    fn test_date_range_finished() {
        assert_eq!(date_range("2018-02", "2021-12", false, "Atual"), "2018 - 2021");
    }

    #[test]
    fn test_build_lines_section_order() {
        let mut resume = base_resume();
        resume.objectives = "Liderar times de backend.".to_string();
        let lines = build_lines(&resume, &style());

        let sections: Vec<&str> = lines
            .iter()
            .filter(|l| l.kind == LineKind::Section)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(
            sections,
            vec!["Resumo Profissional", "Objetivos de Carreira", "Habilidades"]
        );
        assert_eq!(lines[0].kind, LineKind::Name);
    }

    #[test]
    fn test_build_lines_skips_empty_sections() {
        let mut resume = base_resume();
        resume.personal_data.summary = String::new();
        resume.skills.clear();
        let lines = build_lines(&resume, &style());
        assert!(lines.iter().all(|l| l.kind != LineKind::Section));
    }

    #[test]
    fn test_uppercase_sections_applied() {
        let classic = TemplateStyle::for_kind(TemplateKind::Classic);
        let lines = build_lines(&base_resume(), &classic);
        let section = lines.iter().find(|l| l.kind == LineKind::Section).unwrap();
        assert_eq!(section.text, "RESUMO PROFISSIONAL");
    }

    #[test]
    fn test_skill_line_carries_level_label() {
        let lines = build_lines(&base_resume(), &style());
        assert!(lines.iter().any(|l| l.text == "SQL — Intermediário"));
    }

    #[test]
    fn test_paginate_short_resume_single_page() {
        let pages = paginate(&build_lines(&base_resume(), &style()), &style());
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn test_paginate_long_content_overflows_to_new_page() {
        let s = style();
        let line = LayoutLine {
            text: "linha".to_string(),
            kind: LineKind::Body,
            size_pt: s.body_pt,
            gap_before_mm: 0.0,
        };
        let usable = A4_HEIGHT_MM - 2.0 * s.margin_mm;
        let per_page = (usable / line_height_mm(s.body_pt, &s)).floor() as usize;

        let lines = vec![line; per_page + 1];
        let pages = paginate(&lines, &s);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].lines.len(), 1);
    }

    #[test]
    fn test_paginate_lines_stay_inside_margins() {
        let s = style();
        let mut resume = base_resume();
        resume.personal_data.summary = "experiência relevante em projetos ".repeat(80);
        let pages = paginate(&build_lines(&resume, &s), &s);
        assert!(pages.len() > 1);
        for page in &pages {
            for line in &page.lines {
                assert!(line.y_mm <= A4_HEIGHT_MM - s.margin_mm);
                assert!(line.y_mm >= s.margin_mm);
            }
        }
    }
}
