use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The `personalData` block of a resume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub summary: String,
}

/// Proficiency levels offered by the skills form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    #[serde(rename = "Básico")]
    Basico,
    #[serde(rename = "Intermediário")]
    Intermediario,
    #[serde(rename = "Avançado")]
    Avancado,
}

impl SkillLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Basico => "Básico",
            SkillLevel::Intermediario => "Intermediário",
            SkillLevel::Avancado => "Avançado",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current_job: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current_study: bool,
    pub description: String,
}

/// The six visual template presets selectable in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    #[default]
    Modern,
    Classic,
    Creative,
    Minimal,
    Professional,
    Elegant,
}

impl TemplateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Modern => "modern",
            TemplateKind::Classic => "classic",
            TemplateKind::Creative => "creative",
            TemplateKind::Minimal => "minimal",
            TemplateKind::Professional => "professional",
            TemplateKind::Elegant => "elegant",
        }
    }

    /// Parses a stored template identifier. Unknown values fall back to
    /// `modern`, the schema default.
    pub fn parse(s: &str) -> TemplateKind {
        match s {
            "classic" => TemplateKind::Classic,
            "creative" => TemplateKind::Creative,
            "minimal" => TemplateKind::Minimal,
            "professional" => TemplateKind::Professional,
            "elegant" => TemplateKind::Elegant,
            _ => TemplateKind::Modern,
        }
    }
}

/// A resume as it travels over the wire (camelCase JSON, matching the
/// browser client). `id`/`userId`/timestamps are server-assigned and
/// absent from create payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub personal_data: PersonalData,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    /// Wire field is `education`; the SQL column is `educations`.
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub objectives: String,
    #[serde(default)]
    pub template: TemplateKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A row of the `resumes` table. List fields are JSON-serialized TEXT.
#[derive(Debug, Clone, FromRow)]
pub struct ResumeRow {
    pub id: String,
    pub user_id: String,
    pub personal_data: String,
    pub skills: String,
    pub experiences: String,
    pub educations: Option<String>,
    pub objectives: Option<String>,
    pub template: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeRow {
    /// Deserializes the JSON columns back into the wire shape.
    pub fn into_resume(self) -> Result<Resume> {
        Ok(Resume {
            id: Some(self.id),
            user_id: Some(self.user_id),
            personal_data: serde_json::from_str(&self.personal_data)
                .context("malformed personal_data column")?,
            skills: serde_json::from_str(&self.skills).context("malformed skills column")?,
            experiences: serde_json::from_str(&self.experiences)
                .context("malformed experiences column")?,
            education: match self.educations.as_deref() {
                Some(json) => serde_json::from_str(json).context("malformed educations column")?,
                None => Vec::new(),
            },
            objectives: self.objectives.unwrap_or_default(),
            template: TemplateKind::parse(self.template.as_deref().unwrap_or("modern")),
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_resume() -> Resume {
        Resume {
            id: None,
            user_id: None,
            personal_data: PersonalData {
                name: "Maria Silva".to_string(),
                email: "maria@example.com".to_string(),
                phone: "(11) 99999-0000".to_string(),
                linkedin: "linkedin.com/in/maria".to_string(),
                summary: "Engenheira de software".to_string(),
            },
            skills: vec![Skill {
                id: "s1".to_string(),
                name: "Rust".to_string(),
                level: SkillLevel::Avancado,
            }],
            experiences: vec![Experience {
                id: "e1".to_string(),
                company: "Acme".to_string(),
                position: "Dev".to_string(),
                start_date: "2020-01".to_string(),
                end_date: String::new(),
                is_current_job: true,
                description: "Backend".to_string(),
            }],
            education: vec![],
            objectives: "Crescer na carreira".to_string(),
            template: TemplateKind::Elegant,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let json = serde_json::to_string(&sample_resume()).unwrap();
        assert!(json.contains("\"personalData\""));
        assert!(json.contains("\"isCurrentJob\""));
        assert!(json.contains("\"startDate\""));
        assert!(json.contains("\"education\""));
        assert!(!json.contains("\"educations\""));
    }

    #[test]
    fn test_skill_level_round_trips_accented_labels() {
        let json = serde_json::to_string(&SkillLevel::Intermediario).unwrap();
        assert_eq!(json, "\"Intermediário\"");
        let back: SkillLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SkillLevel::Intermediario);
    }

    #[test]
    fn test_template_defaults_to_modern_when_absent() {
        let resume: Resume = serde_json::from_str(r#"{"personalData":{"name":"A"}}"#).unwrap();
        assert_eq!(resume.template, TemplateKind::Modern);
    }

    #[test]
    fn test_template_parse_unknown_falls_back_to_modern() {
        assert_eq!(TemplateKind::parse("vaporwave"), TemplateKind::Modern);
        assert_eq!(TemplateKind::parse("elegant"), TemplateKind::Elegant);
    }

    #[test]
    fn test_row_round_trip_preserves_fields() {
        let resume = sample_resume();
        let row = ResumeRow {
            id: "r1".to_string(),
            user_id: "u1".to_string(),
            personal_data: serde_json::to_string(&resume.personal_data).unwrap(),
            skills: serde_json::to_string(&resume.skills).unwrap(),
            experiences: serde_json::to_string(&resume.experiences).unwrap(),
            educations: Some(serde_json::to_string(&resume.education).unwrap()),
            objectives: Some(resume.objectives.clone()),
            template: Some(resume.template.as_str().to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let back = row.into_resume().unwrap();
        assert_eq!(back.id.as_deref(), Some("r1"));
        assert_eq!(back.personal_data.name, "Maria Silva");
        assert_eq!(back.skills[0].level, SkillLevel::Avancado);
        assert!(back.experiences[0].is_current_job);
        assert_eq!(back.template, TemplateKind::Elegant);
    }

    #[test]
    fn test_row_with_null_optionals() {
        let row = ResumeRow {
            id: "r2".to_string(),
            user_id: "u1".to_string(),
            personal_data: "{}".to_string(),
            skills: "[]".to_string(),
            experiences: "[]".to_string(),
            educations: None,
            objectives: None,
            template: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let back = row.into_resume().unwrap();
        assert!(back.education.is_empty());
        assert!(back.objectives.is_empty());
        assert_eq!(back.template, TemplateKind::Modern);
    }
}
