//! SQL layer for the `resumes` table. The wire shape's list fields are
//! serialized to JSON TEXT columns on the way in and parsed back on the
//! way out. Every query is scoped by `user_id` so ownership checks happen
//! in the WHERE clause, not in handler code.

use anyhow::Context;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{Resume, ResumeRow};

pub async fn list_for_user(db: &SqlitePool, user_id: &str) -> Result<Vec<Resume>, AppError> {
    let rows: Vec<ResumeRow> =
        sqlx::query_as("SELECT * FROM resumes WHERE user_id = ? ORDER BY updated_at DESC")
            .bind(user_id)
            .fetch_all(db)
            .await?;

    rows.into_iter()
        .map(|row| row.into_resume().map_err(AppError::Internal))
        .collect()
}

pub async fn fetch(
    db: &SqlitePool,
    id: &str,
    user_id: &str,
) -> Result<Option<Resume>, AppError> {
    let row: Option<ResumeRow> = sqlx::query_as("SELECT * FROM resumes WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;

    row.map(|r| r.into_resume().map_err(AppError::Internal))
        .transpose()
}

/// Inserts a new resume, assigning id and timestamps. Returns the stored shape.
pub async fn insert(db: &SqlitePool, user_id: &str, mut resume: Resume) -> Result<Resume, AppError> {
    let now = Utc::now();
    resume.id = Some(Uuid::new_v4().to_string());
    resume.user_id = Some(user_id.to_string());
    resume.created_at = Some(now);
    resume.updated_at = Some(now);

    sqlx::query(
        r#"
        INSERT INTO resumes
            (id, user_id, personal_data, skills, experiences, educations,
             objectives, template, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(resume.id.as_deref())
    .bind(user_id)
    .bind(encode(&resume.personal_data)?)
    .bind(encode(&resume.skills)?)
    .bind(encode(&resume.experiences)?)
    .bind(encode(&resume.education)?)
    .bind(&resume.objectives)
    .bind(resume.template.as_str())
    .bind(now)
    .bind(now)
    .execute(db)
    .await?;

    Ok(resume)
}

/// Wholesale replace. `created_at` is preserved, `updated_at` refreshed.
/// Returns `None` when the resume does not exist or belongs to someone else.
pub async fn update(
    db: &SqlitePool,
    id: &str,
    user_id: &str,
    mut resume: Resume,
) -> Result<Option<Resume>, AppError> {
    let existing = match fetch(db, id, user_id).await? {
        Some(r) => r,
        None => return Ok(None),
    };

    let now = Utc::now();
    resume.id = Some(id.to_string());
    resume.user_id = Some(user_id.to_string());
    resume.created_at = existing.created_at;
    resume.updated_at = Some(now);

    sqlx::query(
        r#"
        UPDATE resumes
        SET personal_data = ?, skills = ?, experiences = ?, educations = ?,
            objectives = ?, template = ?, updated_at = ?
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(encode(&resume.personal_data)?)
    .bind(encode(&resume.skills)?)
    .bind(encode(&resume.experiences)?)
    .bind(encode(&resume.education)?)
    .bind(&resume.objectives)
    .bind(resume.template.as_str())
    .bind(now)
    .bind(id)
    .bind(user_id)
    .execute(db)
    .await?;

    Ok(Some(resume))
}

/// Returns `true` when a row was actually deleted.
pub async fn delete(db: &SqlitePool, id: &str, user_id: &str) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM resumes WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}

fn encode<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string(value)
        .context("failed to serialize resume field")
        .map_err(AppError::Internal)
}
