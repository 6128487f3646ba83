use anyhow::anyhow;
use axum::{
    extract::{Extension, Path, State},
    http::header,
    response::IntoResponse,
};

use crate::auth::middleware::CurrentUser;
use crate::errors::AppError;
use crate::export::pdf::render_pdf;
use crate::resumes::store;
use crate::state::AppState;

/// GET /api/resumes/:id/export
///
/// Renders the owned resume into its selected template and streams the PDF
/// back as an attachment. Assembly is CPU-bound, so it runs off the async
/// runtime.
pub async fn export_pdf(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let resume = store::fetch(&state.db, &id, &current.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Currículo não encontrado".to_string()))?;

    let filename = format!("{}_curriculo.pdf", sanitize_filename(&resume.personal_data.name));

    let bytes = tokio::task::spawn_blocking(move || render_pdf(&resume))
        .await
        .map_err(|e| AppError::Internal(anyhow!("PDF render task failed: {e}")))??;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, bytes))
}

/// Collapses anything outside `[a-zA-Z0-9]` to `_`, the same rule the
/// editor applies to downloaded file names. Blank names become `curriculo`.
fn sanitize_filename(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return "curriculo".to_string();
    }
    trimmed
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_spaces_and_accents() {
        assert_eq!(sanitize_filename("João Silva"), "Jo_o_Silva");
    }

    #[test]
    fn test_sanitize_keeps_ascii_alphanumerics() {
        assert_eq!(sanitize_filename("Ana123"), "Ana123");
    }

    #[test]
    fn test_sanitize_blank_name_defaults() {
        assert_eq!(sanitize_filename("   "), "curriculo");
    }
}
