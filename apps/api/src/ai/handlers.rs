use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ai::prompts::{fallback_for, prompt_for, ImproveKind};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ImproveRequest {
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveResponse {
    pub improved_text: String,
}

/// POST /api/ai/improve
///
/// Upstream failures never reach the caller: the response is the canned
/// fallback for the requested type, so this endpoint always succeeds
/// (sometimes with lower-quality output).
pub async fn improve(
    State(state): State<AppState>,
    Json(req): Json<ImproveRequest>,
) -> Result<Json<ImproveResponse>, AppError> {
    if req.text.trim().is_empty() || req.kind.trim().is_empty() {
        return Err(AppError::Validation(
            "Texto e tipo são obrigatórios.".to_string(),
        ));
    }

    let kind = ImproveKind::parse(&req.kind);
    let prompt = prompt_for(kind, &req.text);

    let improved_text = match state.ai.improve(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Generative-text call failed, using fallback: {e}");
            fallback_for(kind, &req.text)
        }
    };

    Ok(Json(ImproveResponse { improved_text }))
}
