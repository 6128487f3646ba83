use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};

use crate::auth::middleware::CurrentUser;
use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::resumes::store;
use crate::state::AppState;
use crate::validation::validate_resume;

/// GET /api/resumes
pub async fn list(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<Vec<Resume>>, AppError> {
    let resumes = store::list_for_user(&state.db, &current.id).await?;
    Ok(Json(resumes))
}

/// GET /api/resumes/:id
pub async fn get(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<Resume>, AppError> {
    let resume = store::fetch(&state.db, &id, &current.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Currículo não encontrado".to_string()))?;
    Ok(Json(resume))
}

/// POST /api/resumes
pub async fn create(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(payload): Json<Resume>,
) -> Result<(StatusCode, Json<Resume>), AppError> {
    validate_resume(&payload)?;
    let resume = store::insert(&state.db, &current.id, payload).await?;
    Ok((StatusCode::CREATED, Json(resume)))
}

/// PUT /api/resumes/:id
pub async fn update(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<Resume>,
) -> Result<Json<Resume>, AppError> {
    validate_resume(&payload)?;
    let resume = store::update(&state.db, &id, &current.id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Currículo não encontrado".to_string()))?;
    Ok(Json(resume))
}

/// DELETE /api/resumes/:id
pub async fn delete(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if !store::delete(&state.db, &id, &current.id).await? {
        return Err(AppError::NotFound("Currículo não encontrado".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/users/:user_id/resumes
///
/// The path form of the listing. Callers may only read their own resumes.
pub async fn list_by_user(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Resume>>, AppError> {
    if user_id != current.id {
        return Err(AppError::Forbidden);
    }
    let resumes = store::list_for_user(&state.db, &user_id).await?;
    Ok(Json(resumes))
}
