use axum::{
    extract::{Extension, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::middleware::CurrentUser;
use crate::auth::{jwt, password};
use crate::errors::AppError;
use crate::models::user::{AuthResponse, PublicUser, UserRow};
use crate::state::AppState;
use crate::validation::{validate_login, validate_register};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    validate_register(&req.name, &req.email, &req.password)?;
    let email = req.email.trim().to_lowercase();

    let existing: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = ?")
        .bind(&email)
        .fetch_optional(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Validation("Usuário já existe".to_string()));
    }

    let user = UserRow {
        id: Uuid::new_v4().to_string(),
        name: req.name.trim().to_string(),
        email,
        password: password::hash_password(&req.password)?,
        created_at: Utc::now(),
    };

    sqlx::query(
        "INSERT INTO users (id, name, email, password, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password)
    .bind(user.created_at)
    .execute(&state.db)
    .await?;

    let token = jwt::create_token(&user.id, &state.config.jwt_secret)?;
    tracing::info!("New user registered: {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: PublicUser::from(user),
            token,
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    validate_login(&req.email, &req.password)?;
    let email = req.email.trim().to_lowercase();

    let user: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = ?")
        .bind(&email)
        .fetch_optional(&state.db)
        .await?;

    // Unknown email and wrong password are indistinguishable to the caller.
    let user = user.ok_or_else(|| AppError::Unauthorized("Credenciais inválidas".to_string()))?;
    if !password::verify_password(&req.password, &user.password)? {
        return Err(AppError::Unauthorized("Credenciais inválidas".to_string()));
    }

    let token = jwt::create_token(&user.id, &state.config.jwt_secret)?;

    Ok(Json(AuthResponse {
        user: PublicUser::from(user),
        token,
    }))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<PublicUser>, AppError> {
    let user: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE id = ?")
        .bind(&current.id)
        .fetch_optional(&state.db)
        .await?;

    let user = user.ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))?;
    Ok(Json(PublicUser::from(user)))
}
