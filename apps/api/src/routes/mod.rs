pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::ai;
use crate::auth;
use crate::errors::AppError;
use crate::export;
use crate::resumes;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("Rota não encontrada".to_string())
}

pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/auth/me", get(auth::handlers::me))
        .route(
            "/api/resumes",
            get(resumes::handlers::list).post(resumes::handlers::create),
        )
        .route(
            "/api/resumes/:id",
            get(resumes::handlers::get)
                .put(resumes::handlers::update)
                .delete(resumes::handlers::delete),
        )
        .route("/api/resumes/:id/export", get(export::handlers::export_pdf))
        .route(
            "/api/users/:user_id/resumes",
            get(resumes::handlers::list_by_user),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_auth,
        ));

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/auth/register", post(auth::handlers::register))
        .route("/api/auth/login", post(auth::handlers::login))
        // Validated but unauthenticated, like the original AI router.
        .route("/api/ai/improve", post(ai::handlers::improve))
        .merge(protected)
        .fallback(not_found)
        .with_state(state)
}
