use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use curriculo_api::ai::GeminiClient;
use curriculo_api::config::Config;
use curriculo_api::db::{create_pool, init_schema};
use curriculo_api::routes::build_router;
use curriculo_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("curriculo_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Curriculo API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize SQLite and apply the schema
    let db = create_pool(&config.database_url).await?;
    init_schema(&db).await?;

    // Initialize the generative-text client
    let ai = Arc::new(GeminiClient::new(
        config.gemini_api_url.clone(),
        config.gemini_api_key.clone(),
    ));
    info!(
        "Generative-text client initialized (model: {})",
        curriculo_api::ai::MODEL
    );

    let cors = build_cors_layer(&config);

    // Build app state
    let state = AppState {
        db,
        ai,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS policy from `CORS_ALLOWED_ORIGINS`: `*` opens to any origin,
/// otherwise a comma-separated origin list.
fn build_cors_layer(config: &Config) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if config.cors_allowed_origins.trim() == "*" {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse::<HeaderValue>().ok())
        .collect();
    base.allow_origin(AllowOrigin::list(origins))
}
