//! HTTP transport module for brainstorm-studio
//!
//! Axum router serving the landing and application pages, the browser assets,
//! and the `/generate` action that relays a brainstorming prompt to the
//! generation gateway.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use std::{any::Any, path::Path};
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir, trace::TraceLayer};

use crate::{
    clients::GenerationGateway,
    config::Config,
    error::{BrainstormError, INTERNAL_SERVER_ERROR_MESSAGE, Result},
    models::{GenerationRequest, GenerationResult},
};

const INDEX_HTML: &str = include_str!("../templates/index.html");
const APP_HTML: &str = include_str!("../templates/app.html");

/// Shared state for HTTP server
#[derive(Clone, Debug)]
pub struct AppState {
    pub gateway: GenerationGateway,
}

impl AppState {
    pub fn new(gateway: GenerationGateway) -> Self {
        Self { gateway }
    }
}

/// Landing page
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Application page with the brainstorming form
pub async fn app_handler() -> Html<&'static str> {
    Html(APP_HTML)
}

/// Unmatched routes render the landing page with a 404 status
pub async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(INDEX_HTML))
}

/// Generate brainstorming output through the gateway
pub async fn generate_handler(State(state): State<AppState>, body: Bytes) -> Response {
    match generate(&state, &body).await {
        Ok(output) => GenerationResult::success(output).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn generate(state: &AppState, body: &[u8]) -> Result<String> {
    if !state.gateway.is_configured() {
        return Err(BrainstormError::not_configured());
    }

    let request: GenerationRequest = serde_json::from_slice(body)?;
    let prompt = request.to_prompt()?;

    tracing::info!(
        technique = request.technique.as_deref().unwrap_or_default(),
        persona = request.persona.as_deref().unwrap_or_default(),
        prompt_chars = prompt.len(),
        "Generating brainstorming output"
    );

    let output = state.gateway.generate(&prompt).await?;
    tracing::debug!("Generation returned {} chars", output.len());
    Ok(output)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Request handler panicked: {}", detail);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": INTERNAL_SERVER_ERROR_MESSAGE })),
    )
        .into_response()
}

/// Build the application router
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let assets = ServeDir::new(static_dir.as_ref())
        .not_found_service(not_found_handler.into_service());

    Router::new()
        .route("/", get(index_handler))
        .route("/app", get(app_handler))
        .route("/generate", post(generate_handler))
        .nest_service("/static", assets)
        .fallback(not_found_handler)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_http_server(config: &Config, gateway: GenerationGateway) -> anyhow::Result<()> {
    let bind = config.resolve_bind_addr().await?;
    let app = router(AppState::new(gateway), &config.server.static_dir);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind HTTP listener: {}", e))?;

    tracing::info!(
        "Starting HTTP server on {} (assets from {})",
        bind,
        config.server.static_dir.display()
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;

    Ok(())
}
