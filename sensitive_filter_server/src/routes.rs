use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use sensitive_filter::{validate, Engine, ValidationError};
use serde::Deserialize;
use std::{borrow::Cow, sync::Arc};
use tracing::{info, warn};

#[derive(Clone)]
struct AppState {
    engine: Arc<Engine>,
    max_chars: usize,
}

#[derive(Deserialize)]
struct FilterParams {
    #[serde(default)]
    word: Option<String>,
}

/// A rejected request. Always the caller's fault.
struct ApiError(ValidationError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.0.to_string()).into_response()
    }
}

/// Prefix of every `/shenhe` response body ("filtered text: ").
const SHENHE_PREFIX: &str = "过滤后的文本：";

pub fn router(engine: Arc<Engine>, max_chars: usize) -> Router {
    Router::new()
        .route("/filter", get(filter))
        .route("/shenhe", get(shenhe))
        .route("/health", get(health))
        .with_state(AppState { engine, max_chars })
}

/// GET /filter?word=<text> - Redact sensitive words
async fn filter(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<String, ApiError> {
    filter_text(&state, params)
}

/// GET /shenhe?word=<text> - Redact sensitive words, prefixing the body for older clients
async fn shenhe(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<String, ApiError> {
    let filtered = filter_text(&state, params)?;
    Ok(format!("{}{}", SHENHE_PREFIX, filtered))
}

fn filter_text(state: &AppState, params: FilterParams) -> Result<String, ApiError> {
    let text = validate(params.word.as_deref(), state.max_chars).map_err(|error| {
        warn!("rejected request: {}", error);
        ApiError(error)
    })?;

    let filtered = state.engine.filter(text);
    info!(
        chars = text.chars().count(),
        changed = matches!(filtered, Cow::Owned(_)),
        "filtered request"
    );

    Ok(filtered.into_owned())
}

/// GET /health - Liveness check
async fn health() -> &'static str {
    "ok"
}
