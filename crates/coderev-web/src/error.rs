use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Failures of the web layer itself.
///
/// Review failures are not represented here; they are rendered inline on the
/// page with a 200 status.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("template rendering failed: {0}")]
    Render(#[from] minijinja::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        tracing::error!("[Web] {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}
