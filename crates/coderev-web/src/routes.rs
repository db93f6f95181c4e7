use anyhow::Context;
use axum::Router;
use axum::extract::{Form, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum_extra::extract::cookie::CookieJar;
use coderev_core::{ReviewError, ReviewRequest};
use serde::Deserialize;

use crate::cookie;
use crate::error::WebError;
use crate::page::{self, PageView};
use crate::state::WebState;

pub fn router(state: WebState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/review", post(review))
        .route("/reset", post(reset))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Binds `addr` and serves until the process is stopped.
pub async fn serve(state: WebState, addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("[Web] Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .await
        .context("server error")
}

#[derive(Debug, Deserialize)]
struct ReviewForm {
    #[serde(default)]
    code: String,
}

fn render_page(state: &WebState, jar: CookieJar, view: &PageView) -> Result<Response, WebError> {
    let html = page::render(&state.templates, view)?;
    Ok((jar, Html(html)).into_response())
}

async fn index(State(state): State<WebState>, jar: CookieJar) -> Result<Response, WebError> {
    let (jar, session_id) = cookie::ensure_session(jar);
    let view = PageView {
        turns: state.session_store.turn_count(&session_id).await,
        ..Default::default()
    };
    render_page(&state, jar, &view)
}

async fn review(
    State(state): State<WebState>,
    jar: CookieJar,
    Form(form): Form<ReviewForm>,
) -> Result<Response, WebError> {
    let (jar, session_id) = cookie::ensure_session(jar);
    let request = ReviewRequest::new(form.code);

    let outcome = state
        .review_usecase
        .review_in_session(&state.session_store, &session_id, &request)
        .await;

    let mut view = PageView {
        code: request.source,
        ..Default::default()
    };
    match outcome {
        Ok(result) => {
            view.issues = Some(result.issues);
            view.fixed_code = Some(result.fixed_code);
        }
        Err(err @ ReviewError::EmptyInput) => view.warning = Some(err.user_message()),
        Err(ReviewError::Syntax { message }) => {
            view.issues = Some(message.lines().map(str::to_string).collect());
        }
        Err(err) => view.error = Some(err.user_message()),
    }
    view.turns = state.session_store.turn_count(&session_id).await;

    render_page(&state, jar, &view)
}

async fn reset(State(state): State<WebState>, jar: CookieJar) -> Response {
    let (jar, session_id) = cookie::ensure_session(jar);
    state.session_store.clear(&session_id).await;
    tracing::debug!("[Web] Session history cleared");
    (jar, Redirect::to("/")).into_response()
}

async fn healthz() -> &'static str {
    "ok"
}
