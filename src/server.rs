//! Web server module for roverwatch.
//!
//! Provides the rover status JSON API and serves the polling status page.

use std::sync::Arc;

use askama::Template;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::probe::{ReachabilityProbe, ReachabilityResult};

/// Interval between status polls issued by the page script (milliseconds).
pub const POLL_INTERVAL_MS: u64 = 3_000;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub probe: ReachabilityProbe,
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

/// Status page template.
#[derive(Template)]
#[template(path = "status.html")]
struct StatusPageTemplate {
    poll_interval_ms: u64,
}

/// Wrapper to render Askama templates as Axum responses.
struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(rendered) => Html(rendered).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Template render failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    let app_state = Arc::new(state);

    Router::new()
        .route("/", get(status_page_handler))
        .route("/healthz", get(healthz_handler))
        .route("/api/rover_status", get(rover_status_handler))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Status page handler.
async fn status_page_handler() -> impl IntoResponse {
    HtmlTemplate(StatusPageTemplate {
        poll_interval_ms: POLL_INTERVAL_MS,
    })
}

/// Liveness probe.
async fn healthz_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Rover status API endpoint.
///
/// Runs one reachability check per request; nothing is cached and nothing is
/// shared between requests. The probe never fails, so this always answers
/// 200 with the observed state as JSON data.
async fn rover_status_handler(State(state): State<Arc<AppState>>) -> Json<ReachabilityResult> {
    Json(state.probe.check().await)
}
