//! Lightweight in-process metrics and request accounting.
//!
//! Metrics are stored as atomics and rendered by the `/metrics` handler.

pub mod metrics;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

pub use metrics::ServiceMetrics;

/// Count every request by matched route and response status; requests that
/// hit no route (404s) are labelled `unmatched`.
pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let method = req.method().to_string();

    let res = next.run(req).await;

    let status = res.status().as_u16().to_string();
    state.metrics().http_requests.inc(&[
        ("route", route.as_str()),
        ("method", method.as_str()),
        ("status", status.as_str()),
    ]);
    res
}
