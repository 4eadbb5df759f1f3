//! Operational HTTP endpoints.
//!
//! - `/health`  : liveness, `{"status": "ok"}`
//! - `/metrics` : Prometheus text format

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use riecount_core::protocol::HealthResponse;

use crate::app_state::AppState;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.metrics().render();

    (
        StatusCode::OK,
        [(CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}
