//! Axum router wiring.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{api, app_state::AppState, dashboard, obs, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/docs", get(dashboard::docs))
        .route("/health", get(ops::health))
        .route("/metrics", get(ops::metrics))
        .route("/get_count", get(api::get_count))
        .route("/get_all", get(api::get_all))
        .route("/count", post(api::count))
        .layer(middleware::from_fn_with_state(state.clone(), obs::track_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
