//! JSON counter endpoints.
//!
//! - `GET  /get_count?name=` : one counter (0 when absent)
//! - `GET  /get_all`         : every counter
//! - `POST /count?name=`     : increment, returns the new value

pub mod error;
pub mod extract;

use std::future::Future;
use std::time::Instant;

use axum::{extract::State, Json};
use serde::Deserialize;

use riecount_core::error::{Result, RiecountError};
use riecount_core::protocol::{AllCountersResponse, CounterResponse};
use riecount_core::DEFAULT_COUNTER_NAME;

use crate::app_state::AppState;

pub use error::ApiError;
pub use extract::ApiQuery;

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_name() -> String {
    DEFAULT_COUNTER_NAME.to_string()
}

/// Run a store operation, recording its latency and any storage failure.
pub(crate) async fn timed<T>(
    state: &AppState,
    op: &'static str,
    fut: impl Future<Output = Result<T>>,
) -> std::result::Result<T, ApiError> {
    let started = Instant::now();
    let res = fut.await;
    let metrics = state.metrics();
    metrics.store_duration.observe(&[("op", op)], started.elapsed());
    if let Err(e) = &res {
        if e.is_storage() {
            metrics.storage_errors.inc(&[("kind", e.client_code().as_str())]);
        }
    }
    res.map_err(ApiError::from)
}

pub async fn get_count(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<NameQuery>,
) -> std::result::Result<Json<CounterResponse>, ApiError> {
    let store = state.store();
    let count = timed(&state, "get_count", store.get_count(&q.name)).await?;
    Ok(Json(CounterResponse { name: q.name, count }))
}

pub async fn get_all(
    State(state): State<AppState>,
) -> std::result::Result<Json<AllCountersResponse>, ApiError> {
    let store = state.store();
    let counters = timed(&state, "load_all", store.load_all()).await?;
    Ok(Json(AllCountersResponse { counters }))
}

pub async fn count(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<NameQuery>,
) -> std::result::Result<Json<CounterResponse>, ApiError> {
    let name = q.name;

    // Spawned so a dropped request cannot abort between load and save.
    let task = {
        let store = state.store();
        let name = name.clone();
        tokio::spawn(async move { store.increment(&name).await })
    };
    let count = timed(&state, "increment", async {
        match task.await {
            Ok(res) => res,
            Err(e) => Err(RiecountError::Internal(format!("increment task failed: {e}"))),
        }
    })
    .await?;

    state.metrics().increments.inc(&[]);
    tracing::info!(name = %name, count, "incremented counter");
    Ok(Json(CounterResponse { name, count }))
}
