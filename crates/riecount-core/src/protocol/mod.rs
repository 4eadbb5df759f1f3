//! Data model and JSON payloads.
//!
//! - `counters`: the ordered name -> count set and its on-disk JSON form
//! - `responses`: HTTP response bodies

pub mod counters;
pub mod responses;

pub use counters::CounterSet;
pub use responses::{AllCountersResponse, CounterResponse, HealthResponse};
