//! riecount server library entry.
//!
//! This crate wires the file-backed counter store, the HTTP handlers, and the
//! operational endpoints into one axum application. It is consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod dashboard;
pub mod obs;
pub mod ops;
pub mod router;
pub mod server;
pub mod store;
