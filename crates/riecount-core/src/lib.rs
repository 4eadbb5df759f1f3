//! riecount core: counter data model, wire payloads, and the shared error type.
//!
//! This crate carries no transport or runtime dependencies. The HTTP server
//! and the file-backed store live in `riecount-server`; everything here is
//! plain data plus serde impls so it can be reused by tooling and tests.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `RiecountError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{Result, RiecountError};
pub use protocol::counters::{CounterSet, DEFAULT_COUNTER_NAME};
