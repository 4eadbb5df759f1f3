//! Top-level facade crate for riecount.
//!
//! Re-exports the core data model and the server library so users can depend on a single crate.

pub mod core {
    pub use riecount_core::*;
}

pub mod server {
    pub use riecount_server::*;
}
