//! Counter store: serialized access to the persisted counter set.
//!
//! Every operation runs inside one exclusive critical section per store
//! handle, covering its whole read or read+write sequence. Two increments can
//! never interleave their load and save, so no update is lost.

mod file;

use async_trait::async_trait;
use riecount_core::{CounterSet, Result};

pub use file::FileCounterStore;

#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Whole counter set; empty when nothing has been persisted yet.
    async fn load_all(&self) -> Result<CounterSet>;

    /// Replace the persisted set.
    async fn save_all(&self, set: &CounterSet) -> Result<()>;

    /// Count for `name`, 0 when absent.
    async fn get_count(&self, name: &str) -> Result<u64>;

    /// Load, add one to `name`, save, and return the new value.
    async fn increment(&self, name: &str) -> Result<u64>;
}
