//! Store Layer - adapters over the shared table
//!
//! The sheet behind the sign-up list only offers two primitives: read the
//! whole table in order, and overwrite the whole table with a new ordered
//! row set. There is no append, no partial update, and no conditional
//! write. Every adapter implements exactly that contract; anything
//! smarter (an atomic append, a version-token compare-and-swap) would slot
//! in behind the same trait and close the lost-update race without
//! touching the registry.

pub mod memory;
pub mod schema;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::entry::Entry;
use crate::Result;
use std::time::Duration;

/// Whole-table access to the shared sign-up sheet.
///
/// Rows come back in stored order with every cell normalized to a string
/// (missing cells read as empty). Calls block until the store answers;
/// adapter-level timeouts surface as errors.
pub trait TableStore {
    /// Read the full table. `ttl` is a freshness hint: the adapter may
    /// serve a cached copy no older than `ttl`; `Duration::ZERO` demands
    /// a fresh read.
    fn read(&mut self, ttl: Duration) -> Result<Vec<Entry>>;

    /// Replace the entire table contents with `rows`, in order.
    fn write(&mut self, rows: &[Entry]) -> Result<()>;

    /// Drop any adapter-level read cache so the next read goes to the
    /// store. Default is a no-op for adapters that never cache.
    fn invalidate(&mut self) {}
}
