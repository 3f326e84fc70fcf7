//! # Potluck - Shared-List Registry
//!
//! A sign-up sheet over a shared table store with duplicate-checked appends.
//!
//! Potluck provides:
//! - A `Registry` mediating every read and write of the shared dish list
//! - Case- and whitespace-insensitive uniqueness enforcement on dish names
//! - A `TableStore` adapter seam (whole-table read / whole-table overwrite)
//! - SQLite-backed and in-memory store adapters
//! - An HTTP JSON surface and CLI over the registry's public operations

pub mod entry;
pub mod snapshot;
pub mod store;
pub mod registry;
pub mod menu;
pub mod config;
pub mod server;
pub mod ui;

// Re-exports for convenient access
pub use entry::{Category, Entry};
pub use snapshot::Snapshot;
pub use registry::Registry;
pub use store::{MemoryStore, SqliteStore, TableStore};

/// Result type alias for Potluck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Potluck operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Please provide {0}")]
    MissingField(&'static str),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("\"{0}\" is already on the list! Please bring something else.")]
    DuplicateDish(String),

    #[error("The sign-up sheet is unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the submitter can fix this by changing their input
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::MissingField(_) | Error::UnknownCategory(_) | Error::DuplicateDish(_)
        )
    }
}
