//! Snapshot store trait and related types.
//!
//! A snapshot store keeps exactly one durable copy of a value and replaces it
//! wholesale on every save. There is no append mode and no history: the last
//! successful `save` is what the next `load` returns.
//!
//! # Implementations
//!
//! - `JsonFileStore` (in the `boxoffice` crate): JSON document on disk,
//!   replaced by write-to-temp-then-rename
//! - `InMemorySnapshotStore` and `FailingSnapshotStore` (in
//!   `boxoffice-testing`): fast, deterministic testing
//!
//! # Example
//!
//! ```
//! use boxoffice_core::snapshot_store::{SnapshotStore, SnapshotStoreError};
//!
//! fn bump<S: SnapshotStore<u32>>(store: &S) -> Result<u32, SnapshotStoreError> {
//!     let next = store.load()?.unwrap_or(0) + 1;
//!     store.save(&next)?;
//!     Ok(next)
//! }
//! ```

use thiserror::Error;

/// Errors that can occur while loading or saving a snapshot.
#[derive(Error, Debug)]
pub enum SnapshotStoreError {
    /// Reading or writing the underlying medium failed.
    #[error("I/O error on {location}: {source}")]
    Io {
        /// Where the snapshot lives (file path, key, ...).
        location: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Any other backend failure.
    #[error("Snapshot backend error: {0}")]
    Backend(String),
}

/// Durable storage for a single snapshot value.
///
/// Implementations are expected to make `save` atomic as far as the medium
/// allows: a crash mid-save leaves either the previous snapshot or the new
/// one, never a partial write.
pub trait SnapshotStore<T> {
    /// Load the persisted snapshot.
    ///
    /// Returns `Ok(None)` when nothing has been persisted yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot exists but cannot be read or decoded.
    fn load(&self) -> Result<Option<T>, SnapshotStoreError>;

    /// Replace the persisted snapshot with `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be encoded or written.
    fn save(&self, snapshot: &T) -> Result<(), SnapshotStoreError>;

    /// Human-readable location of the snapshot, used in logs.
    fn location(&self) -> String {
        String::from("<unspecified>")
    }
}
