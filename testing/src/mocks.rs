//! In-memory snapshot store testing utilities
//!
//! - [`InMemorySnapshotStore`]: keeps the last saved snapshot in memory
//! - [`FailingSnapshotStore`]: every save fails, for rollback tests

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Lock poisoning only happens after a test already panicked

use boxoffice_core::snapshot_store::{SnapshotStore, SnapshotStoreError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory snapshot store for fast, deterministic testing.
///
/// Clones share the same slot, so a test can keep one handle for assertions
/// while the code under test owns another.
///
/// # Example
///
/// ```
/// use boxoffice_testing::InMemorySnapshotStore;
/// use boxoffice_core::snapshot_store::SnapshotStore;
///
/// let store = InMemorySnapshotStore::new();
/// assert!(store.load().unwrap().is_none());
///
/// store.save(&42_u32).unwrap();
/// assert_eq!(store.load().unwrap(), Some(42));
/// assert_eq!(store.save_count(), 1);
/// ```
#[derive(Debug)]
pub struct InMemorySnapshotStore<T> {
    slot: Arc<RwLock<Option<T>>>,
    saves: Arc<AtomicUsize>,
}

impl<T: Clone> InMemorySnapshotStore<T> {
    /// Create an empty store (nothing persisted yet)
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
            saves: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a store that already holds `snapshot`
    #[must_use]
    pub fn with_snapshot(snapshot: T) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(snapshot))),
            saves: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The currently persisted snapshot
    #[must_use]
    pub fn snapshot(&self) -> Option<T> {
        self.slot.read().unwrap().clone()
    }

    /// Number of successful saves so far
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl<T: Clone> Default for InMemorySnapshotStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for InMemorySnapshotStore<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
            saves: Arc::clone(&self.saves),
        }
    }
}

impl<T: Clone> SnapshotStore<T> for InMemorySnapshotStore<T> {
    fn load(&self) -> Result<Option<T>, SnapshotStoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, snapshot: &T) -> Result<(), SnapshotStoreError> {
        *self.slot.write().unwrap() = Some(snapshot.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self) -> String {
        String::from("<memory>")
    }
}

/// Snapshot store whose saves always fail.
///
/// Loads report that nothing has been persisted, so code under test starts
/// from fresh state and then hits the failure on its first write.
#[derive(Debug, Clone)]
pub struct FailingSnapshotStore {
    reason: String,
    attempts: Arc<AtomicUsize>,
}

impl FailingSnapshotStore {
    /// Create a store that fails every save with `reason`
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of save attempts so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl<T> SnapshotStore<T> for FailingSnapshotStore {
    fn load(&self) -> Result<Option<T>, SnapshotStoreError> {
        Ok(None)
    }

    fn save(&self, _snapshot: &T) -> Result<(), SnapshotStoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(SnapshotStoreError::Backend(self.reason.clone()))
    }

    fn location(&self) -> String {
        String::from("<failing>")
    }
}
