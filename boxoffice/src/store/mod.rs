//! Booking Store: durable seat availability for every showtime.
//!
//! The dataset is loaded once at startup and written back whole after every
//! mutating session operation. The storage medium is pluggable through
//! [`SnapshotStore`]; production uses [`JsonFileStore`].

mod json_file;

pub use json_file::JsonFileStore;

use crate::config::HallConfig;
use crate::error::BookingError;
use crate::types::Dataset;
use boxoffice_core::snapshot_store::{SnapshotStore, SnapshotStoreError};
use std::fmt;
use std::sync::Arc;

/// Loads and saves the [`Dataset`] of one hall.
#[derive(Clone)]
pub struct BookingStore {
    backend: Arc<dyn SnapshotStore<Dataset>>,
    hall: HallConfig,
}

impl BookingStore {
    /// Creates a booking store over `backend` for `hall`
    #[must_use]
    pub fn new(backend: Arc<dyn SnapshotStore<Dataset>>, hall: HallConfig) -> Self {
        Self { backend, hall }
    }

    /// Hall the persisted dataset must fit
    #[must_use]
    pub const fn hall(&self) -> &HallConfig {
        &self.hall
    }

    /// Load the dataset.
    ///
    /// With nothing persisted yet, returns a fresh dataset with every seat
    /// available; nothing is written until the first save.
    ///
    /// # Errors
    ///
    /// - [`BookingError::Persistence`] if the data cannot be read or decoded
    /// - [`BookingError::Configuration`] if the persisted showtimes or grid
    ///   dimensions do not match the hall
    pub fn load(&self) -> Result<Dataset, BookingError> {
        let location = self.backend.location();

        let Some(dataset) = self.backend.load()? else {
            tracing::info!(%location, "No saved bookings, starting with an empty hall");
            return Ok(Dataset::fresh(&self.hall));
        };

        if let Err(error) = dataset.conform(&self.hall) {
            tracing::warn!(%location, %error, "Saved bookings do not fit the configured hall");
            return Err(error.into());
        }

        tracing::info!(
            %location,
            showtimes = dataset.len(),
            booked = dataset.total_booked(),
            "Loaded bookings"
        );
        Ok(dataset)
    }

    /// Replace the persisted dataset.
    ///
    /// # Errors
    ///
    /// Returns whatever the backend reports when the write fails.
    pub fn save(&self, dataset: &Dataset) -> Result<(), SnapshotStoreError> {
        self.backend.save(dataset)?;
        tracing::info!(
            location = %self.backend.location(),
            booked = dataset.total_booked(),
            "Saved bookings"
        );
        Ok(())
    }
}

impl fmt::Debug for BookingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingStore")
            .field("location", &self.backend.location())
            .field("hall", &self.hall)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::error::ConfigError;
    use crate::types::{Grid, SeatPosition, SeatState, Showtime};
    use boxoffice_testing::{FailingSnapshotStore, InMemorySnapshotStore};

    fn hall() -> HallConfig {
        HallConfig {
            rows: 3,
            cols: 4,
            showtimes: vec![Showtime::new("Matinee"), Showtime::new("Evening")],
        }
    }

    #[test]
    fn load_without_data_is_fresh_and_writes_nothing() {
        let backend = InMemorySnapshotStore::new();
        let store = BookingStore::new(Arc::new(backend.clone()), hall());

        let dataset = store.load().unwrap();

        assert_eq!(dataset, Dataset::fresh(&hall()));
        assert_eq!(backend.save_count(), 0);
        assert!(backend.snapshot().is_none());
    }

    #[test]
    fn load_returns_persisted_data_verbatim() {
        let mut persisted = Dataset::fresh(&hall());
        let evening = Showtime::new("Evening");
        persisted
            .grid_mut(&evening)
            .unwrap()
            .set(SeatPosition::new(2, 3), SeatState::Booked);
        let store = BookingStore::new(
            Arc::new(InMemorySnapshotStore::with_snapshot(persisted.clone())),
            hall(),
        );

        assert_eq!(store.load().unwrap(), persisted);
    }

    #[test]
    fn load_rejects_data_for_another_hall() {
        let persisted = Dataset::from_grids([
            (Showtime::new("Matinee"), Grid::new(3, 4)),
            (Showtime::new("Evening"), Grid::new(5, 5)),
        ]);
        let store = BookingStore::new(
            Arc::new(InMemorySnapshotStore::with_snapshot(persisted)),
            hall(),
        );

        let error = store.load().unwrap_err();

        assert!(matches!(
            error,
            BookingError::Configuration(ConfigError::GridDimensionMismatch { .. })
        ));
    }

    #[test]
    fn save_failures_are_reported() {
        let store = BookingStore::new(Arc::new(FailingSnapshotStore::new("read-only")), hall());

        let result = store.save(&Dataset::fresh(&hall()));

        assert!(matches!(result, Err(SnapshotStoreError::Backend(_))));
    }
}
