//! Booking Session: the API a presentation layer calls.
//!
//! A session holds the dataset of every showtime, one active showtime and the
//! current seat selection. Each operation is turned into a [`BookingAction`]
//! and sent through the runtime [`Store`], which persists the dataset after
//! book, cancel and reset and restores the previous state if that fails.
//!
//! Mutating operations return a [`SessionUpdate`] with everything needed to
//! re-render: the outcome, the seat map of the active showtime and the
//! conflict list.

use crate::aggregates::{BookingAction, BookingEnvironment, BookingReducer};
use crate::config::{Config, HallConfig};
use crate::error::{BookingError, ConfigError};
use crate::pricing::PricingPolicy;
use crate::statistics::{self, SalesSummary};
use crate::store::{BookingStore, JsonFileStore};
use crate::types::{
    BookingOutcome, BookingState, Dataset, Money, Rejection, SeatMap, SeatPosition, Showtime,
};
use boxoffice_core::snapshot_store::SnapshotStore;
use boxoffice_runtime::Store;
use std::collections::BTreeSet;
use std::sync::Arc;

/// What a presentation layer needs after a session operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUpdate {
    /// What happened
    pub outcome: BookingOutcome,
    /// Display state of every seat in the active showtime
    pub seats: SeatMap,
    /// Seats that failed their precondition, in row-major order
    pub conflicts: Vec<SeatPosition>,
}

impl SessionUpdate {
    /// User-facing messages for the outcome
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.outcome.messages()
    }
}

/// An interactive booking session over one hall.
pub struct BookingSession {
    store: Store<BookingState, BookingAction, BookingEnvironment, BookingReducer>,
    hall: HallConfig,
    pricing: PricingPolicy,
}

impl BookingSession {
    /// Open a session over the JSON file named in `config`.
    ///
    /// # Errors
    ///
    /// - [`BookingError::Configuration`] if the configuration is invalid or
    ///   the saved bookings do not fit the configured hall
    /// - [`BookingError::Persistence`] if the saved bookings cannot be read
    pub fn open(config: &Config) -> Result<Self, BookingError> {
        let backend = Arc::new(JsonFileStore::<Dataset>::new(&config.storage.bookings_file));
        Self::with_backend(config.hall.clone(), config.pricing, backend)
    }

    /// Open a session over any snapshot store.
    ///
    /// The first configured showtime is active.
    ///
    /// # Errors
    ///
    /// See [`BookingSession::open`].
    pub fn with_backend(
        hall: HallConfig,
        pricing: PricingPolicy,
        backend: Arc<dyn SnapshotStore<Dataset>>,
    ) -> Result<Self, BookingError> {
        hall.validate()?;
        let active = hall
            .showtimes
            .first()
            .cloned()
            .ok_or(ConfigError::NoShowtimes)?;

        let booking_store = Arc::new(BookingStore::new(backend, hall.clone()));
        let dataset = booking_store.load()?;

        tracing::info!(
            showtimes = hall.showtimes.len(),
            rows = hall.rows,
            cols = hall.cols,
            %active,
            "Booking session opened"
        );

        Ok(Self {
            store: Store::new(
                BookingState::new(dataset, active),
                BookingReducer::new(),
                BookingEnvironment::new(booking_store),
            ),
            hall,
            pricing,
        })
    }

    // ========== Operations ==========

    /// Select the seat if unselected, deselect it otherwise.
    ///
    /// # Errors
    ///
    /// [`BookingError::InvalidSeatReference`] if the seat is outside the hall.
    pub fn toggle_select(&mut self, row: usize, col: usize) -> Result<SessionUpdate, BookingError> {
        self.dispatch(BookingAction::ToggleSeat {
            seat: SeatPosition::new(row, col),
        })
    }

    /// Book every selected seat; already booked ones are reported as conflicts.
    ///
    /// With an empty selection nothing changes and nothing is saved.
    ///
    /// # Errors
    ///
    /// [`BookingError::Persistence`] if the dataset cannot be saved; the grid
    /// and the selection are then as they were before the call.
    pub fn book_selected(&mut self) -> Result<SessionUpdate, BookingError> {
        self.dispatch(BookingAction::BookSelected)
    }

    /// Cancel every selected seat; available ones are reported as conflicts.
    ///
    /// With an empty selection nothing changes and nothing is saved.
    ///
    /// # Errors
    ///
    /// [`BookingError::Persistence`] if the dataset cannot be saved; the grid
    /// and the selection are then as they were before the call.
    pub fn cancel_selected(&mut self) -> Result<SessionUpdate, BookingError> {
        self.dispatch(BookingAction::CancelSelected)
    }

    /// Make every seat of every showtime available.
    ///
    /// Callers must ask the user first and pass the answer; `false` changes
    /// nothing.
    ///
    /// # Errors
    ///
    /// [`BookingError::Persistence`] if the dataset cannot be saved; nothing
    /// is reset in that case.
    pub fn reset_all(&mut self, confirmed: bool) -> Result<SessionUpdate, BookingError> {
        self.dispatch(BookingAction::ResetAll { confirmed })
    }

    /// Switch to another configured showtime and clear the selection.
    ///
    /// # Errors
    ///
    /// [`BookingError::Configuration`] with [`ConfigError::UnknownShowtime`]
    /// if `label` is not configured.
    pub fn change_showtime(&mut self, label: &str) -> Result<SessionUpdate, BookingError> {
        let showtime = self
            .hall
            .showtime(label)
            .cloned()
            .unwrap_or_else(|| Showtime::new(label));
        self.dispatch(BookingAction::ChangeShowtime { showtime })
    }

    // ========== Queries ==========

    /// Booked seats across all showtimes
    #[must_use]
    pub fn total_booked(&self) -> usize {
        self.store.state(|s| statistics::total_booked(&s.dataset))
    }

    /// Revenue of all booked seats across all showtimes
    #[must_use]
    pub fn total_revenue(&self) -> Money {
        self.store
            .state(|s| statistics::total_revenue(&s.dataset, &self.pricing))
    }

    /// Per-showtime sales in screening order, plus totals
    #[must_use]
    pub fn summary(&self) -> SalesSummary {
        self.store.state(|s| {
            SalesSummary::from_dataset(&s.dataset, &self.pricing, &self.hall.showtimes)
        })
    }

    /// Display state of every seat in the active showtime
    #[must_use]
    pub fn seat_map(&self) -> SeatMap {
        self.store.state(BookingState::seat_map)
    }

    /// The active showtime
    #[must_use]
    pub fn active_showtime(&self) -> Showtime {
        self.store.state(|s| s.active_showtime.clone())
    }

    /// Configured showtimes in screening order
    #[must_use]
    pub fn showtimes(&self) -> &[Showtime] {
        &self.hall.showtimes
    }

    /// Currently selected seats, in row-major order
    #[must_use]
    pub fn selection(&self) -> BTreeSet<SeatPosition> {
        self.store.state(|s| s.selection.clone())
    }

    /// Copy of the whole dataset
    #[must_use]
    pub fn dataset(&self) -> Dataset {
        self.store.state(|s| s.dataset.clone())
    }

    /// Hall layout
    #[must_use]
    pub const fn hall(&self) -> &HallConfig {
        &self.hall
    }

    /// Pricing in effect
    #[must_use]
    pub const fn pricing(&self) -> &PricingPolicy {
        &self.pricing
    }

    // ========== Internals ==========

    fn dispatch(&mut self, action: BookingAction) -> Result<SessionUpdate, BookingError> {
        let command = format!("{action:?}");
        self.store.send(action)?;

        let (outcome, rejection, seats) = self
            .store
            .state(|s| (s.last_outcome.clone(), s.last_error.clone(), s.seat_map()));

        if let Some(rejection) = rejection {
            tracing::warn!(%command, reason = %rejection, "Command rejected");
            return Err(Self::rejection_error(rejection));
        }

        let outcome = outcome.ok_or(BookingError::NoOutcome)?;
        let conflicts = outcome.conflicts().to_vec();

        if !conflicts.is_empty() {
            let labels: Vec<String> = conflicts.iter().map(ToString::to_string).collect();
            tracing::warn!(conflicts = ?labels, "Some selected seats were skipped");
        }
        if outcome.mutated_dataset() {
            tracing::info!(
                %command,
                total_booked = self.total_booked(),
                total_revenue = %self.total_revenue(),
                "Bookings committed"
            );
        }

        Ok(SessionUpdate {
            outcome,
            seats,
            conflicts,
        })
    }

    fn rejection_error(rejection: Rejection) -> BookingError {
        match rejection {
            Rejection::SeatOutOfBounds { seat, rows, cols } => BookingError::InvalidSeatReference {
                seat: seat.to_string(),
                rows,
                cols,
            },
            Rejection::UnknownShowtime(showtime) => {
                ConfigError::UnknownShowtime(showtime.to_string()).into()
            },
        }
    }
}
