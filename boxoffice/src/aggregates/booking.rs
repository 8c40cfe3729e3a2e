//! Booking aggregate.
//!
//! Owns the seat state machine of a session. Per seat of the active showtime
//! the state is `{Available, Booked} x {Unselected, Selected}`:
//!
//! - toggling flips selection only
//! - booking moves selected available seats to booked; selected seats that
//!   are already booked are conflicts
//! - cancelling is the mirror image
//! - reset makes every seat of every showtime available
//!
//! Book, cancel and reset clear the selection and persist the whole dataset.
//! Persistence is returned as an effect; the runtime rolls state back if it
//! fails, so a mutation that was not saved never sticks.

use crate::store::BookingStore;
use crate::types::{
    BatchOperation, BookingOutcome, BookingState, Rejection, SeatPosition, SeatState, Showtime,
};
use boxoffice_core::{effect::Effect, reducer::Reducer, save_snapshot, smallvec, SmallVec};
use std::sync::Arc;

// ============================================================================
// Actions (Commands)
// ============================================================================

/// Commands accepted by the Booking aggregate
///
/// Every command is validated by the reducer. What actually happened is
/// recorded as a private `BookingEvent`, so state only changes through the
/// reducer's own decisions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingAction {
    /// Flip selection of a seat in the active showtime
    ToggleSeat {
        /// The seat
        seat: SeatPosition,
    },

    /// Book every selected seat
    BookSelected,

    /// Cancel every selected seat
    CancelSelected,

    /// Make every seat of every showtime available
    ResetAll {
        /// Whether the user confirmed; nothing happens otherwise
        confirmed: bool,
    },

    /// Switch the active showtime
    ChangeShowtime {
        /// Target showtime
        showtime: Showtime,
    },
}

// ============================================================================
// Events
// ============================================================================

/// Facts produced by validating a command
#[derive(Clone, Debug, PartialEq, Eq)]
enum BookingEvent {
    SeatSelectionToggled {
        seat: SeatPosition,
        selected: bool,
    },
    SeatsBooked {
        seats: Vec<SeatPosition>,
        conflicts: Vec<SeatPosition>,
    },
    SeatsCancelled {
        seats: Vec<SeatPosition>,
        conflicts: Vec<SeatPosition>,
    },
    AllSeatsReset,
    ResetDeclined,
    ShowtimeChanged {
        showtime: Showtime,
    },
    NothingSelected {
        operation: BatchOperation,
    },
    ValidationFailed {
        error: Rejection,
    },
}

impl BookingEvent {
    /// Whether applying this event rewrites the dataset
    const fn changes_dataset(&self) -> bool {
        matches!(
            self,
            Self::SeatsBooked { .. } | Self::SeatsCancelled { .. } | Self::AllSeatsReset
        )
    }
}

// ============================================================================
// Environment
// ============================================================================

/// Environment dependencies for the Booking reducer
#[derive(Clone, Debug)]
pub struct BookingEnvironment {
    /// Where the dataset is persisted; also knows the hall layout
    pub store: Arc<BookingStore>,
}

impl BookingEnvironment {
    /// Creates a new `BookingEnvironment`
    #[must_use]
    pub const fn new(store: Arc<BookingStore>) -> Self {
        Self { store }
    }
}

// ============================================================================
// Reducer
// ============================================================================

/// Reducer for the Booking aggregate
#[derive(Clone, Debug, Default)]
pub struct BookingReducer;

impl BookingReducer {
    /// Creates a new `BookingReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates a `ToggleSeat` command
    fn validate_toggle_seat(
        env: &BookingEnvironment,
        seat: SeatPosition,
    ) -> Result<(), Rejection> {
        let hall = env.store.hall();
        if seat.row >= hall.rows || seat.col >= hall.cols {
            return Err(Rejection::SeatOutOfBounds {
                seat,
                rows: hall.rows,
                cols: hall.cols,
            });
        }
        Ok(())
    }

    /// Validates a `ChangeShowtime` command
    fn validate_change_showtime(
        state: &BookingState,
        env: &BookingEnvironment,
        showtime: &Showtime,
    ) -> Result<(), Rejection> {
        if !env.store.hall().showtimes.contains(showtime) || !state.dataset.contains(showtime) {
            return Err(Rejection::UnknownShowtime(showtime.clone()));
        }
        Ok(())
    }

    /// Splits the selection into seats currently in `from` and conflicts.
    ///
    /// Both lists are in row-major order.
    fn partition_selection(
        state: &BookingState,
        from: SeatState,
    ) -> Result<(Vec<SeatPosition>, Vec<SeatPosition>), Rejection> {
        let grid = state
            .active_grid()
            .ok_or_else(|| Rejection::UnknownShowtime(state.active_showtime.clone()))?;

        Ok(state
            .selection
            .iter()
            .partition(|seat| grid.get(**seat) == Some(from)))
    }

    /// Builds the event for a batch command
    fn batch_event(state: &BookingState, operation: BatchOperation) -> BookingEvent {
        if state.selection.is_empty() {
            return BookingEvent::NothingSelected { operation };
        }

        let from = match operation {
            BatchOperation::Book => SeatState::Available,
            BatchOperation::Cancel => SeatState::Booked,
        };

        match Self::partition_selection(state, from) {
            Ok((seats, conflicts)) => match operation {
                BatchOperation::Book => BookingEvent::SeatsBooked { seats, conflicts },
                BatchOperation::Cancel => BookingEvent::SeatsCancelled { seats, conflicts },
            },
            Err(error) => BookingEvent::ValidationFailed { error },
        }
    }

    /// Applies `to` to every seat of the active grid in `seats`
    fn set_seats(state: &mut BookingState, seats: &[SeatPosition], to: SeatState) {
        if let Some(grid) = state.dataset.grid_mut(&state.active_showtime) {
            for &seat in seats {
                grid.set(seat, to);
            }
        }
    }

    /// Applies an event to state
    fn apply_event(state: &mut BookingState, event: &BookingEvent) {
        let outcome = match event {
            BookingEvent::SeatSelectionToggled { seat, selected } => {
                if *selected {
                    state.selection.insert(*seat);
                } else {
                    state.selection.remove(seat);
                }
                BookingOutcome::SelectionToggled {
                    seat: *seat,
                    selected: *selected,
                }
            },
            BookingEvent::SeatsBooked { seats, conflicts } => {
                Self::set_seats(state, seats, SeatState::Booked);
                state.selection.clear();
                BookingOutcome::Booked {
                    booked: seats.clone(),
                    conflicts: conflicts.clone(),
                }
            },
            BookingEvent::SeatsCancelled { seats, conflicts } => {
                Self::set_seats(state, seats, SeatState::Available);
                state.selection.clear();
                BookingOutcome::Cancelled {
                    cancelled: seats.clone(),
                    conflicts: conflicts.clone(),
                }
            },
            BookingEvent::AllSeatsReset => {
                state.dataset.reset_all();
                state.selection.clear();
                BookingOutcome::ResetCompleted
            },
            BookingEvent::ResetDeclined => BookingOutcome::ResetDeclined,
            BookingEvent::ShowtimeChanged { showtime } => {
                state.active_showtime = showtime.clone();
                state.selection.clear();
                BookingOutcome::ShowtimeChanged {
                    showtime: showtime.clone(),
                }
            },
            BookingEvent::NothingSelected { operation } => BookingOutcome::NothingSelected {
                operation: *operation,
            },
            BookingEvent::ValidationFailed { error } => {
                state.last_outcome = None;
                state.last_error = Some(error.clone());
                return;
            },
        };

        state.last_outcome = Some(outcome);
        state.last_error = None;
    }

    /// Applies `event` and, if it changed the dataset, persists it
    fn commit(
        state: &mut BookingState,
        event: &BookingEvent,
        env: &BookingEnvironment,
    ) -> SmallVec<[Effect; 4]> {
        Self::apply_event(state, event);

        if event.changes_dataset() {
            smallvec![save_snapshot! {
                store: env.store,
                snapshot: state.dataset.clone()
            }]
        } else {
            SmallVec::new()
        }
    }
}

impl Reducer for BookingReducer {
    type State = BookingState;
    type Action = BookingAction;
    type Environment = BookingEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect; 4]> {
        let event = match action {
            BookingAction::ToggleSeat { seat } => match Self::validate_toggle_seat(env, seat) {
                Ok(()) => BookingEvent::SeatSelectionToggled {
                    seat,
                    selected: !state.is_selected(seat),
                },
                Err(error) => BookingEvent::ValidationFailed { error },
            },
            BookingAction::BookSelected => Self::batch_event(state, BatchOperation::Book),
            BookingAction::CancelSelected => Self::batch_event(state, BatchOperation::Cancel),
            BookingAction::ResetAll { confirmed: true } => BookingEvent::AllSeatsReset,
            BookingAction::ResetAll { confirmed: false } => BookingEvent::ResetDeclined,
            BookingAction::ChangeShowtime { showtime } => {
                match Self::validate_change_showtime(state, env, &showtime) {
                    Ok(()) => BookingEvent::ShowtimeChanged { showtime },
                    Err(error) => BookingEvent::ValidationFailed { error },
                }
            },
        };

        tracing::trace!(?event, "Applying booking event");
        Self::commit(state, &event, env)
    }
}
