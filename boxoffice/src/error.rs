//! Error types for the box office.
//!
//! - [`ConfigError`]: configuration values, or persisted data that does not
//!   match them
//! - [`BookingError`]: everything a session operation can fail with
//! - [`SeatLabelError`]: text that is not a seat label like `B3`
//!
//! Seat conflicts and empty selections are not errors; they are reported in
//! the [`BookingOutcome`](crate::types::BookingOutcome) of a successful call.

use boxoffice_core::snapshot_store::SnapshotStoreError;
use boxoffice_runtime::StoreError;
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The hall has zero rows or zero columns.
    #[error("Hall must have at least one row and one column (got {rows}x{cols})")]
    EmptyHall {
        /// Configured rows
        rows: usize,
        /// Configured columns
        cols: usize,
    },

    /// No showtimes configured.
    #[error("At least one showtime must be configured")]
    NoShowtimes,

    /// The same showtime label appears twice.
    #[error("Showtime '{0}' is configured more than once")]
    DuplicateShowtime(String),

    /// An environment value could not be parsed.
    #[error("Invalid value '{value}' for {key}")]
    InvalidValue {
        /// Variable name
        key: String,
        /// Raw value
        value: String,
    },

    /// Persisted showtimes differ from the configured ones.
    #[error(
        "Persisted showtimes do not match configuration (missing: {missing:?}, unexpected: {unexpected:?})"
    )]
    ShowtimeMismatch {
        /// Configured but not persisted
        missing: Vec<String>,
        /// Persisted but not configured
        unexpected: Vec<String>,
    },

    /// A persisted grid has different dimensions than the hall.
    #[error(
        "Persisted grid for '{showtime}' is {found_rows}x{found_cols}, expected {expected_rows}x{expected_cols}"
    )]
    GridDimensionMismatch {
        /// Showtime whose grid is wrong
        showtime: String,
        /// Configured rows
        expected_rows: usize,
        /// Configured columns
        expected_cols: usize,
        /// Persisted rows
        found_rows: usize,
        /// Persisted columns (first offending row)
        found_cols: usize,
    },

    /// A showtime label that is not configured.
    #[error("Unknown showtime '{0}'")]
    UnknownShowtime(String),
}

/// Text that does not name a seat.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid seat label '{0}' (expected a row letter and a column number, like B3)")]
pub struct SeatLabelError(pub String);

/// Errors returned by booking session operations.
#[derive(Error, Debug)]
pub enum BookingError {
    /// Configuration problem, including unknown showtimes and persisted data
    /// that does not fit the configured hall.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Seat coordinates outside the hall.
    #[error("Seat {seat} is outside the {rows}x{cols} hall")]
    InvalidSeatReference {
        /// Offending seat label
        seat: String,
        /// Hall rows
        rows: usize,
        /// Hall columns
        cols: usize,
    },

    /// The dataset could not be read or written.
    ///
    /// When returned from a mutating operation, the in-memory state has been
    /// restored to its value before the call.
    #[error("Persistence failure: {0}")]
    Persistence(#[from] SnapshotStoreError),

    /// The reducer produced neither an outcome nor a rejection.
    #[error("Operation finished without an outcome")]
    NoOutcome,
}

impl From<StoreError> for BookingError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::PersistenceFailed(source) => Self::Persistence(source),
        }
    }
}
