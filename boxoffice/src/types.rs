//! Domain types for the box office.
//!
//! A hall is a fixed `rows x cols` grid of seats. Every configured showtime has
//! its own [`Grid`], and the [`Dataset`] maps showtimes to grids. The dataset is
//! the only thing that gets persisted; the seat selection lives in
//! [`BookingState`] and never leaves memory.

use crate::config::HallConfig;
use crate::error::{ConfigError, SeatLabelError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

const ROW_LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// ============================================================================
// Seats
// ============================================================================

/// Persisted state of a single seat.
///
/// Serialized as `"O"` (available) and `"X"` (booked).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatState {
    /// Free to book
    #[serde(rename = "O")]
    Available,
    /// Taken
    #[serde(rename = "X")]
    Booked,
}

impl SeatState {
    /// Returns `true` if the seat is booked
    #[must_use]
    pub const fn is_booked(self) -> bool {
        matches!(self, Self::Booked)
    }
}

/// Zero-based seat coordinates within a grid.
///
/// Ordering is row-major, which is the order conflicts are reported in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeatPosition {
    /// Row index, `0` is row `A`
    pub row: usize,
    /// Column index, `0` is column `1`
    pub col: usize,
}

impl SeatPosition {
    /// Creates a seat position
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Letter label of a row: `A`..`Z`, then `AA`, `AB`, ...
#[must_use]
pub fn row_label(row: usize) -> String {
    let mut remaining = row + 1;
    let mut letters = Vec::new();
    while remaining > 0 {
        remaining -= 1;
        letters.push(char::from(ROW_LETTERS[remaining % 26]));
        remaining /= 26;
    }
    letters.iter().rev().collect()
}

impl fmt::Display for SeatPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", row_label(self.row), self.col + 1)
    }
}

impl FromStr for SeatPosition {
    type Err = SeatLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let invalid = || SeatLabelError(label.to_string());

        let split = label
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(label.len());
        let (letters, digits) = label.split_at(split);
        if letters.is_empty() || digits.is_empty() {
            return Err(invalid());
        }

        let mut row: usize = 0;
        for letter in letters.chars() {
            let upper = letter.to_ascii_uppercase();
            let value = ROW_LETTERS
                .iter()
                .position(|&b| char::from(b) == upper)
                .ok_or_else(invalid)?;
            row = row
                .checked_mul(26)
                .and_then(|r| r.checked_add(value + 1))
                .ok_or_else(invalid)?;
        }

        let column: usize = digits.parse().map_err(|_| invalid())?;
        if column == 0 {
            return Err(invalid());
        }

        Ok(Self::new(row - 1, column - 1))
    }
}

// ============================================================================
// Showtimes
// ============================================================================

/// Label of a screening, e.g. `"7:00 PM"`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Showtime(String);

impl Showtime {
    /// Creates a showtime label
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Showtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Showtime {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

// ============================================================================
// Grid and Dataset
// ============================================================================

/// Seat states of one showtime, indexed `[row][col]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid(Vec<Vec<SeatState>>);

impl Grid {
    /// Creates a grid with every seat available
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self(vec![vec![SeatState::Available; cols]; rows])
    }

    /// Creates a grid from explicit rows
    #[must_use]
    pub const fn from_rows(rows: Vec<Vec<SeatState>>) -> Self {
        Self(rows)
    }

    /// Number of rows
    #[must_use]
    pub fn rows(&self) -> usize {
        self.0.len()
    }

    /// Number of columns (of the first row)
    #[must_use]
    pub fn cols(&self) -> usize {
        self.0.first().map_or(0, Vec::len)
    }

    /// Returns `true` if the grid is exactly `rows x cols`
    #[must_use]
    pub fn has_dimensions(&self, rows: usize, cols: usize) -> bool {
        self.0.len() == rows && self.0.iter().all(|row| row.len() == cols)
    }

    /// State of a seat, `None` if outside the grid
    #[must_use]
    pub fn get(&self, seat: SeatPosition) -> Option<SeatState> {
        self.0.get(seat.row)?.get(seat.col).copied()
    }

    /// Sets the state of a seat. Returns `false` if the seat is outside the grid.
    pub fn set(&mut self, seat: SeatPosition, state: SeatState) -> bool {
        match self.0.get_mut(seat.row).and_then(|row| row.get_mut(seat.col)) {
            Some(cell) => {
                *cell = state;
                true
            },
            None => false,
        }
    }

    /// Row slices, top to bottom
    pub fn row_states(&self) -> impl Iterator<Item = &[SeatState]> {
        self.0.iter().map(Vec::as_slice)
    }

    /// Positions of booked seats in row-major order
    pub fn booked_seats(&self) -> impl Iterator<Item = SeatPosition> + '_ {
        self.0.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, state)| state.is_booked())
                .map(move |(col, _)| SeatPosition::new(row, col))
        })
    }

    /// Number of booked seats
    #[must_use]
    pub fn booked_count(&self) -> usize {
        self.0.iter().flatten().filter(|state| state.is_booked()).count()
    }

    /// Total number of seats
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    /// Marks every seat available
    pub fn reset(&mut self) {
        self.0.iter_mut().flatten().for_each(|state| *state = SeatState::Available);
    }
}

/// Seat grids of every showtime. This is the persisted document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset(BTreeMap<Showtime, Grid>);

impl Dataset {
    /// Creates a dataset with an all-available grid for every configured showtime
    #[must_use]
    pub fn fresh(hall: &HallConfig) -> Self {
        Self(
            hall.showtimes
                .iter()
                .map(|showtime| (showtime.clone(), Grid::new(hall.rows, hall.cols)))
                .collect(),
        )
    }

    /// Creates a dataset from explicit grids
    #[must_use]
    pub fn from_grids(grids: impl IntoIterator<Item = (Showtime, Grid)>) -> Self {
        Self(grids.into_iter().collect())
    }

    /// Grid of a showtime
    #[must_use]
    pub fn grid(&self, showtime: &Showtime) -> Option<&Grid> {
        self.0.get(showtime)
    }

    /// Mutable grid of a showtime
    pub fn grid_mut(&mut self, showtime: &Showtime) -> Option<&mut Grid> {
        self.0.get_mut(showtime)
    }

    /// Returns `true` if the showtime has a grid
    #[must_use]
    pub fn contains(&self, showtime: &Showtime) -> bool {
        self.0.contains_key(showtime)
    }

    /// Showtimes and grids, in label order
    pub fn iter(&self) -> impl Iterator<Item = (&Showtime, &Grid)> {
        self.0.iter()
    }

    /// Number of showtimes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no showtimes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Booked seats across all showtimes
    #[must_use]
    pub fn total_booked(&self) -> usize {
        self.0.values().map(Grid::booked_count).sum()
    }

    /// Marks every seat of every showtime available
    pub fn reset_all(&mut self) {
        self.0.values_mut().for_each(Grid::reset);
    }

    /// Checks that the dataset has exactly the configured showtimes, each
    /// with a grid of the configured dimensions.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ShowtimeMismatch`] if showtimes are missing or extra
    /// - [`ConfigError::GridDimensionMismatch`] for the first grid of the
    ///   wrong size
    pub fn conform(&self, hall: &HallConfig) -> Result<(), ConfigError> {
        let missing: Vec<String> = hall
            .showtimes
            .iter()
            .filter(|showtime| !self.0.contains_key(*showtime))
            .map(ToString::to_string)
            .collect();
        let unexpected: Vec<String> = self
            .0
            .keys()
            .filter(|showtime| !hall.showtimes.contains(showtime))
            .map(ToString::to_string)
            .collect();

        if !missing.is_empty() || !unexpected.is_empty() {
            return Err(ConfigError::ShowtimeMismatch { missing, unexpected });
        }

        for showtime in &hall.showtimes {
            let Some(grid) = self.0.get(showtime) else {
                continue;
            };
            if !grid.has_dimensions(hall.rows, hall.cols) {
                return Err(ConfigError::GridDimensionMismatch {
                    showtime: showtime.to_string(),
                    expected_rows: hall.rows,
                    expected_cols: hall.cols,
                    found_rows: grid.rows(),
                    found_cols: grid
                        .0
                        .iter()
                        .map(Vec::len)
                        .find(|&len| len != hall.cols)
                        .unwrap_or(hall.cols),
                });
            }
        }

        Ok(())
    }
}

// ============================================================================
// Display
// ============================================================================

/// How a seat should be rendered: stored state, overridden by selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SeatDisplay {
    /// Available and not selected
    Available,
    /// Booked and not selected
    Booked,
    /// Selected, whatever the stored state
    Selected,
}

impl SeatDisplay {
    /// Single-character marker: `O`, `X` or `S`
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Available => 'O',
            Self::Booked => 'X',
            Self::Selected => 'S',
        }
    }
}

/// Display states of every seat in one grid, indexed `[row][col]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SeatMap {
    cells: Vec<Vec<SeatDisplay>>,
}

impl SeatMap {
    /// Builds the map of `grid` with `selection` overlaid
    #[must_use]
    pub fn new(grid: &Grid, selection: &BTreeSet<SeatPosition>) -> Self {
        let cells = grid
            .row_states()
            .enumerate()
            .map(|(row, states)| {
                states
                    .iter()
                    .enumerate()
                    .map(|(col, state)| {
                        if selection.contains(&SeatPosition::new(row, col)) {
                            SeatDisplay::Selected
                        } else if state.is_booked() {
                            SeatDisplay::Booked
                        } else {
                            SeatDisplay::Available
                        }
                    })
                    .collect()
            })
            .collect();
        Self { cells }
    }

    /// Display state of a seat, `None` if outside the grid
    #[must_use]
    pub fn get(&self, seat: SeatPosition) -> Option<SeatDisplay> {
        self.cells.get(seat.row)?.get(seat.col).copied()
    }

    /// Number of rows
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Row slices, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[SeatDisplay]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

// ============================================================================
// Money Value Object
// ============================================================================

/// Whole currency units. Signed: deep rows may be priced at zero or below.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Zero
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` value from whole units
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Returns the amount in whole units
    #[must_use]
    pub const fn amount(self) -> i64 {
        self.0
    }

    /// Multiplies by a seat count, saturating at the `i64` bounds
    #[must_use]
    pub fn times(self, count: usize) -> Self {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        Self(self.0.saturating_mul(count))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-${}", self.0.unsigned_abs())
        } else {
            write!(f, "${}", self.0)
        }
    }
}

// ============================================================================
// Booking State
// ============================================================================

/// Which batch operation an outcome refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BatchOperation {
    /// Booking the selection
    Book,
    /// Cancelling the selection
    Cancel,
}

impl fmt::Display for BatchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Book => f.write_str("book"),
            Self::Cancel => f.write_str("cancel"),
        }
    }
}

/// Result of a committed session operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingOutcome {
    /// A seat was added to or removed from the selection
    SelectionToggled {
        /// The seat
        seat: SeatPosition,
        /// Whether it is selected now
        selected: bool,
    },
    /// The selection was booked
    Booked {
        /// Seats that went from available to booked
        booked: Vec<SeatPosition>,
        /// Selected seats that were already booked
        conflicts: Vec<SeatPosition>,
    },
    /// The selection was cancelled
    Cancelled {
        /// Seats that went from booked to available
        cancelled: Vec<SeatPosition>,
        /// Selected seats that were already available
        conflicts: Vec<SeatPosition>,
    },
    /// Book or cancel with an empty selection; nothing changed
    NothingSelected {
        /// The attempted operation
        operation: BatchOperation,
    },
    /// Every seat of every showtime is available again
    ResetCompleted,
    /// Reset was not confirmed; nothing changed
    ResetDeclined,
    /// The active showtime changed
    ShowtimeChanged {
        /// The new active showtime
        showtime: Showtime,
    },
}

impl BookingOutcome {
    /// Seats that failed their precondition, in row-major order
    #[must_use]
    pub fn conflicts(&self) -> &[SeatPosition] {
        match self {
            Self::Booked { conflicts, .. } | Self::Cancelled { conflicts, .. } => conflicts,
            _ => &[],
        }
    }

    /// Returns `true` if the dataset was changed
    #[must_use]
    pub fn mutated_dataset(&self) -> bool {
        match self {
            Self::Booked { booked: changed, .. } | Self::Cancelled { cancelled: changed, .. } => {
                !changed.is_empty()
            },
            Self::ResetCompleted => true,
            _ => false,
        }
    }

    /// User-facing messages: one per conflict, then a confirmation
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::SelectionToggled { seat, selected: true } => vec![format!("Seat {seat} selected.")],
            Self::SelectionToggled { seat, selected: false } => {
                vec![format!("Seat {seat} deselected.")]
            },
            Self::Booked { booked, conflicts } => {
                let mut messages: Vec<String> = conflicts
                    .iter()
                    .map(|seat| format!("Seat {seat} is already booked."))
                    .collect();
                if !booked.is_empty() {
                    messages.push("Selected seats have been booked successfully!".to_string());
                }
                messages
            },
            Self::Cancelled { cancelled, conflicts } => {
                let mut messages: Vec<String> = conflicts
                    .iter()
                    .map(|seat| format!("Seat {seat} is already available."))
                    .collect();
                if !cancelled.is_empty() {
                    messages.push("Selected seats have been canceled successfully!".to_string());
                }
                messages
            },
            Self::NothingSelected { operation } => {
                vec![format!("Please select at least one seat to {operation}.")]
            },
            Self::ResetCompleted => vec!["All bookings have been reset.".to_string()],
            Self::ResetDeclined => vec!["Reset cancelled. No bookings were changed.".to_string()],
            Self::ShowtimeChanged { showtime } => vec![format!("Now showing {showtime}.")],
        }
    }
}

/// Why the reducer refused a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Seat coordinates outside the hall
    SeatOutOfBounds {
        /// The seat
        seat: SeatPosition,
        /// Hall rows
        rows: usize,
        /// Hall columns
        cols: usize,
    },
    /// Showtime not configured
    UnknownShowtime(Showtime),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeatOutOfBounds { seat, rows, cols } => {
                write!(f, "Seat {seat} is outside the {rows}x{cols} hall")
            },
            Self::UnknownShowtime(showtime) => write!(f, "Unknown showtime '{showtime}'"),
        }
    }
}

/// State of a booking session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingState {
    /// Seat grids of every showtime
    pub dataset: Dataset,
    /// Showtime the selection refers to
    pub active_showtime: Showtime,
    /// Selected seats of the active showtime; never persisted
    pub selection: BTreeSet<SeatPosition>,
    /// Outcome of the last committed command
    pub last_outcome: Option<BookingOutcome>,
    /// Last validation error (if any)
    pub last_error: Option<Rejection>,
}

impl BookingState {
    /// Creates a session state with an empty selection
    #[must_use]
    pub const fn new(dataset: Dataset, active_showtime: Showtime) -> Self {
        Self {
            dataset,
            active_showtime,
            selection: BTreeSet::new(),
            last_outcome: None,
            last_error: None,
        }
    }

    /// Grid of the active showtime
    #[must_use]
    pub fn active_grid(&self) -> Option<&Grid> {
        self.dataset.grid(&self.active_showtime)
    }

    /// Display states of the active showtime
    #[must_use]
    pub fn seat_map(&self) -> SeatMap {
        self.active_grid()
            .map(|grid| SeatMap::new(grid, &self.selection))
            .unwrap_or_default()
    }

    /// Returns `true` if the seat is selected
    #[must_use]
    pub fn is_selected(&self, seat: SeatPosition) -> bool {
        self.selection.contains(&seat)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn hall() -> HallConfig {
        HallConfig {
            rows: 2,
            cols: 3,
            showtimes: vec![Showtime::new("1:00 PM"), Showtime::new("7:00 PM")],
        }
    }

    #[test]
    fn seat_labels_letter_rows_and_number_columns() {
        assert_eq!(SeatPosition::new(0, 0).to_string(), "A1");
        assert_eq!(SeatPosition::new(1, 0).to_string(), "B1");
        assert_eq!(SeatPosition::new(4, 4).to_string(), "E5");
        assert_eq!(SeatPosition::new(26, 2).to_string(), "AA3");
    }

    #[test]
    fn seat_labels_parse_case_insensitively() {
        assert_eq!("b3".parse::<SeatPosition>().unwrap(), SeatPosition::new(1, 2));
        assert_eq!(" A10 ".parse::<SeatPosition>().unwrap(), SeatPosition::new(0, 9));
        assert_eq!("AA1".parse::<SeatPosition>().unwrap(), SeatPosition::new(26, 0));
    }

    #[test]
    fn malformed_seat_labels_are_rejected() {
        for label in ["", "A", "3", "A0", "3A", "A-1", "Ä1"] {
            assert!(label.parse::<SeatPosition>().is_err(), "accepted {label:?}");
        }
    }

    #[test]
    fn seat_state_serializes_as_letters() {
        let grid = Grid::from_rows(vec![vec![SeatState::Available, SeatState::Booked]]);
        assert_eq!(serde_json::to_string(&grid).unwrap(), r#"[["O","X"]]"#);
    }

    #[test]
    fn fresh_dataset_has_every_seat_available() {
        let dataset = Dataset::fresh(&hall());

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.total_booked(), 0);
        for (_, grid) in dataset.iter() {
            assert!(grid.has_dimensions(2, 3));
            assert_eq!(grid.capacity(), 6);
        }
        assert!(dataset.conform(&hall()).is_ok());
    }

    #[test]
    fn conform_reports_missing_and_unexpected_showtimes() {
        let dataset = Dataset::from_grids([
            (Showtime::new("1:00 PM"), Grid::new(2, 3)),
            (Showtime::new("9:00 PM"), Grid::new(2, 3)),
        ]);

        let error = dataset.conform(&hall()).unwrap_err();

        assert_eq!(
            error,
            ConfigError::ShowtimeMismatch {
                missing: vec!["7:00 PM".into()],
                unexpected: vec!["9:00 PM".into()],
            }
        );
    }

    #[test]
    fn conform_reports_jagged_grids() {
        let mut rows = vec![vec![SeatState::Available; 3]; 2];
        rows[1].pop();
        let dataset = Dataset::from_grids([
            (Showtime::new("1:00 PM"), Grid::new(2, 3)),
            (Showtime::new("7:00 PM"), Grid::from_rows(rows)),
        ]);

        let error = dataset.conform(&hall()).unwrap_err();

        assert!(matches!(
            error,
            ConfigError::GridDimensionMismatch { found_rows: 2, found_cols: 2, .. }
        ));
    }

    #[test]
    fn seat_map_overlays_selection() {
        let mut grid = Grid::new(2, 2);
        grid.set(SeatPosition::new(0, 0), SeatState::Booked);
        grid.set(SeatPosition::new(1, 1), SeatState::Booked);
        let selection = BTreeSet::from([SeatPosition::new(1, 1), SeatPosition::new(0, 1)]);

        let map = SeatMap::new(&grid, &selection);

        assert_eq!(map.get(SeatPosition::new(0, 0)), Some(SeatDisplay::Booked));
        assert_eq!(map.get(SeatPosition::new(0, 1)), Some(SeatDisplay::Selected));
        assert_eq!(map.get(SeatPosition::new(1, 0)), Some(SeatDisplay::Available));
        assert_eq!(map.get(SeatPosition::new(1, 1)), Some(SeatDisplay::Selected));
        assert_eq!(map.get(SeatPosition::new(2, 0)), None);
    }

    #[test]
    fn money_formats_sign_before_currency() {
        assert_eq!(Money::new(20).to_string(), "$20");
        assert_eq!(Money::new(-2).to_string(), "-$2");
        assert_eq!([Money::new(10), Money::new(-4)].into_iter().sum::<Money>(), Money::new(6));
        assert_eq!(Money::new(8).times(3), Money::new(24));
    }

    #[test]
    fn outcome_messages_list_conflicts_before_confirmation() {
        let outcome = BookingOutcome::Booked {
            booked: vec![SeatPosition::new(1, 0)],
            conflicts: vec![SeatPosition::new(0, 0)],
        };

        assert_eq!(
            outcome.messages(),
            vec![
                "Seat A1 is already booked.".to_string(),
                "Selected seats have been booked successfully!".to_string(),
            ]
        );
        assert_eq!(
            BookingOutcome::NothingSelected { operation: BatchOperation::Cancel }.messages(),
            vec!["Please select at least one seat to cancel.".to_string()]
        );
    }
}
