//! Property tests for bookings.
//!
//! Random selections on random halls: counts always match the grids,
//! book-then-cancel is an identity, conflicts are exactly the seats that
//! failed, and a failed save never changes anything.
//!
//! Run with: `cargo test --test booking_properties_test`

#![allow(clippy::unwrap_used)]

use boxoffice::statistics;
use boxoffice::{
    BookingSession, Dataset, HallConfig, JsonFileStore, PricingPolicy, SeatPosition, SeatState,
    Showtime,
};
use boxoffice_core::snapshot_store::SnapshotStore;
use boxoffice_testing::{FailingSnapshotStore, InMemorySnapshotStore};
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::sync::Arc;

fn arb_hall() -> impl Strategy<Value = HallConfig> {
    (1usize..8, 1usize..8, 1usize..4).prop_map(|(rows, cols, showtimes)| HallConfig {
        rows,
        cols,
        showtimes: (0..showtimes)
            .map(|i| Showtime::new(format!("Show {i}")))
            .collect(),
    })
}

fn arb_seats(rows: usize, cols: usize) -> impl Strategy<Value = Vec<SeatPosition>> {
    prop::collection::vec(
        (0..rows, 0..cols).prop_map(|(row, col)| SeatPosition::new(row, col)),
        0..20,
    )
}

fn arb_hall_and_batches() -> impl Strategy<Value = (HallConfig, Vec<Vec<SeatPosition>>)> {
    arb_hall().prop_flat_map(|hall| {
        let batches = prop::collection::vec(arb_seats(hall.rows, hall.cols), 1..5);
        (Just(hall), batches)
    })
}

/// A hall with some seats booked in every showtime.
fn arb_booked_dataset() -> impl Strategy<Value = (HallConfig, Dataset)> {
    arb_hall_and_batches().prop_map(|(hall, batches)| {
        let mut dataset = Dataset::fresh(&hall);
        for (i, batch) in batches.iter().enumerate() {
            let showtime = &hall.showtimes[i % hall.showtimes.len()];
            let grid = dataset.grid_mut(showtime).unwrap();
            for seat in batch {
                grid.set(*seat, SeatState::Booked);
            }
        }
        (hall, dataset)
    })
}

fn session_for(hall: &HallConfig) -> BookingSession {
    BookingSession::with_backend(
        hall.clone(),
        PricingPolicy::default(),
        Arc::new(InMemorySnapshotStore::<Dataset>::new()),
    )
    .unwrap()
}

/// Selects exactly `seats` (duplicates collapse) from an empty selection.
fn select(session: &mut BookingSession, seats: &[SeatPosition]) -> BTreeSet<SeatPosition> {
    let wanted: BTreeSet<SeatPosition> = seats.iter().copied().collect();
    for seat in &wanted {
        session.toggle_select(seat.row, seat.col).unwrap();
    }
    wanted
}

fn booked_cells(dataset: &Dataset) -> usize {
    dataset
        .iter()
        .map(|(_, grid)| {
            grid.row_states()
                .flatten()
                .filter(|state| **state == SeatState::Booked)
                .count()
        })
        .sum()
}

proptest! {
    #[test]
    fn total_booked_matches_booked_cells((hall, batches) in arb_hall_and_batches()) {
        let mut session = session_for(&hall);

        for (i, batch) in batches.iter().enumerate() {
            let showtime = hall.showtimes[i % hall.showtimes.len()].clone();
            session.change_showtime(showtime.as_str()).unwrap();
            select(&mut session, batch);
            if i % 3 == 2 {
                session.cancel_selected().unwrap();
            } else {
                session.book_selected().unwrap();
            }

            let dataset = session.dataset();
            prop_assert_eq!(session.total_booked(), booked_cells(&dataset));
            prop_assert_eq!(
                session.total_revenue(),
                statistics::total_revenue(&dataset, &PricingPolicy::default())
            );
        }
    }

    #[test]
    fn book_then_cancel_restores_grid((hall, batches) in arb_hall_and_batches()) {
        let mut session = session_for(&hall);
        select(&mut session, &batches[0]);
        session.book_selected().unwrap();
        let before = session.dataset();

        let last = batches.last().unwrap();
        let available: Vec<SeatPosition> = last
            .iter()
            .copied()
            .filter(|seat| {
                before.grid(&hall.showtimes[0]).unwrap().get(*seat) == Some(SeatState::Available)
            })
            .collect();

        select(&mut session, &available);
        session.book_selected().unwrap();
        select(&mut session, &available);
        session.cancel_selected().unwrap();

        prop_assert_eq!(session.dataset(), before);
    }

    #[test]
    fn conflicts_are_exactly_the_seats_already_booked((hall, batches) in arb_hall_and_batches()) {
        let mut session = session_for(&hall);
        select(&mut session, &batches[0]);
        session.book_selected().unwrap();
        let grid = session.dataset().grid(&hall.showtimes[0]).unwrap().clone();

        let selected = select(&mut session, batches.last().unwrap());
        let update = session.book_selected().unwrap();

        let expected: Vec<SeatPosition> = selected
            .iter()
            .copied()
            .filter(|seat| grid.get(*seat) == Some(SeatState::Booked))
            .collect();
        prop_assert_eq!(update.conflicts, expected);
        for seat in &selected {
            prop_assert_eq!(
                session.dataset().grid(&hall.showtimes[0]).unwrap().get(*seat),
                Some(SeatState::Booked)
            );
        }
    }

    #[test]
    fn failed_saves_change_nothing((hall, batches) in arb_hall_and_batches()) {
        let mut session = BookingSession::with_backend(
            hall.clone(),
            PricingPolicy::default(),
            Arc::new(FailingSnapshotStore::new("disk full")),
        )
        .unwrap();
        let selected = select(&mut session, &batches[0]);
        let before = session.dataset();

        let booked = session.book_selected();
        let cancelled = session.cancel_selected();
        let reset = session.reset_all(true);

        prop_assert_eq!(session.dataset(), before);
        if selected.is_empty() {
            prop_assert!(booked.is_ok());
            prop_assert!(cancelled.is_ok());
        } else {
            prop_assert!(booked.is_err());
            prop_assert!(cancelled.is_err());
        }
        prop_assert!(reset.is_err());
        prop_assert_eq!(session.selection(), selected);
    }

    #[test]
    fn json_file_round_trips_any_dataset((hall, dataset) in arb_booked_dataset()) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::<Dataset>::new(dir.path().join("bookings.json"));

        store.save(&dataset).unwrap();
        let loaded = store.load().unwrap().unwrap();

        prop_assert_eq!(&loaded, &dataset);
        prop_assert!(loaded.conform(&hall).is_ok());
    }
}
