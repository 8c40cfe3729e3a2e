//! # Box Office Testing
//!
//! Testing utilities and helpers for the Box Office booking architecture.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given/When/Then harness for reducers
//! - [`assertions`]: effect assertions
//! - [`mocks`]: in-memory and always-failing snapshot stores
//!
//! ## Example
//!
//! ```ignore
//! use boxoffice_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(BookingReducer::new())
//!     .with_env(test_environment())
//!     .given_state(fresh_state())
//!     .when_action(BookingAction::BookSelected)
//!     .then_state(|state| assert_eq!(state.dataset.total_booked(), 0))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```


/// Snapshot store mocks
pub mod mocks;

pub use mocks::{FailingSnapshotStore, InMemorySnapshotStore};
pub use reducer_test::{assertions, ReducerTest};
