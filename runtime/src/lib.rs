//! Runtime implementation for the Box Office booking architecture.
//!
//! This crate provides the [`Store`] that drives a reducer: it feeds actions
//! into the reducer one at a time, executes the effects the reducer returns,
//! and keeps the reducer state consistent with what has actually been
//! persisted.
//!
//! # Commit semantics
//!
//! Every [`Store::send`] is all-or-nothing. The store checkpoints state before
//! reducing; if the persistence effect produced by the action fails, state is
//! restored to the checkpoint and the error is returned. A mutation that could
//! not be saved is never observable.
//!
//! Reducers return at most one [`Effect::Persist`] per action, carrying the
//! whole snapshot, so a failed write never leaves an earlier partial write of
//! the same action on disk.
//!
//! # Example
//!
//! ```ignore
//! use boxoffice_runtime::Store;
//!
//! let mut store = Store::new(BookingState::new(dataset, showtime), BookingReducer::new(), env);
//! store.send(BookingAction::BookSelected)?;
//! let booked = store.state(|s| s.dataset.total_booked());
//! ```

use boxoffice_core::effect::Effect;
use boxoffice_core::reducer::Reducer;
use std::fmt;

/// Error types for the Store runtime
pub mod error {
    use boxoffice_core::snapshot_store::SnapshotStoreError;
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// A persistence effect failed.
        ///
        /// State has already been rolled back to its value before the action.
        #[error("Persistence failed, state rolled back: {0}")]
        PersistenceFailed(#[source] SnapshotStoreError),
    }
}

pub use error::StoreError;

/// The Store - synchronous runtime for a reducer
///
/// Owns the state, the reducer and the environment. Callers mutate state only
/// by sending actions and read it through [`Store::state`].
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: S,
    reducer: R,
    environment: E,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    S: Clone,
    A: fmt::Debug,
{
    /// Create a new store with initial state, reducer, and environment
    #[must_use]
    pub const fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            state: initial_state,
            reducer,
            environment,
        }
    }

    /// Send an action through the reducer and execute its effects
    ///
    /// Effects run in the order the reducer returned them.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PersistenceFailed`] if the persistence effect
    /// failed. State is restored to its value before this call.
    pub fn send(&mut self, action: A) -> Result<(), StoreError> {
        let checkpoint = self.state.clone();

        tracing::debug!(?action, "Reducing action");
        let effects = self
            .reducer
            .reduce(&mut self.state, action, &self.environment);

        if let Err(error) = effects.into_iter().try_for_each(Self::execute) {
            tracing::warn!(%error, "Action not committed, rolling back state");
            self.state = checkpoint;
            return Err(error);
        }

        Ok(())
    }

    /// Read state through a projection function
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        f(&self.state)
    }

    /// Access the injected environment
    #[must_use]
    pub const fn environment(&self) -> &E {
        &self.environment
    }

    /// Consume the store and return its state
    #[must_use]
    pub fn into_state(self) -> S {
        self.state
    }

    fn execute(effect: Effect) -> Result<(), StoreError> {
        match effect {
            Effect::None => Ok(()),
            Effect::Persist(operation) => {
                operation.run().map_err(StoreError::PersistenceFailed)?;
                tracing::trace!("Snapshot persisted");
                Ok(())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use boxoffice_core::snapshot_store::SnapshotStore;
    use boxoffice_core::{save_snapshot, smallvec, SmallVec};
    use boxoffice_testing::mocks::{FailingSnapshotStore, InMemorySnapshotStore};
    use std::sync::Arc;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct TallyState {
        total: i64,
        history: Vec<i64>,
    }

    #[derive(Clone, Debug)]
    enum TallyAction {
        Add(i64),
        Peek,
    }

    struct TallyEnv {
        sink: Arc<dyn SnapshotStore<i64>>,
    }

    struct TallyReducer;

    impl Reducer for TallyReducer {
        type State = TallyState;
        type Action = TallyAction;
        type Environment = TallyEnv;

        fn reduce(
            &self,
            state: &mut TallyState,
            action: TallyAction,
            env: &TallyEnv,
        ) -> SmallVec<[Effect; 4]> {
            match action {
                TallyAction::Add(amount) => {
                    state.total += amount;
                    state.history.push(amount);
                    smallvec![save_snapshot! {
                        store: env.sink,
                        snapshot: state.total
                    }]
                },
                TallyAction::Peek => smallvec![Effect::None],
            }
        }
    }

    fn store_with(sink: Arc<dyn SnapshotStore<i64>>) -> Store<TallyState, TallyAction, TallyEnv, TallyReducer> {
        Store::new(TallyState::default(), TallyReducer, TallyEnv { sink })
    }

    #[test]
    fn send_applies_state_and_persists() {
        let backend = Arc::new(InMemorySnapshotStore::<i64>::new());
        let mut store = store_with(backend.clone());

        store.send(TallyAction::Add(5)).unwrap();
        store.send(TallyAction::Add(3)).unwrap();

        assert_eq!(store.state(|s| s.total), 8);
        assert_eq!(backend.snapshot(), Some(8));
        assert_eq!(backend.save_count(), 2);
    }

    #[test]
    fn failed_persistence_rolls_state_back() {
        let mut store = store_with(Arc::new(FailingSnapshotStore::new("read-only medium")));

        let result = store.send(TallyAction::Add(5));

        assert!(matches!(result, Err(StoreError::PersistenceFailed(_))));
        assert_eq!(store.state(Clone::clone), TallyState::default());
    }

    #[test]
    fn rollback_keeps_memory_equal_to_last_saved_snapshot() {
        let backend = Arc::new(InMemorySnapshotStore::<i64>::new());
        let mut store = store_with(backend.clone());
        store.send(TallyAction::Add(5)).unwrap();

        let mut store = Store::new(
            store.into_state(),
            TallyReducer,
            TallyEnv {
                sink: Arc::new(FailingSnapshotStore::new("disk full")),
            },
        );
        let result = store.send(TallyAction::Add(3));

        assert!(result.is_err());
        assert_eq!(store.state(|s| s.total), 5);
        assert_eq!(backend.snapshot(), Some(5));
    }

    #[test]
    fn actions_without_effects_leave_state_alone() {
        let backend = Arc::new(InMemorySnapshotStore::<i64>::new());
        let mut store = store_with(backend.clone());

        store.send(TallyAction::Peek).unwrap();

        assert_eq!(store.state(Clone::clone), TallyState::default());
        assert_eq!(backend.save_count(), 0);
    }
}
