//! # Box Office Core
//!
//! Core traits and types for the Box Office booking architecture.
//!
//! The booking domain is written as a reducer over plain state. User intent
//! arrives as an action, the reducer validates it and mutates state, and any
//! I/O the action requires is returned as an [`Effect`](effect::Effect)
//! description instead of being performed inline.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature (owned, `Clone`)
//! - **Action**: The commands a reducer accepts
//! - **Reducer**: `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies, such as the snapshot store
//!
//! ## Example
//!
//! ```ignore
//! use boxoffice_core::{effect::Effect, reducer::Reducer, SmallVec};
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = CounterEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         env: &CounterEnvironment,
//!     ) -> SmallVec<[Effect; 4]> {
//!         state.count += 1;
//!         smallvec::smallvec![save_snapshot! {
//!             store: env.store,
//!             snapshot: state.count
//!         }]
//!     }
//! }
//! ```

pub use smallvec::{smallvec, SmallVec};

/// Declarative macros for building effects
mod effect_macros;

/// Snapshot persistence abstraction
pub mod snapshot_store;

/// Reducer module - The core trait for business logic
///
/// Reducers are deterministic: `(State, Action, Environment) → (State, Effects)`.
/// They never perform I/O themselves.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed by the runtime
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects are values returned from reducers. The runtime `Store` executes
/// them after the reducer has updated state, and rolls the state back if a
/// persistence effect fails. The only I/O a reducer may request is a
/// snapshot write, so a single failed write is the only way an action can
/// fail to commit.
pub mod effect {
    use crate::snapshot_store::SnapshotStoreError;
    use std::fmt;

    /// Deferred write of a state snapshot.
    ///
    /// Built with the [`save_snapshot!`](crate::save_snapshot) macro. The
    /// snapshot is captured by value when the effect is created, so the write
    /// sees exactly the state the reducer produced.
    pub struct PersistOperation {
        write: Box<dyn FnOnce() -> Result<(), SnapshotStoreError>>,
    }

    impl PersistOperation {
        /// Wrap a write closure as a persistence operation
        #[must_use]
        pub fn new<F>(write: F) -> Self
        where
            F: FnOnce() -> Result<(), SnapshotStoreError> + 'static,
        {
            Self {
                write: Box::new(write),
            }
        }

        /// Perform the write
        ///
        /// # Errors
        ///
        /// Returns whatever error the underlying snapshot store reported.
        pub fn run(self) -> Result<(), SnapshotStoreError> {
            (self.write)()
        }
    }

    impl fmt::Debug for PersistOperation {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "PersistOperation(<write>)")
        }
    }

    /// Effect type - describes a side effect to be executed
    pub enum Effect {
        /// No-op effect
        None,

        /// Persist a state snapshot
        Persist(PersistOperation),
    }

    impl fmt::Debug for Effect {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Persist(operation) => {
                    f.debug_tuple("Effect::Persist").field(operation).finish()
                },
            }
        }
    }

    impl Effect {
        /// Whether this effect persists state
        #[must_use]
        pub const fn persists(&self) -> bool {
            matches!(self, Effect::Persist(_))
        }
    }
}
