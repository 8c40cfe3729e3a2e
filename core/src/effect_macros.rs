//! Declarative macros for ergonomic effect construction

/// Create an `Effect::Persist` that writes a snapshot through a store
///
/// `store` is an `Arc` to anything with a
/// `save(&T) -> Result<(), SnapshotStoreError>` method; it is cloned into
/// the effect. `snapshot` is evaluated once, when the effect is built.
///
/// # Example
///
/// ```rust,ignore
/// use boxoffice_core::save_snapshot;
///
/// save_snapshot! {
///     store: env.store,
///     snapshot: state.dataset.clone()
/// }
/// ```
#[macro_export]
macro_rules! save_snapshot {
    (
        store: $store:expr,
        snapshot: $snapshot:expr
    ) => {{
        let store = ::std::sync::Arc::clone(&$store);
        let snapshot = $snapshot;
        $crate::effect::Effect::Persist($crate::effect::PersistOperation::new(move || {
            store.save(&snapshot)
        }))
    }};
}
