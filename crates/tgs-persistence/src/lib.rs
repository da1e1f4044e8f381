//! Persisted session state.
//!
//! The [`Snapshot`] is the only state in the application with a lifecycle
//! spanning process restarts: plain serializable identifiers and values,
//! written back in full on every user edit and read once at startup. Rich
//! behavior (the language catalog) lives in the process-wide registry and
//! is never serialized; the application layer reconciles the two.

pub mod error;
pub mod snapshot;
pub mod store;

pub use error::StoreError;
pub use snapshot::{InputKind, Snapshot};
pub use store::SnapshotStore;
