//! Application state.
//!
//! `AppState` is the root of all state; `ComputedState` is the derived
//! view reconciling the persisted snapshot with the live catalog.

mod app_state;
mod computed;

pub use app_state::AppState;
pub use computed::ComputedState;
