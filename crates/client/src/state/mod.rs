//! View-state controller: the single source of truth for what is on screen.
//!
//! The state is a plain value, transitions are a pure reducer, and the UI
//! layer holds the current value in one Dioxus signal whose write is the
//! single subscription point driving re-render. Nothing else mutates view
//! state.

mod actions;
mod app_state;
mod reducer;

pub use actions::Action;
pub use app_state::{AppState, SubView, ViewKind};
pub use reducer::reduce;
