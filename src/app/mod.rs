//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the catalog, UI and worker
//! layers. Data flows one way:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └───── Fetch / Worker Responses ───┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input mode, load status and column focus
//! - [`state`]: Application state and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Column, InputMode, LoadStatus};
pub use state::AppState;
