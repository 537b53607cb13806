//! Application state management
//!
//! This module contains the route-derived state shared by every view:
//! - ApplicationState: current section, language, slug and animation phase
//! - StatePatch: partial updates merged into the current state
//! - StateManager: the observable store that owns the state and fans out changes

pub mod app_state;
pub mod store;

pub use app_state::{AppPhase, ApplicationState, StatePatch};
pub use store::{StateManager, Subscription};
