//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```ignore
//! use quadrant::prelude::*;
//! ```
//!
//! This will import:
//! - Model types (Route, Section, Language)
//! - State types (ApplicationState, AppPhase, StateManager, StatePatch)
//! - The router and its path helpers
//! - Host traits and the in-memory adapters

// Model types
pub use crate::models::{Language, Route, Section};

// State types
pub use crate::state::{AppPhase, ApplicationState, StateManager, StatePatch, Subscription};

// Routing
pub use crate::config::RouterConfig;
pub use crate::router::{build_path, classify_transition, parse_route, Router, TransitionKind};

// Hosts
pub use crate::adapters::{MemoryDocument, MemoryHistory};
pub use crate::traits::{DocumentHost, NavigationProvider};

// Errors
pub use crate::error::{NavigationError, QuadrantError, QuadrantResult};
