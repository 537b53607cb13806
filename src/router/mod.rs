//! Client-side routing.
//!
//! The router is the single mapping between the URL and the route-derived
//! part of [`ApplicationState`](crate::state::ApplicationState):
//! - path: `parse_route` / `build_path`, the URL contract
//! - transition: the idle/expanding/expanded state machine
//! - navigation: `Router`, which drives history and writes the state store
//!
//! URL contract:
//!
//! | Path | Route |
//! |------|-------|
//! | `/`, `/en/` | home |
//! | `/{en/}about`, `services`, `portfolio`, `clients` | section |
//! | `/{en/}portfolio/{slug}` | portfolio item |
//!
//! Anything else resolves to home in the language given by the prefix.

mod navigation;
mod path;
mod transition;

pub use navigation::Router;
pub use path::{build_path, parse_route};
pub use transition::{classify, classify_transition, TransitionKind};
