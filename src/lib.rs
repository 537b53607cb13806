//! Quadrant - URL routing and application state for a bilingual four-section site
//!
//! The [`router::Router`] maps browser URLs (`/`, `/en/about`,
//! `/portfolio/<slug>`) to an [`state::ApplicationState`] held by a
//! [`state::StateManager`], and classifies every transition so views know
//! whether to animate. Browser access goes through the traits in [`traits`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod debug;
pub mod error;
pub mod keyboard;
pub mod models;
pub mod portfolio;
pub mod prelude;
pub mod router;
pub mod state;
pub mod traits;
