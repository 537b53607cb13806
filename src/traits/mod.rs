//! Trait abstractions for the browser host.
//!
//! The router never touches `window.history`, `location` or `document`
//! directly. It talks to these traits so it can run against an in-memory
//! host in tests and the CLI, and against `web-sys` in the browser.
//!
//! # Traits
//!
//! - [`NavigationProvider`] - history stack and location
//! - [`DocumentHost`] - document language attribute and browser language

pub mod document;
pub mod navigation;

pub use document::DocumentHost;
pub use navigation::{NavigationProvider, PopStateListener};
