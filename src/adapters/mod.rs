//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`web::WebHistory`] / [`web::WebDocument`] - the real browser host via
//!   `web-sys` (only with the `web` feature)
//!
//! # In-memory Implementations
//!
//! The [`mock`] submodule provides hosts that keep everything in memory.
//! Tests use them, and so does the `quadrant` route inspector:
//! - [`mock::MemoryHistory`] - history stack with back/forward
//! - [`mock::MemoryDocument`] - recorded `lang` attribute and a fixed browser language

pub mod mock;
#[cfg(feature = "web")]
pub mod web;

pub use mock::{HistoryEntry, MemoryDocument, MemoryHistory};
#[cfg(feature = "web")]
pub use web::{WebDocument, WebHistory};
