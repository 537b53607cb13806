//! In-memory host implementations.
//!
//! These enable running the router without a browser.
//!
//! # Available Hosts
//!
//! - [`MemoryHistory`] - History stack with back/forward and failure injection
//! - [`MemoryDocument`] - Document with a recorded `lang` attribute

pub mod document;
pub mod history;

pub use document::MemoryDocument;
pub use history::{HistoryEntry, MemoryHistory};
