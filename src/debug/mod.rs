//! State change recording for debugging.
//!
//! A [`TransitionRecorder`] is just another store subscriber: it timestamps
//! every state the router publishes, together with the state it replaced,
//! so a navigation session can be inspected or dumped as JSON.

mod events;

pub use events::*;
