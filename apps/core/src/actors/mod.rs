//! # Actors
//!
//! Host-side plumbing around the dialogue engine.
//!
//! ## Components
//! - `responder`: mpsc handle and runner, one task per turn, safe fallback replies
//! - `messages`: actor message types
//! - `traits`: `MessageLog` collaborator interface
//! - `history`: in-memory `MessageLog`

pub mod history;
pub mod messages;
pub mod responder;
pub mod traits;

pub use history::InMemoryMessageLog;
pub use responder::{ResponderHandle, DEFAULT_HISTORY_LIMIT};
pub use traits::MessageLog;
