//! MoodChat core: a mood-aware conversational responder.
//!
//! `brain::DialogueEngine::respond` is the single core operation. The
//! `actors` module wraps it for hosts: per-turn tasks, fallback replies and a
//! message log.

pub mod actors;
pub mod brain;
pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod telemetry;

pub use brain::{DialogueEngine, Mood};
pub use config::EngineConfig;
pub use error::AppError;
pub use models::{ChatRecord, MoodSummary, Reply};

#[cfg(test)]
mod tests;
