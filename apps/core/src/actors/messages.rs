use chrono::{DateTime, Utc};
use tokio::sync::oneshot;

use crate::brain::Mood;
use crate::models::{ChatRecord, MoodSummary, Reply};

// Re-export AppError for convenience
pub use crate::error::AppError;

/// Messages that can be sent to the responder actor.
#[derive(Debug)]
pub enum ResponderMessage {
    /// Answer one user message.
    Respond {
        user_id: String,
        text: String,
        /// Mood supplied by the host (e.g. a mood picker), used when the text carries none.
        explicit_mood: Option<Mood>,
        /// A channel to send the reply back. Failures are already substituted.
        responder: oneshot::Sender<Reply>,
    },
    /// Delete a user's logged messages and reset their session.
    ClearHistory {
        user_id: String,
        /// A channel to send the number of deleted records back.
        responder: oneshot::Sender<Result<usize, AppError>>,
    },
    /// Fetch the most recent logged messages of a user, oldest first.
    History {
        user_id: String,
        limit: usize,
        responder: oneshot::Sender<Result<Vec<ChatRecord>, AppError>>,
    },
    /// Count the moods of a user's logged turns.
    Moods {
        user_id: String,
        /// Only turns logged at or after this instant
        since: Option<DateTime<Utc>>,
        responder: oneshot::Sender<Result<MoodSummary, AppError>>,
    },
    /// Stop the actor loop.
    Shutdown,
}
