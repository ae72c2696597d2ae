use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::actors::messages::AppError;
use crate::models::{ChatRecord, MoodSummary};

/// Durable log of conversation turns.
///
/// The dialogue engine never reads it; the host appends both sides of every
/// turn after the reply is computed and uses it for history display.
#[async_trait]
pub trait MessageLog: Send + Sync + 'static {
    /// Appends one record.
    async fn append(&self, record: ChatRecord) -> Result<(), AppError>;

    /// The last `limit` records of a user, oldest first.
    async fn recent(&self, user_id: &str, limit: usize) -> Result<Vec<ChatRecord>, AppError>;

    /// Deletes every record of a user and returns how many were removed.
    async fn clear(&self, user_id: &str) -> Result<usize, AppError>;

    /// Mood counts over the user's logged turns, optionally only those since `since`.
    async fn mood_summary(&self, user_id: &str, since: Option<DateTime<Utc>>) -> Result<MoodSummary, AppError> {
        let records = self.recent(user_id, usize::MAX).await?;
        Ok(MoodSummary::from_records(&records, since))
    }
}
