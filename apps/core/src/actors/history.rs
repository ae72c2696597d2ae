use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use validator::Validate;

use crate::actors::messages::AppError;
use crate::actors::traits::MessageLog;
use crate::models::ChatRecord;

/// Process-local message log, keyed by user.
#[derive(Default)]
pub struct InMemoryMessageLog {
    records: RwLock<HashMap<String, Vec<ChatRecord>>>,
}

impl InMemoryMessageLog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageLog for InMemoryMessageLog {
    async fn append(&self, record: ChatRecord) -> Result<(), AppError> {
        record
            .validate()
            .map_err(|e| AppError::Validation(format!("Invalid chat record: {}", e)))?;
        let mut records = self.records.write().await;
        records.entry(record.user_id.clone()).or_default().push(record);
        Ok(())
    }

    async fn recent(&self, user_id: &str, limit: usize) -> Result<Vec<ChatRecord>, AppError> {
        let records = self.records.read().await;
        let history = records.get(user_id).map(Vec::as_slice).unwrap_or_default();
        let start = history.len().saturating_sub(limit);
        Ok(history[start..].to_vec())
    }

    async fn clear(&self, user_id: &str) -> Result<usize, AppError> {
        let removed = self
            .records
            .write()
            .await
            .remove(user_id)
            .map(|r| r.len())
            .unwrap_or(0);
        debug!("Cleared {} records for {}", removed, user_id);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::Mood;

    #[tokio::test]
    async fn test_recent_returns_tail_in_order() {
        let log = InMemoryMessageLog::new();
        for i in 0..5 {
            log.append(ChatRecord::user("alice", &format!("message {}", i), None))
                .await
                .unwrap();
        }

        let recent = log.recent("alice", 2).await.unwrap();
        let texts: Vec<&str> = recent.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["message 3", "message 4"]);

        assert!(log.recent("bob", 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_is_per_user() {
        let log = InMemoryMessageLog::new();
        log.append(ChatRecord::user("alice", "hi", None)).await.unwrap();
        log.append(ChatRecord::user("alice", "I feel sad", Some(Mood::Sad))).await.unwrap();
        log.append(ChatRecord::user("bob", "hello", None)).await.unwrap();

        assert_eq!(log.clear("alice").await.unwrap(), 2);
        assert_eq!(log.clear("alice").await.unwrap(), 0);
        assert_eq!(log.recent("bob", 10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_mood_summary_reads_whole_log() {
        let log = InMemoryMessageLog::new();
        for _ in 0..60 {
            log.append(ChatRecord::user("alice", "I feel sad", Some(Mood::Sad))).await.unwrap();
        }
        log.append(ChatRecord::user("alice", "I'm tired", Some(Mood::Tired))).await.unwrap();

        let summary = log.mood_summary("alice", None).await.unwrap();
        assert_eq!(summary.total, 61);
        assert_eq!(summary.by_mood[&Mood::Sad], 60);
        assert_eq!(summary.dominant(), Some(Mood::Sad));

        assert_eq!(log.mood_summary("bob", None).await.unwrap().total, 0);
    }

    #[tokio::test]
    async fn test_invalid_record_is_rejected() {
        let log = InMemoryMessageLog::new();
        let result = log.append(ChatRecord::user("", "orphan", None)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
