use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;
use validator::Validate;

use crate::brain::{Mood, Topic};

/// One logged conversation turn, user or bot.
#[derive(Debug, Serialize, Deserialize, Clone, Validate, PartialEq)]
pub struct ChatRecord {
    /// Unique identifier of the record.
    pub id: Uuid,
    /// The user the conversation belongs to.
    #[validate(length(min = 1))]
    pub user_id: String,
    /// The message text.
    #[validate(length(min = 1))]
    pub text: String,
    /// Whether the user wrote it (as opposed to the bot).
    pub is_user: bool,
    /// Mood resolved for the turn, if any.
    #[serde(default)]
    pub mood: Option<Mood>,
    /// Category of the reply; unset on user records.
    #[serde(default)]
    pub topic: Option<Topic>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl ChatRecord {
    pub fn user(user_id: &str, text: &str, mood: Option<Mood>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            text: text.to_string(),
            is_user: true,
            mood,
            topic: None,
            created_at: Utc::now(),
        }
    }

    pub fn bot(user_id: &str, reply: &Reply) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            text: reply.text.clone(),
            is_user: false,
            mood: reply.mood,
            topic: reply.topic,
            created_at: Utc::now(),
        }
    }
}

/// What the engine answers for one turn.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    /// Mood resolved for the turn
    pub mood: Option<Mood>,
    /// Handler category; unset for substituted replies
    pub topic: Option<Topic>,
}

impl Reply {
    /// Fixed safe reply used in place of a failed turn.
    pub fn fallback(text: &str) -> Self {
        Self {
            text: text.to_string(),
            mood: Some(Mood::Neutral),
            topic: None,
        }
    }
}

/// Mood counts over a user's logged turns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodSummary {
    /// User turns that resolved a mood
    pub total: usize,
    pub by_mood: BTreeMap<Mood, usize>,
    /// Counts per UTC calendar day
    pub by_day: BTreeMap<NaiveDate, BTreeMap<Mood, usize>>,
}

impl MoodSummary {
    /// Counts the moods of user records created at or after `since`.
    /// Bot records and turns without a mood are skipped.
    pub fn from_records<'a, I>(records: I, since: Option<DateTime<Utc>>) -> Self
    where
        I: IntoIterator<Item = &'a ChatRecord>,
    {
        let mut summary = Self::default();
        for record in records {
            if !record.is_user || since.is_some_and(|start| record.created_at < start) {
                continue;
            }
            let Some(mood) = record.mood else {
                continue;
            };
            summary.total += 1;
            *summary.by_mood.entry(mood).or_default() += 1;
            *summary
                .by_day
                .entry(record.created_at.date_naive())
                .or_default()
                .entry(mood)
                .or_default() += 1;
        }
        summary
    }

    /// Most frequent mood. Ties go to the tag listed first in `Mood::ALL`.
    pub fn dominant(&self) -> Option<Mood> {
        let mut best: Option<(Mood, usize)> = None;
        for mood in Mood::ALL {
            let count = self.by_mood.get(&mood).copied().unwrap_or(0);
            if count > 0 && best.map_or(true, |(_, top)| count > top) {
                best = Some((mood, count));
            }
        }
        best.map(|(mood, _)| mood)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serialization() {
        let reply = Reply {
            text: "Here's a calming poem".to_string(),
            mood: Some(Mood::Tired),
            topic: Some(Topic::Poem),
        };
        let record = ChatRecord::bot("alice", &reply);
        assert!(record.validate().is_ok());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["mood"], "tired");
        assert_eq!(json["topic"], "poem");
        assert_eq!(json["is_user"], false);
    }

    fn user_record(mood: Option<Mood>, days_ago: i64) -> ChatRecord {
        let mut record = ChatRecord::user("alice", "entry", mood);
        record.created_at = Utc::now() - chrono::Duration::days(days_ago);
        record
    }

    #[test]
    fn test_mood_summary_counts_user_turns() {
        let bot = ChatRecord::bot(
            "alice",
            &Reply { text: "There there".to_string(), mood: Some(Mood::Sad), topic: Some(Topic::MoodSupport) },
        );
        let records = vec![
            user_record(Some(Mood::Sad), 0),
            user_record(Some(Mood::Sad), 0),
            user_record(Some(Mood::Angry), 0),
            user_record(None, 0),
            bot,
            user_record(Some(Mood::Happy), 10),
        ];

        let summary = MoodSummary::from_records(&records, None);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.by_mood[&Mood::Sad], 2);
        assert_eq!(summary.by_mood[&Mood::Happy], 1);
        assert_eq!(summary.by_day.len(), 2);
        assert_eq!(summary.dominant(), Some(Mood::Sad));

        let recent = MoodSummary::from_records(&records, Some(Utc::now() - chrono::Duration::days(3)));
        assert_eq!(recent.total, 3);
        assert!(!recent.by_mood.contains_key(&Mood::Happy));
    }

    #[test]
    fn test_mood_summary_ties_and_empty() {
        let records = vec![user_record(Some(Mood::Sad), 0), user_record(Some(Mood::Happy), 0)];
        assert_eq!(MoodSummary::from_records(&records, None).dominant(), Some(Mood::Happy));
        assert_eq!(MoodSummary::default().dominant(), None);

        let json = serde_json::to_value(MoodSummary::from_records(&records, None)).unwrap();
        assert_eq!(json["by_mood"]["sad"], 1);
    }

    #[test]
    fn test_fallback_is_neutral() {
        let reply = Reply::fallback("Sorry");
        assert_eq!(reply.mood, Some(Mood::Neutral));
        assert!(reply.topic.is_none());
    }
}
