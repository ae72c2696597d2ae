//! Responder Tests
//!
//! The actor host: logging of both sides of a turn, history, clearing, mood
//! summaries, and substitution of the fallback reply for failing or panicking
//! turns.

use std::sync::Arc;

use super::{deterministic_engine, engine_with_content};
use crate::actors::{InMemoryMessageLog, MessageLog, ResponderHandle};
use crate::brain::{DialogueEngine, Mood, SequenceRandom, Topic};
use crate::config::EngineConfig;
use crate::content::{Category, ContentSource, ResolvedPool};

// --- Mock Content Sources ---

/// Knows no pool at all, so every content lookup fails.
struct EmptyContent;

impl ContentSource for EmptyContent {
    fn pool(&self, _category: Category, _key: &str) -> Option<ResolvedPool<'_>> {
        None
    }
}

/// Panics on any lookup.
struct PanickingContent;

impl ContentSource for PanickingContent {
    fn pool(&self, _category: Category, _key: &str) -> Option<ResolvedPool<'_>> {
        panic!("content store exploded")
    }
}

// --- Test Setup ---

fn setup(engine: DialogueEngine) -> (ResponderHandle, Arc<DialogueEngine>, Arc<InMemoryMessageLog>) {
    let engine = Arc::new(engine);
    let log = Arc::new(InMemoryMessageLog::new());
    let handle = ResponderHandle::with_parts(engine.clone(), log.clone(), &EngineConfig::default());
    (handle, engine, log)
}

#[cfg(test)]
mod turn_tests {
    use super::*;

    #[tokio::test]
    async fn test_turn_is_logged_on_both_sides() {
        let (handle, _engine, log) = setup(deterministic_engine());

        let reply = handle.respond("alice".to_string(), "I feel sad".to_string(), None).await;
        assert_eq!(reply.mood, Some(Mood::Sad));
        assert_eq!(reply.topic, Some(Topic::MoodSupport));

        let records = log.recent("alice", 10).await.unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].is_user);
        assert_eq!(records[0].text, "I feel sad");
        assert_eq!(records[0].mood, Some(Mood::Sad));
        assert!(!records[1].is_user);
        assert_eq!(records[1].text, reply.text);
        assert_eq!(records[1].topic, Some(Topic::MoodSupport));
    }

    #[tokio::test]
    async fn test_empty_input_gets_friendly_reply() {
        let (handle, engine, log) = setup(deterministic_engine());

        let reply = handle.respond("alice".to_string(), "  \n".to_string(), None).await;
        assert!(reply.text.contains("empty"));
        assert!(log.recent("alice", 10).await.unwrap().is_empty());
        assert_eq!(engine.session("alice").interaction_count, 0);
    }

    #[tokio::test]
    async fn test_explicit_mood_reaches_engine() {
        let (handle, _engine, _log) = setup(deterministic_engine());
        let reply = handle
            .respond("alice".to_string(), "suggest an activity".to_string(), Some(Mood::Angry))
            .await;
        assert_eq!(reply.topic, Some(Topic::ExerciseTip));
        assert_eq!(reply.mood, Some(Mood::Angry));
    }

    #[tokio::test]
    async fn test_concurrent_users() {
        let (handle, engine, log) = setup(deterministic_engine());

        let mut tasks = Vec::new();
        for i in 0..10 {
            let handle = handle.clone();
            tasks.push(tokio::spawn(async move {
                handle.respond(format!("user-{}", i), "hello".to_string(), None).await
            }));
        }
        for task in tasks {
            let reply = task.await.unwrap();
            assert_eq!(reply.topic, Some(Topic::Greeting));
        }

        for i in 0..10 {
            let user = format!("user-{}", i);
            assert_eq!(engine.session(&user).interaction_count, 1);
            assert_eq!(log.recent(&user, 10).await.unwrap().len(), 2);
        }
    }
}

#[cfg(test)]
mod fallback_tests {
    use super::*;

    #[tokio::test]
    async fn test_content_failure_yields_fallback() {
        let engine = engine_with_content(Arc::new(EmptyContent), Arc::new(SequenceRandom::first()));
        let (handle, _engine, log) = setup(engine);

        let reply = handle.respond("alice".to_string(), "give me a quote".to_string(), None).await;
        assert_eq!(reply.text, EngineConfig::default().fallback_reply);
        assert_eq!(reply.mood, Some(Mood::Neutral));
        assert_eq!(reply.topic, None);

        // The failed turn is still logged, and canned replies keep working
        assert_eq!(log.recent("alice", 10).await.unwrap().len(), 2);
        let reply = handle.respond("alice".to_string(), "hello".to_string(), None).await;
        assert_eq!(reply.topic, Some(Topic::Greeting));
    }

    #[tokio::test]
    async fn test_panic_yields_fallback() {
        let engine = engine_with_content(Arc::new(PanickingContent), Arc::new(SequenceRandom::first()));
        let (handle, engine, _log) = setup(engine);

        let reply = handle.respond("alice".to_string(), "read me a poem".to_string(), None).await;
        assert_eq!(reply.text, EngineConfig::default().fallback_reply);
        assert_eq!(reply.mood, Some(Mood::Neutral));

        // The poisoned session is recovered on the next turn
        let reply = handle.respond("alice".to_string(), "thanks".to_string(), None).await;
        assert_eq!(reply.topic, Some(Topic::Farewell));
        assert_eq!(engine.session("alice").interaction_count, 1);
    }

    #[tokio::test]
    async fn test_stopped_actor_yields_fallback() {
        let (handle, _engine, _log) = setup(deterministic_engine());
        handle.shutdown().await.unwrap();
        tokio::task::yield_now().await;

        let reply = handle.respond("alice".to_string(), "hello".to_string(), None).await;
        assert_eq!(reply.text, EngineConfig::default().fallback_reply);
        assert!(handle.history("alice".to_string(), None).await.is_err());
    }
}

#[cfg(test)]
mod history_tests {
    use super::*;

    #[tokio::test]
    async fn test_history_defaults_to_fifty() {
        let (handle, _engine, _log) = setup(deterministic_engine());
        for i in 0..30 {
            handle.respond("alice".to_string(), format!("message {}", i), None).await;
        }

        let history = handle.history("alice".to_string(), None).await.unwrap();
        assert_eq!(history.len(), 50);
        assert_eq!(history.last().map(|r| r.is_user), Some(false));

        let history = handle.history("alice".to_string(), Some(4)).await.unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history[2].text, "message 29");
    }

    #[tokio::test]
    async fn test_clear_history_resets_session() {
        let (handle, engine, _log) = setup(deterministic_engine());
        handle.respond("alice".to_string(), "hello".to_string(), None).await;
        handle.respond("alice".to_string(), "I feel tired".to_string(), None).await;
        handle.respond("bob".to_string(), "hello".to_string(), None).await;

        let removed = handle.clear_history("alice".to_string()).await.unwrap();
        assert_eq!(removed, 4);
        assert!(handle.history("alice".to_string(), None).await.unwrap().is_empty());
        assert_eq!(engine.session("alice").interaction_count, 0);
        assert_eq!(engine.session("alice").current_mood, None);
        assert_eq!(engine.session("bob").interaction_count, 1);

        let reply = handle.respond("alice".to_string(), "hi".to_string(), None).await;
        assert_eq!(reply.topic, Some(Topic::Greeting));
    }
}

#[cfg(test)]
mod mood_summary_tests {
    use super::*;

    #[tokio::test]
    async fn test_summary_counts_resolved_moods() {
        let (handle, _engine, _log) = setup(deterministic_engine());
        for text in ["I feel sad", "I'm so angry", "I feel sad again"] {
            handle.respond("alice".to_string(), text.to_string(), None).await;
        }
        handle.respond("bob".to_string(), "I feel happy".to_string(), None).await;

        let summary = handle.mood_summary("alice".to_string(), None).await.unwrap();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.by_mood[&Mood::Sad], 2);
        assert_eq!(summary.by_mood[&Mood::Angry], 1);
        assert_eq!(summary.dominant(), Some(Mood::Sad));
        assert_eq!(summary.by_day.values().flat_map(|day| day.values()).sum::<usize>(), 3);

        let windowed = handle.mood_summary("alice".to_string(), Some(7)).await.unwrap();
        assert_eq!(windowed, summary);
    }

    #[tokio::test]
    async fn test_summary_empty_after_clear() {
        let (handle, _engine, _log) = setup(deterministic_engine());
        handle.respond("alice".to_string(), "I feel lonely".to_string(), None).await;
        handle.clear_history("alice".to_string()).await.unwrap();

        let summary = handle.mood_summary("alice".to_string(), None).await.unwrap();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.dominant(), None);
    }
}
