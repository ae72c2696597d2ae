//! Per-user conversational memory.
//!
//! One `SessionState` per user, created lazily on the first message and
//! mutated only by that user's own turns. The store hands out a
//! `SessionHandle` so a whole turn (read, route, select, update) runs under
//! one lock: same-user turns serialize, different users never contend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::info;

use super::mood::Mood;
use crate::config::EngineConfig;

/// Category of the handler that produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Farewell,
    SmallTalk,
    Greeting,
    Quote,
    Poem,
    ExerciseTip,
    Music,
    ActionPlan,
    CheerUp,
    MoodSupport,
    Empathy,
}

impl Topic {
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Farewell => "farewell",
            Topic::SmallTalk => "small_talk",
            Topic::Greeting => "greeting",
            Topic::Quote => "quote",
            Topic::Poem => "poem",
            Topic::ExerciseTip => "exercise_tip",
            Topic::Music => "music",
            Topic::ActionPlan => "action_plan",
            Topic::CheerUp => "cheer_up",
            Topic::MoodSupport => "mood_support",
            Topic::Empathy => "empathy",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Bounded FIFO of recently served identity keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecencyBuffer {
    keys: VecDeque<String>,
    capacity: usize,
}

impl RecencyBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            keys: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Record a key, evicting the oldest entries beyond capacity.
    pub fn push(&mut self, key: impl Into<String>) {
        self.keys.push_back(key.into());
        while self.keys.len() > self.capacity {
            self.keys.pop_front();
        }
    }

    /// Drop every key matching the predicate, keeping the order of the rest.
    pub fn forget_where<F>(&mut self, predicate: F)
    where
        F: Fn(&str) -> bool,
    {
        self.keys.retain(|k| !predicate(k.as_str()));
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

/// One recency buffer per content category. Songs share a single buffer
/// partitioned by mood through their identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecencyBuffers {
    pub quotes: RecencyBuffer,
    pub poems: RecencyBuffer,
    pub exercise_tips: RecencyBuffer,
    pub songs: RecencyBuffer,
}

impl RecencyBuffers {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            quotes: RecencyBuffer::new(config.quote_history),
            poems: RecencyBuffer::new(config.poem_history),
            exercise_tips: RecencyBuffer::new(config.exercise_history),
            songs: RecencyBuffer::new(config.song_history),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
            && self.poems.is_empty()
            && self.exercise_tips.is_empty()
            && self.songs.is_empty()
    }
}

/// Conversational memory of one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Last known affective context
    pub current_mood: Option<Mood>,
    /// True only during a turn that explicitly asks to be cheered up
    pub cheer_up_active: bool,
    /// Category of the last handler, used to resolve "tell me more"
    pub last_topic: Option<Topic>,
    /// Completed turns; 0 marks a fresh conversation
    pub interaction_count: u32,
    pub last_interaction: Option<DateTime<Utc>>,
    /// Resolved moods of recent turns, oldest first
    pub recent_moods: VecDeque<Mood>,
    pub recent: RecencyBuffers,
    mood_history: usize,
}

impl SessionState {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            current_mood: None,
            cheer_up_active: false,
            last_topic: None,
            interaction_count: 0,
            last_interaction: None,
            recent_moods: VecDeque::new(),
            recent: RecencyBuffers::new(config),
            mood_history: config.mood_history.max(1),
        }
    }

    /// Restore initial values, keeping the configured capacities.
    pub fn reset(&mut self) {
        self.current_mood = None;
        self.cheer_up_active = false;
        self.last_topic = None;
        self.interaction_count = 0;
        self.last_interaction = None;
        self.recent_moods.clear();
        self.recent.quotes.clear();
        self.recent.poems.clear();
        self.recent.exercise_tips.clear();
        self.recent.songs.clear();
    }

    pub fn is_fresh(&self) -> bool {
        self.interaction_count == 0
    }

    fn record_mood(&mut self, mood: Mood) {
        self.current_mood = Some(mood);
        self.recent_moods.push_back(mood);
        while self.recent_moods.len() > self.mood_history {
            self.recent_moods.pop_front();
        }
    }
}

/// Partial update applied at the end of a turn
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionPatch {
    /// Resolved mood of the turn; `None` leaves the stored mood untouched
    pub mood: Option<Mood>,
    pub topic: Option<Topic>,
    pub cheer_up_active: Option<bool>,
    /// Number of completed turns to add
    pub completed_turns: u32,
    pub at: Option<DateTime<Utc>>,
}

impl SessionPatch {
    /// Patch recording one completed turn
    pub fn turn(mood: Option<Mood>, topic: Topic) -> Self {
        Self {
            mood,
            topic: Some(topic),
            cheer_up_active: None,
            completed_turns: 1,
            at: Some(Utc::now()),
        }
    }

    pub fn apply(self, state: &mut SessionState) {
        if let Some(mood) = self.mood {
            state.record_mood(mood);
        }
        if let Some(topic) = self.topic {
            state.last_topic = Some(topic);
        }
        if let Some(active) = self.cheer_up_active {
            state.cheer_up_active = active;
        }
        state.interaction_count = state.interaction_count.saturating_add(self.completed_turns);
        if self.at.is_some() {
            state.last_interaction = self.at;
        }
    }
}

/// Shared, lockable session of one user
pub type SessionHandle = Arc<Mutex<SessionState>>;

/// Lock a session, recovering the state if a previous turn panicked.
pub fn lock_session(handle: &SessionHandle) -> MutexGuard<'_, SessionState> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Session-record store keyed by user id.
pub trait SessionStore: Send + Sync {
    /// Exclusive access to the user's session, created with defaults if absent.
    fn handle(&self, user_id: &str) -> SessionHandle;

    /// Snapshot of the user's session
    fn get(&self, user_id: &str) -> SessionState {
        lock_session(&self.handle(user_id)).clone()
    }

    /// Apply a partial change atomically
    fn update(&self, user_id: &str, patch: SessionPatch) {
        let handle = self.handle(user_id);
        let mut state = lock_session(&handle);
        patch.apply(&mut state);
    }

    /// Restore the user's session to its initial values
    fn reset(&self, user_id: &str) {
        let handle = self.handle(user_id);
        lock_session(&handle).reset();
        info!("Session reset for user {}", user_id);
    }
}

/// Process-local session store
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, SessionHandle>>,
    config: EngineConfig,
}

impl InMemorySessionStore {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl SessionStore for InMemorySessionStore {
    fn handle(&self, user_id: &str) -> SessionHandle {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        sessions
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(SessionState::new(&self.config))))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recency_buffer_evicts_oldest() {
        let mut buffer = RecencyBuffer::new(3);
        for key in ["a", "b", "c", "d"] {
            buffer.push(key);
        }
        assert_eq!(buffer.len(), 3);
        assert!(!buffer.contains("a"));
        assert_eq!(buffer.iter().collect::<Vec<_>>(), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_recency_buffer_forget_where() {
        let mut buffer = RecencyBuffer::new(8);
        for key in ["sad_1", "happy_1", "sad_2", "happy_2"] {
            buffer.push(key);
        }
        buffer.forget_where(|k| k.starts_with("happy_"));
        assert_eq!(buffer.iter().collect::<Vec<_>>(), vec!["sad_1", "sad_2"]);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut buffer = RecencyBuffer::new(0);
        buffer.push("x");
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_default_capacities() {
        let state = SessionState::new(&EngineConfig::default());
        assert_eq!(state.recent.quotes.capacity(), 5);
        assert_eq!(state.recent.poems.capacity(), 5);
        assert_eq!(state.recent.exercise_tips.capacity(), 5);
        assert_eq!(state.recent.songs.capacity(), 8);
        assert!(state.is_fresh());
    }

    #[test]
    fn test_patch_records_turn() {
        let mut state = SessionState::new(&EngineConfig::default());
        SessionPatch::turn(Some(Mood::Sad), Topic::MoodSupport).apply(&mut state);
        assert_eq!(state.current_mood, Some(Mood::Sad));
        assert_eq!(state.last_topic, Some(Topic::MoodSupport));
        assert_eq!(state.interaction_count, 1);
        assert!(state.last_interaction.is_some());

        // A turn without a mood keeps the stored one
        SessionPatch::turn(None, Topic::Quote).apply(&mut state);
        assert_eq!(state.current_mood, Some(Mood::Sad));
        assert_eq!(state.interaction_count, 2);
        assert_eq!(state.recent_moods.len(), 1);
    }

    #[test]
    fn test_recent_moods_are_bounded() {
        let config = EngineConfig {
            mood_history: 2,
            ..EngineConfig::default()
        };
        let mut state = SessionState::new(&config);
        for mood in [Mood::Sad, Mood::Happy, Mood::Tired] {
            SessionPatch::turn(Some(mood), Topic::MoodSupport).apply(&mut state);
        }
        assert_eq!(state.recent_moods, VecDeque::from(vec![Mood::Happy, Mood::Tired]));
    }

    #[test]
    fn test_store_creates_and_resets() {
        let store = InMemorySessionStore::default();
        assert!(store.is_empty());

        let fresh = store.get("alice");
        assert_eq!(fresh.interaction_count, 0);
        assert_eq!(store.len(), 1);

        store.update("alice", SessionPatch::turn(Some(Mood::Happy), Topic::Greeting));
        {
            let handle = store.handle("alice");
            lock_session(&handle).recent.quotes.push("q1");
        }
        let state = store.get("alice");
        assert_eq!(state.interaction_count, 1);
        assert_eq!(state.current_mood, Some(Mood::Happy));

        store.reset("alice");
        let state = store.get("alice");
        assert_eq!(state.interaction_count, 0);
        assert_eq!(state.current_mood, None);
        assert!(state.recent.is_empty());
    }

    #[test]
    fn test_sessions_are_per_user() {
        let store = InMemorySessionStore::default();
        store.update("alice", SessionPatch::turn(Some(Mood::Sad), Topic::MoodSupport));
        assert_eq!(store.get("bob").current_mood, None);
        assert_eq!(store.get("alice").current_mood, Some(Mood::Sad));
    }
}
