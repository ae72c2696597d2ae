use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;
use validator::Validate;

use crate::error::AppError;

/// Tunables of the dialogue engine and its host.
#[derive(Debug, Serialize, Deserialize, Clone, Validate, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Recently served quotes to avoid repeating.
    #[validate(range(min = 1, max = 100))]
    pub quote_history: usize,
    /// Recently served poems to avoid repeating.
    #[validate(range(min = 1, max = 100))]
    pub poem_history: usize,
    /// Recently served exercise tips to avoid repeating.
    #[validate(range(min = 1, max = 100))]
    pub exercise_history: usize,
    /// Recently served songs, shared across moods.
    #[validate(range(min = 1, max = 100))]
    pub song_history: usize,
    /// Resolved moods kept in the session record.
    #[validate(range(min = 1, max = 100))]
    pub mood_history: usize,
    /// Greetings are answered as such only during the first turns.
    pub greeting_window: u32,
    /// Reply substituted when a turn fails.
    #[validate(length(min = 1))]
    pub fallback_reply: String,
    /// JSON content library; the built-in one is used when unset.
    pub content_path: Option<PathBuf>,
    /// Upper bound on one turn, seen from the host.
    #[validate(range(min = 1, max = 300))]
    pub turn_timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            quote_history: 5,
            poem_history: 5,
            exercise_history: 5,
            song_history: 8,
            mood_history: 10,
            greeting_window: 2,
            fallback_reply: "I'm here to support you. Could you tell me more about how you're feeling?"
                .to_string(),
            content_path: None,
            turn_timeout_secs: 30,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `MOODCHAT_*` variables (a `.env` file is read first).
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();

        let defaults = Self::default();
        let config = Self {
            quote_history: env_or("MOODCHAT_QUOTE_HISTORY", defaults.quote_history)?,
            poem_history: env_or("MOODCHAT_POEM_HISTORY", defaults.poem_history)?,
            exercise_history: env_or("MOODCHAT_EXERCISE_HISTORY", defaults.exercise_history)?,
            song_history: env_or("MOODCHAT_SONG_HISTORY", defaults.song_history)?,
            mood_history: env_or("MOODCHAT_MOOD_HISTORY", defaults.mood_history)?,
            greeting_window: env_or("MOODCHAT_GREETING_WINDOW", defaults.greeting_window)?,
            fallback_reply: env::var("MOODCHAT_FALLBACK_REPLY").unwrap_or(defaults.fallback_reply),
            content_path: env::var("MOODCHAT_CONTENT_PATH").ok().map(PathBuf::from),
            turn_timeout_secs: env_or("MOODCHAT_TURN_TIMEOUT_SECS", defaults.turn_timeout_secs)?,
        };

        config.validate()?;
        info!("Engine configuration loaded: {:?}", config);
        Ok(config)
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{} = '{}': {}", key, raw, e))),
        Err(_) => Ok(default),
    }
}
