//! # Content Module
//!
//! Static, keyed pools of supportive content consumed by the dialogue engine.
//! Pools are addressed by (category, sub-key) and are immutable at runtime.
//!
//! ## Components
//! - `ContentItem`: text payload or music track, each with an identity key
//! - `ContentSource`: read-only lookup with default sub-key fallback
//! - `ContentLibrary`: JSON-loadable implementation, plus the built-in library

mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

use crate::error::AppError;

/// Sub-key prefix for the alternate-language (Nepali) pools
pub const NEPALI_PREFIX: &str = "nepali_";

/// Content category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Quotes,
    Poems,
    ExerciseTips,
    Music,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Quotes,
        Category::Poems,
        Category::ExerciseTips,
        Category::Music,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Quotes => "quotes",
            Category::Poems => "poems",
            Category::ExerciseTips => "exercise_tips",
            Category::Music => "music",
        }
    }

    /// Sub-key used when a lookup misses
    pub fn default_key(&self) -> &'static str {
        match self {
            Category::Quotes => "motivational",
            Category::Poems => "uplifting",
            Category::ExerciseTips => "neutral",
            Category::Music => "neutral",
        }
    }

    /// Default sub-key for a requested key, keeping its language prefix
    pub fn default_key_for(&self, key: &str) -> String {
        if key.starts_with(NEPALI_PREFIX) {
            format!("{}{}", NEPALI_PREFIX, self.default_key())
        } else {
            self.default_key().to_string()
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Energy tag carried by music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Energy {
    VeryLow,
    Low,
    MediumLow,
    Medium,
    MediumHigh,
    High,
}

impl Energy {
    /// Tracks eligible for a cheer-up request out of sadness
    pub fn is_uplifting(&self) -> bool {
        matches!(self, Energy::Medium | Energy::High)
    }
}

/// A music recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicTrack {
    /// Explicit identity; two tracks may share a description or url
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: String,
    pub energy: Energy,
}

/// A single reusable payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentItem {
    Text(String),
    Music(MusicTrack),
}

impl ContentItem {
    /// Key used for repetition tracking
    pub fn identity(&self) -> &str {
        match self {
            ContentItem::Text(text) => text.as_str(),
            ContentItem::Music(track) => track.id.as_str(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentItem::Text(text) => Some(text.as_str()),
            ContentItem::Music(_) => None,
        }
    }

    pub fn as_music(&self) -> Option<&MusicTrack> {
        match self {
            ContentItem::Music(track) => Some(track),
            ContentItem::Text(_) => None,
        }
    }
}

/// A pool resolved by `ContentSource::resolve`
#[derive(Debug, Clone, Copy)]
pub struct ResolvedPool<'a> {
    /// The sub-key actually served (the default one after a miss)
    pub key: &'a str,
    pub items: &'a [ContentItem],
}

/// Read-only content lookup keyed by category and sub-key.
pub trait ContentSource: Send + Sync {
    /// Exact lookup. Returns `None` for unknown or empty pools.
    fn pool(&self, category: Category, key: &str) -> Option<ResolvedPool<'_>>;

    /// Lookup with fallback to the category's default sub-key.
    fn resolve(&self, category: Category, key: &str) -> Result<ResolvedPool<'_>, AppError> {
        if let Some(pool) = self.pool(category, key) {
            return Ok(pool);
        }

        let fallback = category.default_key_for(key);
        warn!("No {} pool for '{}', falling back to '{}'", category, key, fallback);
        self.pool(category, &fallback).ok_or_else(|| {
            AppError::Content(format!(
                "{} pool '{}' missing and default '{}' unavailable",
                category, key, fallback
            ))
        })
    }
}

/// Keyed content pools, loadable from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentLibrary {
    pub quotes: HashMap<String, Vec<ContentItem>>,
    pub poems: HashMap<String, Vec<ContentItem>>,
    pub exercise_tips: HashMap<String, Vec<ContentItem>>,
    pub music: HashMap<String, Vec<ContentItem>>,
}

impl ContentLibrary {
    /// The library shipped with the crate
    pub fn builtin() -> Self {
        builtin::library()
    }

    /// Parse and validate a library from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let library: ContentLibrary = serde_json::from_str(json)?;
        library.validate()?;
        Ok(library)
    }

    /// Read, parse and validate a library file.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let library = Self::from_json_str(&content)?;
        info!(
            "Loaded content library from {} ({} pools)",
            path.as_ref().display(),
            library.pool_count()
        );
        Ok(library)
    }

    fn pools(&self, category: Category) -> &HashMap<String, Vec<ContentItem>> {
        match category {
            Category::Quotes => &self.quotes,
            Category::Poems => &self.poems,
            Category::ExerciseTips => &self.exercise_tips,
            Category::Music => &self.music,
        }
    }

    pub fn pool_count(&self) -> usize {
        Category::ALL.iter().map(|c| self.pools(*c).len()).sum()
    }

    /// Check that no pool is empty, every category carries its default
    /// sub-key, music pools hold tracks and the other pools hold text.
    pub fn validate(&self) -> Result<(), AppError> {
        for category in Category::ALL {
            let pools = self.pools(category);

            if !pools.contains_key(category.default_key()) {
                return Err(AppError::Content(format!(
                    "{} is missing its default pool '{}'",
                    category,
                    category.default_key()
                )));
            }

            let has_language_variant = pools.keys().any(|k| k.starts_with(NEPALI_PREFIX));
            let language_default = category.default_key_for(NEPALI_PREFIX);
            if has_language_variant && !pools.contains_key(&language_default) {
                return Err(AppError::Content(format!(
                    "{} has {} pools but no '{}' default",
                    category, NEPALI_PREFIX, language_default
                )));
            }

            for (key, items) in pools {
                if items.is_empty() {
                    return Err(AppError::Content(format!("{} pool '{}' is empty", category, key)));
                }
                let well_typed = items.iter().all(|item| match category {
                    Category::Music => item.as_music().is_some(),
                    _ => item.as_text().is_some(),
                });
                if !well_typed {
                    return Err(AppError::Content(format!(
                        "{} pool '{}' holds items of the wrong kind",
                        category, key
                    )));
                }
            }
        }
        Ok(())
    }
}

impl ContentSource for ContentLibrary {
    fn pool(&self, category: Category, key: &str) -> Option<ResolvedPool<'_>> {
        self.pools(category)
            .get_key_value(key)
            .filter(|(_, items)| !items.is_empty())
            .map(|(key, items)| ResolvedPool {
                key: key.as_str(),
                items: items.as_slice(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json() -> &'static str {
        r#"{
            "quotes": { "motivational": ["Keep going."], "emotional": ["Feelings are valid."] },
            "poems": { "uplifting": ["Lift your eyes."] },
            "exercise_tips": { "neutral": ["Walk for ten minutes."] },
            "music": {
                "neutral": [
                    { "id": "neutral_1", "title": "Lofi", "url": "https://example.com/1",
                      "description": "Calm beats", "energy": "medium" }
                ]
            }
        }"#
    }

    #[test]
    fn test_builtin_library_is_valid() {
        let library = ContentLibrary::builtin();
        assert!(library.validate().is_ok());
        assert!(library.pool_count() > 20);
    }

    #[test]
    fn test_parse_minimal_library() {
        let library = ContentLibrary::from_json_str(minimal_json()).unwrap();
        let pool = library.pool(Category::Music, "neutral").unwrap();
        assert_eq!(pool.items.len(), 1);
        assert_eq!(pool.items[0].identity(), "neutral_1");
        assert_eq!(pool.items[0].as_music().unwrap().energy, Energy::Medium);
    }

    #[test]
    fn test_resolve_falls_back_to_default_key() {
        let library = ContentLibrary::from_json_str(minimal_json()).unwrap();

        let pool = library.resolve(Category::Quotes, "mindfulness").unwrap();
        assert_eq!(pool.key, "motivational");

        let pool = library.resolve(Category::Quotes, "emotional").unwrap();
        assert_eq!(pool.key, "emotional");
    }

    #[test]
    fn test_resolve_keeps_language_prefix() {
        assert_eq!(Category::Poems.default_key_for("nepali_sad"), "nepali_uplifting");
        assert_eq!(Category::Poems.default_key_for("sad"), "uplifting");

        let library = ContentLibrary::from_json_str(minimal_json()).unwrap();
        let err = library.resolve(Category::Poems, "nepali_sad").unwrap_err();
        assert!(matches!(err, AppError::Content(_)));
    }

    #[test]
    fn test_validate_rejects_empty_pool() {
        let mut library = ContentLibrary::from_json_str(minimal_json()).unwrap();
        library.poems.insert("sad".to_string(), vec![]);
        assert!(matches!(library.validate(), Err(AppError::Content(_))));
    }

    #[test]
    fn test_validate_rejects_missing_default() {
        let mut library = ContentLibrary::from_json_str(minimal_json()).unwrap();
        library.exercise_tips.remove("neutral");
        assert!(library.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_text_in_music_pool() {
        let mut library = ContentLibrary::from_json_str(minimal_json()).unwrap();
        library
            .music
            .insert("sad".to_string(), vec![ContentItem::Text("not a track".to_string())]);
        assert!(library.validate().is_err());
    }

    #[test]
    fn test_from_json_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        std::fs::write(&path, minimal_json()).unwrap();

        let library = ContentLibrary::from_json_path(&path).unwrap();
        assert_eq!(library.pool_count(), 5);

        let missing = ContentLibrary::from_json_path(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(AppError::Io(_))));
    }
}
