//! Test Module
//!
//! Scenario and property suite for the MoodChat core.
//!
//! ## Test Categories
//! - `engine_tests`: Full conversations through `DialogueEngine::respond`
//! - `router_tests`: Rule precedence and handler arguments
//! - `selector_tests`: Anti-repetition properties, shared song buffer, cheer-up filter
//! - `responder_tests`: Actor host, fallback substitution and message log

pub mod responder_tests;

use std::sync::Arc;

use crate::brain::{DialogueEngine, InMemorySessionStore, RandomSource, SequenceRandom, ThreadRandom};
use crate::config::EngineConfig;
use crate::content::{ContentLibrary, ContentSource};

/// Engine over the built-in library with the given randomness.
pub fn engine_with_random(random: Arc<dyn RandomSource>) -> DialogueEngine {
    engine_with_content(Arc::new(ContentLibrary::builtin()), random)
}

pub fn engine_with_content(content: Arc<dyn ContentSource>, random: Arc<dyn RandomSource>) -> DialogueEngine {
    let config = EngineConfig::default();
    DialogueEngine::new(
        &config,
        content,
        Arc::new(InMemorySessionStore::new(config.clone())),
        random,
    )
}

/// Engine that always picks the first fresh candidate.
pub fn deterministic_engine() -> DialogueEngine {
    engine_with_random(Arc::new(SequenceRandom::first()))
}

pub fn random_engine() -> DialogueEngine {
    engine_with_random(Arc::new(ThreadRandom))
}

/// Payload of a quote reply: the text between the surrounding double quotes.
pub fn quoted(reply: &str) -> &str {
    reply
        .split_once("\n\n")
        .map(|(_, body)| body.trim_matches('"'))
        .unwrap_or(reply)
}
