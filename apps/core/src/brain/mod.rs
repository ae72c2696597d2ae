//! # Brain Module
//!
//! Deterministic dialogue core of MoodChat.
//! Turns one inbound message plus the user's session into one supportive reply.
//!
//! ## Components
//! - `mood`: Keyword-priority mood classification
//! - `analyzer`: Scored mood analysis with confidence and distribution
//! - `session`: Per-user session state, recency buffers and the session store
//! - `selector`: Anti-repetition selection over content pools
//! - `router`: Ordered (predicate, handler) rule table
//! - `composer`: Reply phrasing and formatting
//! - `engine`: Main orchestrator

pub mod analyzer;
pub mod composer;
pub mod engine;
pub mod mood;
pub mod router;
pub mod selector;
pub mod session;

pub use analyzer::{MoodAnalysis, MoodAnalyzer};
pub use engine::DialogueEngine;
pub use mood::{Mood, MoodClassifier};
pub use router::{Intent, Route, Router, Turn};
pub use selector::{RandomSource, ResetScope, SeededRandom, Selector, SequenceRandom, ThreadRandom};
pub use session::{InMemorySessionStore, RecencyBuffer, SessionPatch, SessionState, SessionStore, Topic};
