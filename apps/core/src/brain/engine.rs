//! The dialogue engine: one synchronous `respond` per inbound message.

use std::sync::Arc;
use tracing::{info, instrument};

use super::composer::{self, QuoteFraming};
use super::mood::{Mood, MoodClassifier};
use super::router::{wants_cheer_up, Intent, PlanFraming, Router, Turn};
use super::selector::{RandomSource, ResetScope, Selector, ThreadRandom};
use super::session::{lock_session, InMemorySessionStore, SessionPatch, SessionState, SessionStore};
use crate::config::EngineConfig;
use crate::content::{Category, ContentItem, ContentLibrary, ContentSource};
use crate::error::AppError;
use crate::models::Reply;

pub struct DialogueEngine {
    classifier: MoodClassifier,
    router: Router,
    selector: Selector,
    content: Arc<dyn ContentSource>,
    sessions: Arc<dyn SessionStore>,
}

impl DialogueEngine {
    pub fn new(
        config: &EngineConfig,
        content: Arc<dyn ContentSource>,
        sessions: Arc<dyn SessionStore>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            classifier: MoodClassifier::new(),
            router: Router::new(config.greeting_window),
            selector: Selector::new(random),
            content,
            sessions,
        }
    }

    /// Engine with in-memory sessions, unseeded randomness and the configured
    /// content library (the built-in one when no path is set).
    pub fn from_config(config: &EngineConfig) -> Result<Self, AppError> {
        let library = match &config.content_path {
            Some(path) => ContentLibrary::from_json_path(path)?,
            None => ContentLibrary::builtin(),
        };
        Ok(Self::new(
            config,
            Arc::new(library),
            Arc::new(InMemorySessionStore::new(config.clone())),
            Arc::new(ThreadRandom),
        ))
    }

    /// Snapshot of a user's session
    pub fn session(&self, user_id: &str) -> SessionState {
        self.sessions.get(user_id)
    }

    pub fn reset_session(&self, user_id: &str) {
        self.sessions.reset(user_id);
    }

    /// Answer one message. The whole turn runs under the user's session lock
    /// on a working copy of the session, committed only when the turn succeeds.
    #[instrument(skip(self, text))]
    pub fn respond(&self, user_id: &str, text: &str, explicit_mood: Option<Mood>) -> Result<Reply, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::Validation("Message text is empty".to_string()));
        }

        let handle = self.sessions.handle(user_id);
        let mut stored = lock_session(&handle);
        let mut state = stored.clone();
        if state.is_fresh() {
            state.reset();
        }

        let detected = self.classifier.classify(text);
        let mood = detected.or(explicit_mood).or(state.current_mood);
        state.cheer_up_active = wants_cheer_up(text);

        let route = {
            let turn = Turn::new(text, detected, mood, &state);
            self.router.route(&turn)
        };

        let reply_text = self.render(&route.intent, &mut state)?;
        let resolved = route.intent.mood_override().or(mood);
        let topic = route.intent.topic();
        SessionPatch::turn(resolved, topic).apply(&mut state);
        *stored = state;

        info!(
            "Turn {} for {}: rule={} mood={} topic={}",
            stored.interaction_count,
            user_id,
            route.rule,
            resolved.map(|m| m.label()).unwrap_or("none"),
            topic
        );

        Ok(Reply {
            text: reply_text,
            mood: resolved,
            topic: Some(topic),
        })
    }

    fn render(&self, intent: &Intent, state: &mut SessionState) -> Result<String, AppError> {
        let text = match intent {
            Intent::Closing => self.line(composer::FAREWELLS)?,
            Intent::SmallTalk => self.line(composer::SMALL_TALK)?,
            Intent::Greeting => self.line(composer::GREETINGS)?,
            Intent::Quote { key, framing } => self.quote(key, *framing, state)?,
            Intent::Poem { key } => self.poem(key, state)?,
            Intent::ExerciseTip { mood } => self.exercise_tip(*mood, state)?,
            Intent::Music { mood, cheer_up } => self.music(*mood, *cheer_up, state)?,
            Intent::ActionPlan { mood, framing } => self.action_plan(*mood, *framing)?,
            Intent::CheerUp { sad: true, .. } => {
                let line = self.line(composer::mood_lines(Mood::Sad, true))?;
                let card = self.music(Some(Mood::Sad), true, state)?;
                format!("{}\n\n{}", line, card)
            }
            Intent::CheerUp { mood, sad: false } => {
                let card = self.music(Some(mood.unwrap_or(Mood::Neutral)), true, state)?;
                format!("{}{}", composer::CHEER_UP_OPENER, card)
            }
            Intent::MoodSupport { mood, cheer_up } => self.line(composer::mood_lines(*mood, *cheer_up))?,
            Intent::Empathy => self.line(composer::EMPATHY)?,
        };
        Ok(text)
    }

    fn line(&self, lines: &[&str]) -> Result<String, AppError> {
        self.selector
            .choose(lines)
            .map(|line| line.to_string())
            .ok_or_else(|| AppError::Internal("No canned lines to choose from".to_string()))
    }

    fn quote(&self, key: &str, framing: QuoteFraming, state: &mut SessionState) -> Result<String, AppError> {
        let pool = self.content.resolve(Category::Quotes, key)?;
        let item = self.selector.pick(pool.items, &mut state.recent.quotes, ResetScope::Whole)?;
        Ok(composer::quote(framing, text_of(item)?))
    }

    fn poem(&self, key: &str, state: &mut SessionState) -> Result<String, AppError> {
        let pool = self.content.resolve(Category::Poems, key)?;
        let item = self.selector.pick(pool.items, &mut state.recent.poems, ResetScope::Whole)?;
        Ok(composer::poem(pool.key, text_of(item)?))
    }

    fn exercise_tip(&self, mood: Option<Mood>, state: &mut SessionState) -> Result<String, AppError> {
        let key = mood.map(|m| m.label()).unwrap_or(Category::ExerciseTips.default_key());
        let pool = self.content.resolve(Category::ExerciseTips, key)?;
        let item = self
            .selector
            .pick(pool.items, &mut state.recent.exercise_tips, ResetScope::Whole)?;
        Ok(composer::exercise_tip(mood, text_of(item)?))
    }

    /// Songs share one buffer across moods, so exhaustion only forgets this
    /// mood's tracks. A sad cheer-up request narrows the candidates to
    /// uplifting tracks when the pool has any.
    fn music(&self, mood: Option<Mood>, cheer_up: bool, state: &mut SessionState) -> Result<String, AppError> {
        let key = mood.map(|m| m.label()).unwrap_or(Category::Music.default_key());
        let pool = self.content.resolve(Category::Music, key)?;

        let uplifting: Vec<ContentItem> = if cheer_up && mood == Some(Mood::Sad) {
            pool.items
                .iter()
                .filter(|item| item.as_music().is_some_and(|track| track.energy.is_uplifting()))
                .cloned()
                .collect()
        } else {
            Vec::new()
        };
        let candidates = if uplifting.is_empty() {
            pool.items
        } else {
            uplifting.as_slice()
        };

        let item = self
            .selector
            .pick(candidates, &mut state.recent.songs, ResetScope::Pool(pool.items))?;
        let track = item
            .as_music()
            .ok_or_else(|| AppError::Content(format!("music pool '{}' holds a non-track item", pool.key)))?;
        Ok(composer::music_card(composer::music_intro(mood, cheer_up), track))
    }

    fn action_plan(&self, mood: Mood, framing: PlanFraming) -> Result<String, AppError> {
        let intro = match framing {
            PlanFraming::Strategies => composer::strategies_intro(mood),
            PlanFraming::Fear => self.line(composer::FEAR_LINES)?,
            PlanFraming::Overcome => self.line(composer::OVERCOME_LINES)?,
            PlanFraming::Support => composer::SUPPORT_LINE.to_string(),
            PlanFraming::WhatToDo => self.line(composer::what_to_do_lines(mood))?,
        };
        Ok(composer::action_plan(&intro, mood))
    }
}

fn text_of(item: &ContentItem) -> Result<&str, AppError> {
    item.as_text()
        .ok_or_else(|| AppError::Content(format!("expected a text item, found track '{}'", item.identity())))
}
