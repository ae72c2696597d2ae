//! Priority-ordered intent routing.
//!
//! `RULES` is evaluated top to bottom and the first matching predicate wins.
//! The router only decides what to answer; selecting and formatting content
//! is left to the engine.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::composer::QuoteFraming;
use super::mood::Mood;
use super::session::{SessionState, Topic};
use crate::content::NEPALI_PREFIX;

// NOTE: expect() is acceptable here, the patterns are literals
static CLOSING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:ok|okay|alright|great|cool),?\s+)?(?:thanks|thank you|thank u|thx|ty|bye|goodbye|see you|see you later|farewell|good night|take care|quit|exit)$",
    )
    .expect("Invalid regex: closing phrases")
});

static HOW_ARE_YOU_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(how (are|r) (you|u|ya)|how you doin[g']?|how's it going)\b").expect("Invalid regex: how are you")
});

static GREETING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(hello|hi|hey|greetings|good (morning|afternoon|evening))\b").expect("Invalid regex: greetings")
});

static LANGUAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\bnepali\b|नेपाली)").expect("Invalid regex: language qualifier"));

static STRATEGY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(ways? to|strateg(y|ies)|techniques?|how (do|can|should) i)\b").expect("Invalid regex: strategies")
});

static FEAR_OR_OVERCOME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(fears?|scared|afraid|overcom\w*|anxiety|worr(y|ied|ying)|panic\w*)\b")
        .expect("Invalid regex: fear or overcome")
});

static FEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(fears?|scared|afraid)\b").expect("Invalid regex: fear"));

static ANXIETY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(fears?|scared|afraid|anxiety|worr(y|ied|ying)|panic\w*)\b").expect("Invalid regex: anxiety")
});

static OVERCOME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bovercom\w*").expect("Invalid regex: overcome"));

static POEM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(poems?|poetry)\b").expect("Invalid regex: poem"));

static EXERCISE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(exercises?|workouts?|fitness|physical|activity|activities|move|tips?)\b")
        .expect("Invalid regex: exercise")
});

static MUSIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(songs?|music|playlists?|youtube|listen\w*)\b").expect("Invalid regex: music")
});

static QUOTE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bquotes?\b").expect("Invalid regex: quote"));

static ANOTHER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(another|more|different)\b").expect("Invalid regex: another"));

static WHAT_TO_DO_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(what (should|do|can) i do|what to do)\b").expect("Invalid regex: what to do")
});

static CHEER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bcheer\w*").expect("Invalid regex: cheer"));

static UP_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bup\b").expect("Invalid regex: up"));

static SAD_WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bsad\b").expect("Invalid regex: sad word"));

static MOTIVATION_WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bmotivat\w*").expect("Invalid regex: motivation word"));

static UPLIFT_WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\buplift\w*").expect("Invalid regex: uplift word"));

static EMOTIONAL_WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(sad|emotional)\b").expect("Invalid regex: emotional word"));

static JOY_WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(happy|joy\w*|uplifting)\b").expect("Invalid regex: joy word"));

static MINDFUL_WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(mindful\w*|present)\b").expect("Invalid regex: mindful word"));

const SHORTHAND_PHRASES: &[&str] = &[
    "another",
    "another one",
    "another quote",
    "more",
    "more please",
    "one more",
    "more quotes",
    "different quote",
    "something different",
    "tell me more",
];

const QUOTE_SHORTHAND: &[&str] = &["another quote", "more quotes", "different quote"];

/// Whether the text asks to be cheered up: a `cheer*` token and an `up` token.
pub fn wants_cheer_up(text: &str) -> bool {
    CHEER_PATTERN.is_match(text) && UP_PATTERN.is_match(text)
}

/// Lowercase, trim and strip trailing punctuation.
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .trim_end_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace())
        .to_string()
}

/// One inbound turn as seen by the router
pub struct Turn<'a> {
    pub text: &'a str,
    pub normalized: String,
    /// Mood classified from this message alone
    pub detected: Option<Mood>,
    /// Merged mood: message, then host-supplied, then stored
    pub mood: Option<Mood>,
    pub state: &'a SessionState,
}

impl<'a> Turn<'a> {
    pub fn new(text: &'a str, detected: Option<Mood>, mood: Option<Mood>, state: &'a SessionState) -> Self {
        Self {
            text,
            normalized: normalize(text),
            detected,
            mood,
            state,
        }
    }
}

/// How an action-plan reply opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanFraming {
    Strategies,
    Fear,
    Overcome,
    Support,
    WhatToDo,
}

/// What the turn should produce, with the arguments its handler needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Closing,
    SmallTalk,
    Greeting,
    Quote { key: String, framing: QuoteFraming },
    Poem { key: String },
    ExerciseTip { mood: Option<Mood> },
    Music { mood: Option<Mood>, cheer_up: bool },
    ActionPlan { mood: Mood, framing: PlanFraming },
    CheerUp { mood: Option<Mood>, sad: bool },
    MoodSupport { mood: Mood, cheer_up: bool },
    Empathy,
}

impl Intent {
    pub fn topic(&self) -> Topic {
        match self {
            Intent::Closing => Topic::Farewell,
            Intent::SmallTalk => Topic::SmallTalk,
            Intent::Greeting => Topic::Greeting,
            Intent::Quote { .. } => Topic::Quote,
            Intent::Poem { .. } => Topic::Poem,
            Intent::ExerciseTip { .. } => Topic::ExerciseTip,
            Intent::Music { .. } => Topic::Music,
            Intent::ActionPlan { .. } => Topic::ActionPlan,
            Intent::CheerUp { .. } => Topic::CheerUp,
            Intent::MoodSupport { .. } => Topic::MoodSupport,
            Intent::Empathy => Topic::Empathy,
        }
    }

    /// Mood the handler resolves for the turn, when it differs from the merged one.
    pub fn mood_override(&self) -> Option<Mood> {
        match self {
            Intent::ActionPlan { mood, .. } | Intent::MoodSupport { mood, .. } => Some(*mood),
            _ => None,
        }
    }
}

/// The rule that matched and what it produced
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub rule: &'static str,
    pub intent: Intent,
}

struct Rule {
    name: &'static str,
    matches: fn(&Router, &Turn) -> bool,
    handle: fn(&Router, &Turn) -> Intent,
}

const RULES: &[Rule] = &[
    Rule { name: "closing", matches: Router::is_closing, handle: Router::closing },
    Rule { name: "how_are_you", matches: Router::is_how_are_you, handle: Router::small_talk },
    Rule { name: "shorthand", matches: Router::is_shorthand, handle: Router::shorthand },
    Rule { name: "greeting", matches: Router::is_greeting, handle: Router::greeting },
    Rule { name: "language_poem", matches: Router::is_language_request, handle: Router::language_poem },
    Rule { name: "strategies", matches: Router::is_strategy_request, handle: Router::strategies },
    Rule { name: "fear_or_overcome", matches: Router::is_fear_or_overcome, handle: Router::fear_or_overcome },
    Rule { name: "poem", matches: Router::is_poem_request, handle: Router::poem },
    Rule { name: "exercise", matches: Router::is_exercise_request, handle: Router::exercise },
    Rule { name: "music", matches: Router::is_music_request, handle: Router::music },
    Rule { name: "quote", matches: Router::is_quote_request, handle: Router::quote },
    Rule { name: "what_to_do", matches: Router::is_what_to_do, handle: Router::what_to_do },
    Rule { name: "cheer_up", matches: Router::is_cheer_up, handle: Router::cheer_up },
    Rule { name: "mood_support", matches: Router::has_mood, handle: Router::mood_support },
    Rule { name: "empathy", matches: Router::always, handle: Router::empathy },
];

/// Ordered rule table over (text, mood, session).
#[derive(Debug, Clone)]
pub struct Router {
    greeting_window: u32,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Router {
    /// `greeting_window`: greetings are honored while fewer turns than this have completed.
    pub fn new(greeting_window: u32) -> Self {
        Self { greeting_window }
    }

    /// Names of the rules in evaluation order
    pub fn rule_names() -> Vec<&'static str> {
        RULES.iter().map(|r| r.name).collect()
    }

    pub fn route(&self, turn: &Turn) -> Route {
        for rule in RULES {
            if (rule.matches)(self, turn) {
                let intent = (rule.handle)(self, turn);
                debug!("Rule '{}' matched: {:?}", rule.name, intent);
                return Route { rule: rule.name, intent };
            }
        }
        // The last rule always matches
        Route { rule: "empathy", intent: Intent::Empathy }
    }

    // --- Predicates ---

    fn is_closing(&self, turn: &Turn) -> bool {
        CLOSING_PATTERN.is_match(&turn.normalized)
    }

    fn is_how_are_you(&self, turn: &Turn) -> bool {
        HOW_ARE_YOU_PATTERN.is_match(turn.text)
    }

    fn is_shorthand(&self, turn: &Turn) -> bool {
        SHORTHAND_PHRASES.contains(&turn.normalized.as_str())
    }

    fn is_greeting(&self, turn: &Turn) -> bool {
        turn.state.interaction_count < self.greeting_window && GREETING_PATTERN.is_match(turn.text)
    }

    fn is_language_request(&self, turn: &Turn) -> bool {
        LANGUAGE_PATTERN.is_match(turn.text)
    }

    fn is_strategy_request(&self, turn: &Turn) -> bool {
        STRATEGY_PATTERN.is_match(turn.text)
    }

    fn is_fear_or_overcome(&self, turn: &Turn) -> bool {
        FEAR_OR_OVERCOME_PATTERN.is_match(turn.text)
    }

    fn is_poem_request(&self, turn: &Turn) -> bool {
        POEM_PATTERN.is_match(turn.text)
    }

    fn is_exercise_request(&self, turn: &Turn) -> bool {
        EXERCISE_PATTERN.is_match(turn.text)
    }

    fn is_music_request(&self, turn: &Turn) -> bool {
        MUSIC_PATTERN.is_match(turn.text)
    }

    fn is_quote_request(&self, turn: &Turn) -> bool {
        QUOTE_PATTERN.is_match(turn.text)
    }

    fn is_what_to_do(&self, turn: &Turn) -> bool {
        WHAT_TO_DO_PATTERN.is_match(turn.text)
    }

    fn is_cheer_up(&self, turn: &Turn) -> bool {
        wants_cheer_up(turn.text)
    }

    fn has_mood(&self, turn: &Turn) -> bool {
        turn.mood.is_some()
    }

    fn always(&self, _turn: &Turn) -> bool {
        true
    }

    // --- Handlers ---

    fn closing(&self, _turn: &Turn) -> Intent {
        Intent::Closing
    }

    fn small_talk(&self, _turn: &Turn) -> Intent {
        Intent::SmallTalk
    }

    fn greeting(&self, _turn: &Turn) -> Intent {
        Intent::Greeting
    }

    fn empathy(&self, _turn: &Turn) -> Intent {
        Intent::Empathy
    }

    fn shorthand(&self, turn: &Turn) -> Intent {
        let mood = turn.state.current_mood;
        let quote = || Intent::Quote {
            key: quote_key("", mood),
            framing: QuoteFraming::Shorthand,
        };

        if QUOTE_SHORTHAND.contains(&turn.normalized.as_str()) {
            return quote();
        }
        match turn.state.last_topic {
            Some(Topic::Poem) => Intent::Poem { key: poem_key("", mood) },
            Some(Topic::ExerciseTip) => Intent::ExerciseTip { mood },
            Some(Topic::Music) => Intent::Music { mood, cheer_up: false },
            _ => quote(),
        }
    }

    fn language_poem(&self, turn: &Turn) -> Intent {
        Intent::Poem {
            key: format!("{}{}", NEPALI_PREFIX, poem_key(turn.text, turn.mood)),
        }
    }

    fn strategies(&self, turn: &Turn) -> Intent {
        Intent::ActionPlan {
            mood: turn.mood.unwrap_or(Mood::Neutral),
            framing: PlanFraming::Strategies,
        }
    }

    fn fear_or_overcome(&self, turn: &Turn) -> Intent {
        let framing = if FEAR_PATTERN.is_match(turn.text) {
            PlanFraming::Fear
        } else if OVERCOME_PATTERN.is_match(turn.text) {
            PlanFraming::Overcome
        } else {
            PlanFraming::Support
        };
        let mood = if ANXIETY_PATTERN.is_match(turn.text) {
            Mood::Anxious
        } else {
            turn.detected.unwrap_or(Mood::Motivational)
        };
        Intent::ActionPlan { mood, framing }
    }

    fn poem(&self, turn: &Turn) -> Intent {
        Intent::Poem {
            key: poem_key(turn.text, turn.mood),
        }
    }

    fn exercise(&self, turn: &Turn) -> Intent {
        Intent::ExerciseTip { mood: turn.mood }
    }

    fn music(&self, turn: &Turn) -> Intent {
        Intent::Music {
            mood: turn.mood,
            cheer_up: turn.state.cheer_up_active,
        }
    }

    fn quote(&self, turn: &Turn) -> Intent {
        let framing = if ANOTHER_PATTERN.is_match(turn.text) {
            QuoteFraming::Another
        } else {
            QuoteFraming::First
        };
        Intent::Quote {
            key: quote_key(turn.text, turn.mood),
            framing,
        }
    }

    fn what_to_do(&self, turn: &Turn) -> Intent {
        Intent::ActionPlan {
            mood: turn.mood.unwrap_or(Mood::Neutral),
            framing: PlanFraming::WhatToDo,
        }
    }

    fn cheer_up(&self, turn: &Turn) -> Intent {
        Intent::CheerUp {
            mood: turn.mood,
            sad: SAD_WORD_PATTERN.is_match(turn.text) || turn.mood == Some(Mood::Sad),
        }
    }

    fn mood_support(&self, turn: &Turn) -> Intent {
        Intent::MoodSupport {
            mood: turn.mood.unwrap_or(Mood::Neutral),
            cheer_up: turn.state.cheer_up_active,
        }
    }
}

/// Poem sub-key: explicit words first, then the mood.
pub fn poem_key(text: &str, mood: Option<Mood>) -> String {
    let key = if MOTIVATION_WORD_PATTERN.is_match(text) {
        "motivational"
    } else if UPLIFT_WORD_PATTERN.is_match(text) {
        "uplifting"
    } else {
        match mood {
            Some(Mood::Happy) => "happy",
            Some(Mood::Sad) => "sad",
            Some(Mood::Lonely) => "lonely",
            Some(Mood::Motivational) => "motivational",
            Some(_) => "calming",
            None => "uplifting",
        }
    };
    key.to_string()
}

/// Quote sub-key: explicit words first, then the mood.
pub fn quote_key(text: &str, mood: Option<Mood>) -> String {
    let key = if MOTIVATION_WORD_PATTERN.is_match(text) {
        "motivational"
    } else if EMOTIONAL_WORD_PATTERN.is_match(text) {
        "emotional"
    } else if JOY_WORD_PATTERN.is_match(text) {
        "uplifting"
    } else if MINDFUL_WORD_PATTERN.is_match(text) {
        "mindfulness"
    } else {
        match mood {
            Some(Mood::Anxious | Mood::Sad | Mood::Lonely) => "emotional",
            Some(Mood::Happy) => "uplifting",
            Some(Mood::Motivational) => "motivational",
            _ => "mindfulness",
        }
    };
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Thanks!! "), "thanks");
        assert_eq!(normalize("OK, thanks."), "ok, thanks");
        assert_eq!(normalize("???"), "");
    }

    #[test]
    fn test_wants_cheer_up() {
        assert!(wants_cheer_up("cheer me up"));
        assert!(wants_cheer_up("Can you CHEER me UP?"));
        assert!(!wants_cheer_up("cheers"));
        assert!(!wants_cheer_up("I woke up early"));
        assert!(!wants_cheer_up("upbeat cheerful song"));
    }

    #[test]
    fn test_poem_key() {
        assert_eq!(poem_key("a motivational poem", Some(Mood::Sad)), "motivational");
        assert_eq!(poem_key("something uplifting", None), "uplifting");
        assert_eq!(poem_key("a poem", Some(Mood::Tired)), "calming");
        assert_eq!(poem_key("a poem", Some(Mood::Angry)), "calming");
        assert_eq!(poem_key("a poem", None), "uplifting");
    }

    #[test]
    fn test_quote_key() {
        assert_eq!(quote_key("a quote", Some(Mood::Lonely)), "emotional");
        assert_eq!(quote_key("a happy quote", Some(Mood::Sad)), "uplifting");
        assert_eq!(quote_key("a mindful quote", None), "mindfulness");
        assert_eq!(quote_key("a quote", Some(Mood::Tired)), "mindfulness");
        assert_eq!(quote_key("a quote", Some(Mood::Motivational)), "motivational");
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let names = Router::rule_names();
        assert_eq!(names.len(), 15);
        assert_eq!(names.first(), Some(&"closing"));
        assert_eq!(names.last(), Some(&"empathy"));
    }
}
