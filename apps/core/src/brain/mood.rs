//! Mood classification using ordered keyword rules.
//!
//! Deterministic, stateless and case-insensitive. Keywords are stems matched
//! at the start of a word, so "sadness" reads as sad while "unhappy" never
//! reads as happy. Rules are evaluated in a fixed order and the first one
//! that matches wins: there is no scoring.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::AppError;

/// Emotional state label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Sad,
    Lonely,
    Anxious,
    Angry,
    Tired,
    Neutral,
    /// Explicit request for motivation or encouragement
    Motivational,
}

impl Mood {
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Lonely,
        Mood::Anxious,
        Mood::Angry,
        Mood::Tired,
        Mood::Neutral,
        Mood::Motivational,
    ];

    /// Stable label used for pool sub-keys, logs and records
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Lonely => "lonely",
            Mood::Anxious => "anxious",
            Mood::Angry => "angry",
            Mood::Tired => "tired",
            Mood::Neutral => "neutral",
            Mood::Motivational => "motivational",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Mood {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Mood::ALL
            .iter()
            .copied()
            .find(|m| m.label() == wanted)
            .ok_or_else(|| AppError::Validation(format!("Unknown mood tag: '{}'", s)))
    }
}

struct MoodRule {
    mood: Mood,
    pattern: &'static Regex,
}

// NOTE: expect() is acceptable here, the patterns are literals
static MOTIVATIONAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(motivat\w*|inspir\w*|encourag\w*|overcom\w*)").expect("Invalid regex: motivational keywords")
});

static LONELY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(lonel\w*|alone\b|isolat\w*|lonesome\w*)").expect("Invalid regex: lonely keywords")
});

static TIRED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(tired\w*|exhaust\w*|drained\b|sleep(y|iness)\b|fatigu\w*|worn out\b)")
        .expect("Invalid regex: tired keywords")
});

static ANXIOUS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(anxious\w*|anxiet\w*|fear\w*|scared\w*|afraid\b|nervous\w*|worr(y|ied|ies|ying)\b|panic\w*)")
        .expect("Invalid regex: anxious keywords")
});

// "mad" takes only its own inflections so "made" and "madam" stay neutral
static ANGRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(angr(y|ier|iest|ily)\b|mad(ly|ness|der|dest)?\b|furious\w*|annoy\w*|frustrat\w*)")
        .expect("Invalid regex: angry keywords")
});

static HAPPY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(happ(y|ier|iest|ily|iness)\b|joy\w*|glad\w*|excit\w*|cheerful\w*)")
        .expect("Invalid regex: happy keywords")
});

static SAD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(sad(ness|der|dest|den\w*|ly)?\b|unhapp\w*|depress\w*|upset\w*|miserab\w*|heartbr\w*)")
        .expect("Invalid regex: sad keywords")
});

static NEUTRAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(okay|fine|alright|so-so|so so|meh)\b").expect("Invalid regex: neutral keywords")
});

/// Keyword-priority mood classifier
pub struct MoodClassifier {
    rules: Vec<MoodRule>,
}

impl Default for MoodClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MoodClassifier {
    /// Create the classifier with the fixed rule order.
    ///
    /// Explicit motivation-seeking comes first so that "encourage me, I'm sad"
    /// is read as a request rather than a state report.
    pub fn new() -> Self {
        let rules = vec![
            MoodRule { mood: Mood::Motivational, pattern: &MOTIVATIONAL_PATTERN },
            MoodRule { mood: Mood::Lonely, pattern: &LONELY_PATTERN },
            MoodRule { mood: Mood::Tired, pattern: &TIRED_PATTERN },
            MoodRule { mood: Mood::Anxious, pattern: &ANXIOUS_PATTERN },
            MoodRule { mood: Mood::Angry, pattern: &ANGRY_PATTERN },
            MoodRule { mood: Mood::Happy, pattern: &HAPPY_PATTERN },
            MoodRule { mood: Mood::Sad, pattern: &SAD_PATTERN },
            MoodRule { mood: Mood::Neutral, pattern: &NEUTRAL_PATTERN },
        ];

        Self { rules }
    }

    /// Classify the mood expressed by a text, if any.
    pub fn classify(&self, text: &str) -> Option<Mood> {
        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(text))
            .map(|rule| rule.mood)
    }

    /// Keyword hits per mood, in rule order.
    pub fn keyword_hits(&self, text: &str) -> Vec<(Mood, usize)> {
        self.rules
            .iter()
            .map(|rule| (rule.mood, rule.pattern.find_iter(text).count()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emotional_states() {
        let classifier = MoodClassifier::new();

        assert_eq!(classifier.classify("I feel so lonely tonight"), Some(Mood::Lonely));
        assert_eq!(classifier.classify("I'm EXHAUSTED"), Some(Mood::Tired));
        assert_eq!(classifier.classify("I am scared of tomorrow"), Some(Mood::Anxious));
        assert_eq!(classifier.classify("so mad right now"), Some(Mood::Angry));
        assert_eq!(classifier.classify("I feel happy"), Some(Mood::Happy));
        assert_eq!(classifier.classify("I feel sad"), Some(Mood::Sad));
        assert_eq!(classifier.classify("I'm fine"), Some(Mood::Neutral));
    }

    #[test]
    fn test_priority_order() {
        let classifier = MoodClassifier::new();

        // Loneliness outranks sadness
        assert_eq!(classifier.classify("sad and alone"), Some(Mood::Lonely));
        // Fatigue outranks anxiety
        assert_eq!(classifier.classify("tired and anxious"), Some(Mood::Tired));
        // Happiness outranks sadness
        assert_eq!(classifier.classify("happy but a little sad"), Some(Mood::Happy));
        // Motivation-seeking outranks everything
        assert_eq!(classifier.classify("I'm sad, please encourage me"), Some(Mood::Motivational));
        assert_eq!(classifier.classify("how do I overcome fear"), Some(Mood::Motivational));
    }

    #[test]
    fn test_word_boundaries() {
        let classifier = MoodClassifier::new();

        assert_eq!(classifier.classify("I'm unhappy"), Some(Mood::Sad));
        assert_eq!(classifier.classify("I made dinner"), None);
        assert_eq!(classifier.classify("define this"), None);
        assert_eq!(classifier.classify("I enjoy the saddle"), None);
        assert_eq!(classifier.classify("the train was late"), None);
    }

    #[test]
    fn test_inflected_keywords() {
        let classifier = MoodClassifier::new();

        assert_eq!(classifier.classify("I'm overwhelmed by sadness"), Some(Mood::Sad));
        assert_eq!(classifier.classify("feeling depression"), Some(Mood::Sad));
        assert_eq!(classifier.classify("so much unhappiness"), Some(Mood::Sad));
        assert_eq!(classifier.classify("I feel so fearful"), Some(Mood::Anxious));
        assert_eq!(classifier.classify("I keep worrying"), Some(Mood::Anxious));
        assert_eq!(classifier.classify("tiredness everywhere"), Some(Mood::Tired));
        assert_eq!(classifier.classify("total loneliness"), Some(Mood::Lonely));
        assert_eq!(classifier.classify("this is so frustrating"), Some(Mood::Angry));
        assert_eq!(classifier.classify("pure happiness"), Some(Mood::Happy));
        assert_eq!(classifier.classify("I'm sad-ish today"), Some(Mood::Sad));
    }

    #[test]
    fn test_no_mood() {
        let classifier = MoodClassifier::new();

        assert_eq!(classifier.classify("give me a quote"), None);
        assert_eq!(classifier.classify("hello"), None);
        assert_eq!(classifier.classify(""), None);
    }

    #[test]
    fn test_keyword_hits_count_every_match() {
        let classifier = MoodClassifier::new();
        let hits = classifier.keyword_hits("sad, so sad, and alone");

        assert_eq!(hits.len(), Mood::ALL.len());
        assert_eq!(hits[0].0, Mood::Motivational);
        assert!(hits.contains(&(Mood::Sad, 2)));
        assert!(hits.contains(&(Mood::Lonely, 1)));
        assert!(hits.contains(&(Mood::Happy, 0)));
    }

    #[test]
    fn test_parse_labels() {
        for mood in Mood::ALL {
            assert_eq!(mood.label().parse::<Mood>().unwrap(), mood);
        }
        assert_eq!(" SAD ".parse::<Mood>().unwrap(), Mood::Sad);
        assert!("grumpy".parse::<Mood>().is_err());
    }
}
