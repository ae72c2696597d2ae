//! Scored mood analysis.
//!
//! The classifier stops at the first matching rule. The analyzer instead
//! counts every keyword hit, boosts keywords preceded by an intensifier
//! ("very sad") and reports the dominant mood with a confidence and the
//! share of every mood.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::mood::{Mood, MoodClassifier};

const INTENSIFIERS: [&str; 5] = ["very", "really", "extremely", "so", "super"];
const INTENSITY_BONUS: usize = 2;

/// Confidence reported for text without any mood keyword
const NO_SIGNAL_CONFIDENCE: f32 = 0.5;

/// Result of a scored analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodAnalysis {
    pub mood: Mood,
    /// Share of the dominant mood in the total score, rounded to two decimals
    pub confidence: f32,
    /// Share of every mood in the total score
    pub emotions: BTreeMap<Mood, f32>,
    /// False when no keyword matched and the neutral default was reported
    pub matched: bool,
}

#[derive(Default)]
pub struct MoodAnalyzer {
    classifier: MoodClassifier,
}

impl MoodAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score a text. Ties go to the mood whose classifier rule comes first.
    pub fn analyze(&self, text: &str) -> MoodAnalysis {
        let mut scores = self.classifier.keyword_hits(text);

        let words: Vec<String> = text
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
            .collect();
        for pair in words.windows(2) {
            if !INTENSIFIERS.contains(&pair[0].as_str()) {
                continue;
            }
            let boosted = self.classifier.keyword_hits(&pair[1]);
            for ((_, score), (_, hits)) in scores.iter_mut().zip(boosted) {
                if hits > 0 {
                    *score += INTENSITY_BONUS;
                }
            }
        }

        let total: usize = scores.iter().map(|(_, score)| score).sum();
        if total == 0 {
            return Self::no_signal();
        }

        let (mood, best) = scores
            .iter()
            .copied()
            .fold((Mood::Neutral, 0), |best, (mood, score)| if score > best.1 { (mood, score) } else { best });
        let emotions = scores
            .iter()
            .map(|&(mood, score)| (mood, score as f32 / total as f32))
            .collect();

        MoodAnalysis {
            mood,
            confidence: round2(best as f32 / total as f32),
            emotions,
            matched: true,
        }
    }

    fn no_signal() -> MoodAnalysis {
        let others = (1.0 - NO_SIGNAL_CONFIDENCE) / (Mood::ALL.len() - 1) as f32;
        let emotions = Mood::ALL
            .iter()
            .map(|&mood| {
                let share = if mood == Mood::Neutral { NO_SIGNAL_CONFIDENCE } else { others };
                (mood, share)
            })
            .collect();

        MoodAnalysis {
            mood: Mood::Neutral,
            confidence: NO_SIGNAL_CONFIDENCE,
            emotions,
            matched: false,
        }
    }
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share_sum(analysis: &MoodAnalysis) -> f32 {
        analysis.emotions.values().sum()
    }

    #[test]
    fn test_intensifier_outweighs_rule_order() {
        let analysis = MoodAnalyzer::new().analyze("I am very sad and a bit lonely");

        // The classifier alone would say lonely
        assert_eq!(MoodClassifier::new().classify("I am very sad and a bit lonely"), Some(Mood::Lonely));
        assert_eq!(analysis.mood, Mood::Sad);
        assert_eq!(analysis.confidence, 0.75);
        assert_eq!(analysis.emotions[&Mood::Lonely], 0.25);
        assert!(analysis.matched);
        assert!((share_sum(&analysis) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_single_mood_is_certain() {
        let analysis = MoodAnalyzer::new().analyze("Really happy, really happy!");
        assert_eq!(analysis.mood, Mood::Happy);
        assert_eq!(analysis.confidence, 1.0);
        assert_eq!(analysis.emotions[&Mood::Sad], 0.0);
    }

    #[test]
    fn test_tie_goes_to_earlier_rule() {
        let analysis = MoodAnalyzer::new().analyze("sad and angry");
        assert_eq!(analysis.mood, Mood::Angry);
        assert_eq!(analysis.confidence, 0.5);
    }

    #[test]
    fn test_no_keywords_reports_neutral() {
        let analysis = MoodAnalyzer::new().analyze("the train was late");
        assert_eq!(analysis.mood, Mood::Neutral);
        assert_eq!(analysis.confidence, 0.5);
        assert!(!analysis.matched);
        assert_eq!(analysis.emotions.len(), Mood::ALL.len());
        assert!((share_sum(&analysis) - 1.0).abs() < 1e-5);
    }
}
