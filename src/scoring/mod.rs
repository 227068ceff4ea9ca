//! Deterministic keyword scoring.
//!
//! For every mood in the lexicon:
//!
//! ```text
//! matches    = exact keyword tokens + 3-character windows containing a term
//! base       = matches * 2.5 - excluded tokens * 3
//! base       = 1 if mood is neutral and base <= 0
//! score      = base * weight
//! ```
//!
//! The winner is the highest score, first in lexicon order on ties, and
//! confidence is its share of the total absolute score mass. Weak or
//! ambiguous signals resolve to neutral with confidence 1.0.
//!
//! Window matching runs over the whole lowercased string, not over tokens, so
//! short terms match inside and across words ("enjoyed" counts for happy).
//! Only terms of at most three characters can ever match a window. The
//! thresholds below assume this behaviour.

use serde::{Deserialize, Serialize};

use crate::lexicon::{Lexicon, MoodProfile};
use crate::mood::Mood;
use crate::utilities::string_utils::{char_windows, is_blank, word_tokens};

/// Points per keyword or window match.
pub const MATCH_POINTS: f64 = 2.5;

/// Points removed per excluded token.
pub const EXCLUDE_PENALTY: f64 = 3.0;

/// Base score neutral is raised to when it has no positive evidence.
pub const NEUTRAL_FLOOR: f64 = 1.0;

/// A winning score below this is noise.
pub const MIN_WINNING_SCORE: f64 = 1.5;

/// Below this confidence the winner needs a strong score to stand.
pub const LOW_CONFIDENCE: f64 = 0.3;

/// A score above this counts as strong evidence.
pub const STRONG_SCORE: f64 = 2.0;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Final score of one mood.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodScore {
    pub mood: Mood,
    pub score: f64,
}

/// Per-mood scores for one input, in lexicon order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub scores: Vec<MoodScore>,
}

impl ScoreResult {
    /// Score of a mood, if the lexicon has it.
    pub fn get(&self, mood: Mood) -> Option<f64> {
        self.scores.iter().find(|s| s.mood == mood).map(|s| s.score)
    }

    /// Highest score, first in order on ties.
    pub fn best(&self) -> Option<MoodScore> {
        self.scores.iter().fold(None, |best: Option<MoodScore>, s| match best {
            Some(b) if b.score >= s.score => Some(b),
            _ => Some(*s),
        })
    }

    /// Sum of absolute scores.
    pub fn total_mass(&self) -> f64 {
        self.scores.iter().map(|s| s.score.abs()).sum()
    }

    fn all_non_positive(&self) -> bool {
        self.scores.iter().all(|s| s.score <= 0.0)
    }

    fn any_strong(&self) -> bool {
        self.scores.iter().any(|s| s.score > STRONG_SCORE)
    }
}

/// A mood with the confidence behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub mood: Mood,
    /// In `[0.0, 1.0]`.
    pub confidence: f64,
}

impl ClassificationResult {
    /// Neutral with full confidence, the default for degenerate input.
    pub fn neutral() -> Self {
        Self {
            mood: Mood::Neutral,
            confidence: 1.0,
        }
    }
}

/// Which rule decided a keyword classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Empty or whitespace-only text; nothing was scored.
    DegenerateInput,
    /// Every mood scored zero or less.
    NoPositiveScore,
    /// The best score was below [`MIN_WINNING_SCORE`].
    WeakSignal,
    /// Confidence below [`LOW_CONFIDENCE`] and no score above [`STRONG_SCORE`].
    LowConfidence,
    /// The top-scoring mood was selected.
    Selected,
}

/// Full outcome of keyword scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    /// `None` for degenerate input.
    pub scores: Option<ScoreResult>,
    pub result: ClassificationResult,
    pub resolution: Resolution,
}

// ---------------------------------------------------------------------------
// KeywordScorer
// ---------------------------------------------------------------------------

/// Scores text against a [`Lexicon`].
///
/// Stateless apart from the borrowed lexicon; cheap to copy and safe to use
/// from many tasks at once.
#[derive(Debug, Clone, Copy)]
pub struct KeywordScorer<'a> {
    lexicon: &'a Lexicon,
}

impl KeywordScorer<'static> {
    /// Scorer over [`Lexicon::standard`].
    pub fn standard() -> Self {
        Self::new(Lexicon::standard())
    }
}

impl Default for KeywordScorer<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> KeywordScorer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Raw per-mood scores. Blank text is scored like any other.
    pub fn score(&self, text: &str) -> ScoreResult {
        let lowered = text.to_lowercase();
        let tokens = word_tokens(&lowered);
        let windows = char_windows(&lowered);

        let scores = self
            .lexicon
            .profiles()
            .iter()
            .map(|profile| MoodScore {
                mood: profile.mood(),
                score: score_profile(profile, &tokens, &windows),
            })
            .collect();

        ScoreResult { scores }
    }

    /// Score text and select a mood, recording which rule decided it.
    pub fn analyze(&self, text: &str) -> KeywordAnalysis {
        if is_blank(text) {
            return KeywordAnalysis {
                scores: None,
                result: ClassificationResult::neutral(),
                resolution: Resolution::DegenerateInput,
            };
        }

        let scores = self.score(text);
        let (result, resolution) = select(&scores);
        log::debug!(
            "keyword scoring: mood={} confidence={:.3} resolution={:?}",
            result.mood,
            result.confidence,
            resolution
        );

        KeywordAnalysis {
            scores: Some(scores),
            result,
            resolution,
        }
    }

    /// Select a mood and confidence for the text.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        self.analyze(text).result
    }
}

fn score_profile(profile: &MoodProfile, tokens: &[&str], windows: &[String]) -> f64 {
    let word_matches = tokens.iter().filter(|t| profile.is_keyword(t)).count();
    let window_matches = windows
        .iter()
        .filter(|w| profile.matches_fragment(w))
        .count();
    let excluded = tokens.iter().filter(|t| profile.is_excluded(t)).count();

    let matches = (word_matches + window_matches) as f64;
    let mut base = matches * MATCH_POINTS - excluded as f64 * EXCLUDE_PENALTY;
    if profile.mood() == Mood::Neutral && base <= 0.0 {
        base = NEUTRAL_FLOOR;
    }
    base * profile.weight()
}

fn select(scores: &ScoreResult) -> (ClassificationResult, Resolution) {
    if scores.all_non_positive() {
        return (ClassificationResult::neutral(), Resolution::NoPositiveScore);
    }
    let best = match scores.best() {
        Some(best) => best,
        None => return (ClassificationResult::neutral(), Resolution::NoPositiveScore),
    };
    if best.score < MIN_WINNING_SCORE {
        return (ClassificationResult::neutral(), Resolution::WeakSignal);
    }

    let total = scores.total_mass();
    let confidence = if total > 0.0 {
        (best.score.abs() / total).clamp(0.0, 1.0)
    } else {
        0.0
    };

    if confidence < LOW_CONFIDENCE && !scores.any_strong() {
        return (ClassificationResult::neutral(), Resolution::LowConfidence);
    }

    (
        ClassificationResult {
            mood: best.mood,
            confidence,
        },
        Resolution::Selected,
    )
}
