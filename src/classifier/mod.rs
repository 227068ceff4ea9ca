//! Hybrid mood classification.
//!
//! The keyword scorer always runs first. Its answer stands when confidence is
//! at least [`FALLBACK_THRESHOLD`]; otherwise the fallback classifier is
//! consulted, and its answer replaces the local one only when the two
//! disagree and local confidence is below [`OVERRIDE_THRESHOLD`]. A failed
//! fallback call answers `neutral` and goes through the same rule. A missing
//! fallback leaves the local answer in place, so classification is always
//! available and never fails.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::fallback::FallbackClassifier;
use crate::mood::Mood;
use crate::scoring::{ClassificationResult, KeywordScorer};

/// Local confidence at or above which the fallback is skipped.
pub const FALLBACK_THRESHOLD: f64 = 0.4;

/// Local confidence below which a disagreeing fallback wins.
pub const OVERRIDE_THRESHOLD: f64 = 0.3;

/// How a decision was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecisionPath {
    /// Local confidence was high enough; no fallback call.
    Local,
    /// Low confidence but no fallback configured.
    NoFallback,
    /// Fallback answered; the local label was kept.
    LocalConfirmed { remote: Mood },
    /// Fallback answered and its label was used.
    Fallback { remote: Mood },
    /// Fallback failed and answered `remote` (always `neutral`) in its place.
    FallbackUnavailable { remote: Mood, reason: String },
}

/// Outcome of one classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodDecision {
    /// Final label.
    pub mood: Mood,
    /// What the keyword scorer said.
    pub local: ClassificationResult,
    pub path: DecisionPath,
}

/// A text-to-mood classifier. Implementations never fail: every input maps
/// to some mood, `neutral` when nothing better is known.
#[async_trait]
pub trait MoodClassifier: Send + Sync {
    /// Classify and report how the decision was reached.
    async fn classify(&self, text: &str) -> MoodDecision;

    /// Just the label.
    async fn detect_mood(&self, text: &str) -> Mood {
        self.classify(text).await.mood
    }

    /// Whether a fallback classifier is configured.
    fn has_fallback(&self) -> bool {
        false
    }
}

/// Keyword scorer plus optional generative fallback.
#[derive(Debug, Clone)]
pub struct HybridMoodClassifier<'a> {
    scorer: KeywordScorer<'a>,
    fallback: Option<FallbackClassifier>,
}

impl HybridMoodClassifier<'static> {
    /// Standard lexicon, no fallback.
    pub fn keyword_only() -> Self {
        Self::new(KeywordScorer::standard(), None)
    }
}

impl<'a> HybridMoodClassifier<'a> {
    pub fn new(scorer: KeywordScorer<'a>, fallback: Option<FallbackClassifier>) -> Self {
        Self { scorer, fallback }
    }

    pub fn scorer(&self) -> &KeywordScorer<'a> {
        &self.scorer
    }

    pub fn fallback(&self) -> Option<&FallbackClassifier> {
        self.fallback.as_ref()
    }

    async fn decide(&self, text: &str) -> MoodDecision {
        let local = self.scorer.classify(text);

        if local.confidence >= FALLBACK_THRESHOLD {
            return MoodDecision {
                mood: local.mood,
                local,
                path: DecisionPath::Local,
            };
        }

        let Some(fallback) = &self.fallback else {
            return MoodDecision {
                mood: local.mood,
                local,
                path: DecisionPath::NoFallback,
            };
        };

        let (remote, failure) = match fallback.classify(text).await {
            Ok(remote) => (remote, None),
            Err(e) => (Mood::Neutral, Some(e.to_string())),
        };
        let overridden = remote != local.mood && local.confidence < OVERRIDE_THRESHOLD;
        if overridden {
            log::debug!(
                "fallback overrides local {} ({:.3}) with {}",
                local.mood,
                local.confidence,
                remote
            );
        }

        let path = match failure {
            Some(reason) => DecisionPath::FallbackUnavailable { remote, reason },
            None if overridden => DecisionPath::Fallback { remote },
            None => DecisionPath::LocalConfirmed { remote },
        };
        MoodDecision {
            mood: if overridden { remote } else { local.mood },
            local,
            path,
        }
    }
}

#[async_trait]
impl<'a> MoodClassifier for HybridMoodClassifier<'a> {
    async fn classify(&self, text: &str) -> MoodDecision {
        self.decide(text).await
    }

    fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}
