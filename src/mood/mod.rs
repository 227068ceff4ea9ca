//! The closed set of mood labels.
//!
//! Every classification path (keyword scoring, the generative fallback and the
//! genre catalog) speaks in terms of [`Mood`]. A typo in a label is a parse
//! error, never a new mood.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utilities::errors::UnknownMood;

/// A mood label.
///
/// Declaration order is significant: it is the order profiles appear in the
/// standard lexicon and therefore the tie-break order of the keyword scorer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Anxious,
    Excited,
    Relaxed,
    Nostalgic,
    Romantic,
    #[default]
    Neutral,
}

impl Mood {
    /// All moods in declared order.
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Anxious,
        Mood::Excited,
        Mood::Relaxed,
        Mood::Nostalgic,
        Mood::Romantic,
        Mood::Neutral,
    ];

    /// Lowercase label, as used on the wire and in prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Excited => "excited",
            Mood::Relaxed => "relaxed",
            Mood::Nostalgic => "nostalgic",
            Mood::Romantic => "romantic",
            Mood::Neutral => "neutral",
        }
    }

    /// Comma-separated list of every label, for prompt construction.
    pub fn label_list() -> String {
        Mood::ALL
            .iter()
            .map(Mood::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Mood::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == normalized)
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}
