//! # Mood-to-Music
//!
//! Classifies the mood of free-form text and maps it to music-genre
//! suggestions.
//!
//! Classification is hybrid: an explainable keyword scorer answers first, and
//! a generative model is consulted only when the scorer's confidence is low.
//! The model is an injected [`TextGenerator`]; without one the classifier runs
//! in keyword-only mode. Either way every input resolves to one of the eight
//! [`Mood`] labels.
//!
//! ```ignore
//! let classifier = HybridMoodClassifier::keyword_only();
//! let mood = classifier.detect_mood("I feel nostalgic about my childhood").await;
//! let genres = JsonGenreCatalog::builtin().genres_for(mood);
//! ```

pub mod classifier;
pub mod fallback;
pub mod genres;
pub mod lexicon;
pub mod llms;
pub mod mood;
pub mod scoring;
pub mod server;
pub mod utilities;

pub use classifier::{DecisionPath, HybridMoodClassifier, MoodClassifier, MoodDecision};
pub use fallback::FallbackClassifier;
pub use genres::{GenreCatalog, JsonGenreCatalog};
pub use lexicon::{Lexicon, MoodProfile};
pub use llms::{GeminiGenerator, TextGenerator};
pub use mood::Mood;
pub use scoring::{ClassificationResult, KeywordAnalysis, KeywordScorer, Resolution, ScoreResult};
pub use utilities::config::AppConfig;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
