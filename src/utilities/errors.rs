//! Error types for the mood classifier.
//!
//! None of these reach the caller of a classification: the classifier
//! resolves every failure to a valid mood label. They surface only at
//! startup (configuration, lexicon loading) and in logs.

use std::path::PathBuf;

use thiserror::Error;

use crate::mood::Mood;

/// A label outside the closed mood set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown mood label: {0:?}")]
pub struct UnknownMood(pub String);

/// Errors in a lexicon definition.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The same mood has more than one profile.
    #[error("Mood '{0}' is declared more than once")]
    DuplicateMood(Mood),

    /// A mood has no profile.
    #[error("Mood '{0}' has no profile")]
    MissingMood(Mood),

    /// Weight must be a finite positive number.
    #[error("Mood '{mood}' has invalid weight {weight}")]
    InvalidWeight { mood: Mood, weight: f64 },

    /// Empty keyword or exclude term.
    #[error("Mood '{0}' contains an empty term")]
    EmptyTerm(Mood),

    /// A term is both evidence for and against the same mood.
    #[error("Mood '{mood}' lists '{term}' as both a keyword and an exclude term")]
    ExcludeOverlap { mood: Mood, term: String },

    /// Lexicon file could not be read.
    #[error("Failed to read lexicon {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Lexicon JSON was malformed.
    #[error("Invalid lexicon JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from a text-generation backend.
#[derive(Debug, Error)]
pub enum LlmError {
    /// No credentials configured.
    #[error("API key not set. Set GOOGLE_API_KEY or GEMINI_API_KEY environment variable.")]
    MissingApiKey,

    /// Request could not be sent or the body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status.
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The service reported an error inside a 2xx body.
    #[error("API error: {0}")]
    Api(String),

    /// The response body did not have the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Reasons the fallback classifier could not produce a mood.
#[derive(Debug, Error)]
pub enum FallbackError {
    /// The generator failed.
    #[error("Fallback unavailable: {0}")]
    Unavailable(#[from] LlmError),

    /// The generator did not answer in time.
    #[error("Fallback timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// The generator answered with something outside the label set.
    #[error("Fallback returned invalid label {0:?}")]
    InvalidLabel(String),
}

/// Errors while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    /// A variable required by another setting is unset.
    #[error("{key} must be set when {required_by} is enabled")]
    MissingValue {
        key: &'static str,
        required_by: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_error_messages() {
        let err = LexiconError::ExcludeOverlap {
            mood: Mood::Happy,
            term: "great".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Mood 'happy' lists 'great' as both a keyword and an exclude term"
        );
        assert_eq!(
            LexiconError::MissingMood(Mood::Neutral).to_string(),
            "Mood 'neutral' has no profile"
        );
    }

    #[test]
    fn test_fallback_error_wraps_llm_error() {
        let err: FallbackError = LlmError::Api("quota exceeded".to_string()).into();
        assert!(matches!(err, FallbackError::Unavailable(LlmError::Api(_))));
        assert_eq!(err.to_string(), "Fallback unavailable: API error: quota exceeded");
    }

    #[test]
    fn test_unknown_mood_message() {
        assert_eq!(
            UnknownMood("angry".to_string()).to_string(),
            "Unknown mood label: \"angry\""
        );
    }
}
