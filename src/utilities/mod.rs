//! Shared utilities: configuration, error types and text helpers.

pub mod config;
pub mod errors;
pub mod string_utils;

pub use config::AppConfig;
pub use errors::{ConfigError, FallbackError, LexiconError, LlmError, UnknownMood};
