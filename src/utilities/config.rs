//! Process configuration read from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `PORT` | `8080` |
//! | `MOOD_BIND_HOST` | `0.0.0.0` |
//! | `GOOGLE_API_KEY` / `GEMINI_API_KEY` | unset (keyword-only mode) |
//! | `MOOD_FALLBACK_ENABLED` | `true` |
//! | `MOOD_FALLBACK_MODEL` | `gemini-2.0-flash` |
//! | `MOOD_FALLBACK_TIMEOUT_SECS` | `10` |
//! | `MOOD_GENRES_PATH` | unset (bundled mapping) |
//! | `MOOD_LEXICON_PATH` | unset (standard lexicon) |
//! | `GOOGLE_GENAI_USE_VERTEXAI` | `false` |
//! | `GOOGLE_CLOUD_PROJECT` | unset (required with Vertex AI) |
//! | `GOOGLE_CLOUD_LOCATION` | `us-central1` |
//!
//! With Vertex AI enabled the key is sent as a bearer token.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::llms::providers::gemini::DEFAULT_LOCATION;
use crate::utilities::errors::ConfigError;

/// Default Gemini model for the fallback classifier.
pub const DEFAULT_FALLBACK_MODEL: &str = "gemini-2.0-flash";

/// Default upper bound on a single fallback call.
pub const DEFAULT_FALLBACK_TIMEOUT: Duration = Duration::from_secs(10);

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Gemini API key. `None` disables the fallback classifier.
    pub api_key: Option<String>,
    pub fallback_enabled: bool,
    pub fallback_model: String,
    pub fallback_timeout: Duration,
    /// Route fallback calls through Vertex AI.
    pub use_vertexai: bool,
    pub vertex_project: Option<String>,
    pub vertex_location: String,
    /// Operator genre mapping; `None` uses the bundled one.
    pub genres_path: Option<PathBuf>,
    /// Operator lexicon; `None` uses the standard one.
    pub lexicon_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            api_key: None,
            fallback_enabled: true,
            fallback_model: DEFAULT_FALLBACK_MODEL.to_string(),
            fallback_timeout: DEFAULT_FALLBACK_TIMEOUT,
            use_vertexai: false,
            vertex_project: None,
            vertex_location: DEFAULT_LOCATION.to_string(),
            genres_path: None,
            lexicon_path: None,
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = parse_var(&get, "PORT")?.unwrap_or(defaults.port);
        let timeout_secs: Option<u64> = parse_var(&get, "MOOD_FALLBACK_TIMEOUT_SECS")?;
        let fallback_enabled =
            parse_flag(&get, "MOOD_FALLBACK_ENABLED")?.unwrap_or(defaults.fallback_enabled);
        let use_vertexai =
            parse_flag(&get, "GOOGLE_GENAI_USE_VERTEXAI")?.unwrap_or(defaults.use_vertexai);
        let vertex_project = get("GOOGLE_CLOUD_PROJECT");
        if use_vertexai && vertex_project.is_none() {
            return Err(ConfigError::MissingValue {
                key: "GOOGLE_CLOUD_PROJECT",
                required_by: "GOOGLE_GENAI_USE_VERTEXAI",
            });
        }

        Ok(Self {
            host: get("MOOD_BIND_HOST").unwrap_or(defaults.host),
            port,
            api_key: get("GOOGLE_API_KEY").or_else(|| get("GEMINI_API_KEY")),
            fallback_enabled,
            fallback_model: get("MOOD_FALLBACK_MODEL").unwrap_or(defaults.fallback_model),
            fallback_timeout: timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.fallback_timeout),
            use_vertexai,
            vertex_project,
            vertex_location: get("GOOGLE_CLOUD_LOCATION").unwrap_or(defaults.vertex_location),
            genres_path: get("MOOD_GENRES_PATH").map(PathBuf::from),
            lexicon_path: get("MOOD_LEXICON_PATH").map(PathBuf::from),
        })
    }

    /// Socket address string for the HTTP server.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether the fallback classifier should be constructed.
    pub fn fallback_active(&self) -> bool {
        self.fallback_enabled && self.api_key.is_some()
    }
}

fn parse_var<T, G>(get: &G, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        None => Ok(None),
    }
}

fn parse_flag<G>(get: &G, key: &'static str) -> Result<Option<bool>, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => parse_bool(&raw)
            .map(Some)
            .ok_or(ConfigError::InvalidValue { key, value: raw }),
        None => Ok(None),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
