//! Mood to music-genre lookup.
//!
//! The mapping is read once at startup. A missing or malformed mapping file is
//! not an error: the catalog starts empty and every lookup answers with
//! [`DEFAULT_GENRES`].

use std::collections::HashMap;
use std::path::Path;

use crate::mood::Mood;

/// Genres returned for unknown moods.
pub const DEFAULT_GENRES: &[&str] = &["pop"];

const BUNDLED_GENRES: &str = include_str!("mood_genres.json");

/// Genre suggestions for a mood.
pub trait GenreCatalog: Send + Sync {
    /// Genres for a mood label. Lookup is case-insensitive; unknown labels
    /// get [`DEFAULT_GENRES`].
    fn genres_for_mood(&self, mood: &str) -> Vec<String>;

    /// Genres for a known mood.
    fn genres_for(&self, mood: Mood) -> Vec<String> {
        self.genres_for_mood(mood.as_str())
    }
}

/// Catalog backed by a JSON object of `label -> [genre, ...]`.
#[derive(Debug, Clone, Default)]
pub struct JsonGenreCatalog {
    mapping: HashMap<String, Vec<String>>,
}

impl JsonGenreCatalog {
    /// The mapping bundled with the crate.
    pub fn builtin() -> Self {
        Self::from_json_str(BUNDLED_GENRES).unwrap_or_default()
    }

    /// Parse a mapping. Keys are lowercased.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mapping = raw
            .into_iter()
            .map(|(mood, genres)| (mood.trim().to_lowercase(), genres))
            .collect();
        Ok(Self { mapping })
    }

    /// Load a mapping file, falling back to an empty catalog on any error.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Error loading mood genres from {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_json_str(&json) {
            Ok(catalog) => {
                log::debug!(
                    "Loaded genres for {} moods from {}",
                    catalog.len(),
                    path.display()
                );
                catalog
            }
            Err(e) => {
                log::warn!("Error parsing mood genres in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Number of moods with an entry.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

impl GenreCatalog for JsonGenreCatalog {
    fn genres_for_mood(&self, mood: &str) -> Vec<String> {
        self.mapping
            .get(&mood.trim().to_lowercase())
            .cloned()
            .unwrap_or_else(|| DEFAULT_GENRES.iter().map(|g| g.to_string()).collect())
    }
}
