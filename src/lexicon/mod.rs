//! Per-mood keyword, phrase and exclusion tables.
//!
//! A [`Lexicon`] is built once at startup and only read afterwards, so a
//! single instance can be shared by any number of concurrent classifiers.
//! [`Lexicon::standard`] is the built-in table; operators can supply their own
//! as JSON through [`Lexicon::load`].
//!
//! ```json
//! [
//!   { "mood": "happy", "weight": 1.2, "keywords": ["joy", "great"], "exclude": ["sad"] },
//!   ...
//! ]
//! ```

mod profiles;

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::mood::Mood;
use crate::utilities::errors::LexiconError;
use crate::utilities::string_utils::WINDOW_WIDTH;

static STANDARD: Lazy<Lexicon> = Lazy::new(|| {
    let profiles = profiles::STANDARD_PROFILES
        .iter()
        .map(|(mood, weight, terms, exclude)| {
            MoodProfile::new(*mood, *weight, terms.iter().copied(), exclude.iter().copied())
        })
        .collect();
    Lexicon::new(profiles).expect("standard lexicon is valid")
});

// ---------------------------------------------------------------------------
// MoodProfile
// ---------------------------------------------------------------------------

/// Evidence for and against one mood.
#[derive(Debug, Clone)]
pub struct MoodProfile {
    mood: Mood,
    /// Single-word terms, matched exactly against tokens.
    keywords: BTreeSet<String>,
    /// Multi-word terms.
    phrases: BTreeSet<String>,
    /// Tokens that count against this mood.
    exclude: BTreeSet<String>,
    weight: f64,
    /// Terms short enough to appear inside a single character window.
    fragment_terms: Vec<String>,
}

impl MoodProfile {
    /// Build a profile. Terms are trimmed and lowercased; a term containing
    /// whitespace is a phrase, anything else a keyword.
    pub fn new<T, E>(mood: Mood, weight: f64, terms: T, exclude: E) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let mut keywords = BTreeSet::new();
        let mut phrases = BTreeSet::new();
        for term in terms {
            let term = normalize_term(term.as_ref());
            if term.chars().any(char::is_whitespace) {
                phrases.insert(term);
            } else {
                keywords.insert(term);
            }
        }
        let exclude: BTreeSet<String> = exclude
            .into_iter()
            .map(|t| normalize_term(t.as_ref()))
            .collect();

        let fragment_terms = keywords
            .iter()
            .chain(phrases.iter())
            .filter(|t| t.chars().count() <= WINDOW_WIDTH)
            .cloned()
            .collect();

        Self {
            mood,
            keywords,
            phrases,
            exclude,
            weight,
            fragment_terms,
        }
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn keywords(&self) -> &BTreeSet<String> {
        &self.keywords
    }

    pub fn phrases(&self) -> &BTreeSet<String> {
        &self.phrases
    }

    pub fn exclude(&self) -> &BTreeSet<String> {
        &self.exclude
    }

    /// Whether a token is one of this mood's keywords.
    pub fn is_keyword(&self, token: &str) -> bool {
        self.keywords.contains(token)
    }

    /// Whether a token counts against this mood.
    pub fn is_excluded(&self, token: &str) -> bool {
        self.exclude.contains(token)
    }

    /// Whether any keyword or phrase occurs as a substring of `window`.
    ///
    /// Windows are [`WINDOW_WIDTH`] characters wide, so only terms that short
    /// can ever match; longer terms are skipped up front.
    pub fn matches_fragment(&self, window: &str) -> bool {
        self.fragment_terms.iter().any(|t| window.contains(t.as_str()))
    }

    fn validate(&self) -> Result<(), LexiconError> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(LexiconError::InvalidWeight {
                mood: self.mood,
                weight: self.weight,
            });
        }
        let all_terms = || {
            self.keywords
                .iter()
                .chain(self.phrases.iter())
                .chain(self.exclude.iter())
        };
        if all_terms().any(|t| t.is_empty()) {
            return Err(LexiconError::EmptyTerm(self.mood));
        }
        if let Some(term) = self
            .exclude
            .iter()
            .find(|t| self.keywords.contains(*t) || self.phrases.contains(*t))
        {
            return Err(LexiconError::ExcludeOverlap {
                mood: self.mood,
                term: term.clone(),
            });
        }
        Ok(())
    }
}

fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// Lexicon
// ---------------------------------------------------------------------------

/// The complete, validated set of mood profiles.
///
/// Profile order is the declared order and decides ties during scoring.
#[derive(Debug, Clone)]
pub struct Lexicon {
    profiles: Vec<MoodProfile>,
}

/// On-disk form of a profile.
#[derive(Debug, Deserialize)]
struct ProfileConfig {
    mood: Mood,
    weight: f64,
    keywords: Vec<String>,
    #[serde(default)]
    exclude: Vec<String>,
}

impl Lexicon {
    /// Validate and assemble a lexicon.
    ///
    /// Every mood must appear exactly once, weights must be positive, and no
    /// profile may exclude one of its own terms.
    pub fn new(profiles: Vec<MoodProfile>) -> Result<Self, LexiconError> {
        let mut seen = HashSet::new();
        for profile in &profiles {
            if !seen.insert(profile.mood) {
                return Err(LexiconError::DuplicateMood(profile.mood));
            }
            profile.validate()?;
        }
        if let Some(missing) = Mood::ALL.iter().find(|m| !seen.contains(*m)) {
            return Err(LexiconError::MissingMood(*missing));
        }
        Ok(Self { profiles })
    }

    /// The built-in lexicon.
    pub fn standard() -> &'static Lexicon {
        &STANDARD
    }

    /// Parse a lexicon from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
        let configs: Vec<ProfileConfig> = serde_json::from_str(json)?;
        let profiles = configs
            .into_iter()
            .map(|c| MoodProfile::new(c.mood, c.weight, c.keywords, c.exclude))
            .collect();
        Self::new(profiles)
    }

    /// Read a lexicon JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_json_str(&json)?;
        log::debug!("Loaded lexicon from {}", path.display());
        Ok(lexicon)
    }

    /// Profiles in declared order.
    pub fn profiles(&self) -> &[MoodProfile] {
        &self.profiles
    }

    /// Profile for a mood. Always present in a validated lexicon.
    pub fn profile(&self, mood: Mood) -> Option<&MoodProfile> {
        self.profiles.iter().find(|p| p.mood == mood)
    }

    /// Moods in declared order.
    pub fn moods(&self) -> impl Iterator<Item = Mood> + '_ {
        self.profiles.iter().map(|p| p.mood)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_profiles() -> Vec<MoodProfile> {
        Mood::ALL
            .iter()
            .map(|m| MoodProfile::new(*m, 1.0, [m.as_str()], Vec::<&str>::new()))
            .collect()
    }

    #[test]
    fn test_standard_lexicon_is_valid_and_ordered() {
        let lexicon = Lexicon::standard();
        let moods: Vec<Mood> = lexicon.moods().collect();
        assert_eq!(moods, Mood::ALL.to_vec());
    }

    #[test]
    fn test_standard_weights() {
        let lexicon = Lexicon::standard();
        let weight = |m| lexicon.profile(m).unwrap().weight();
        assert_eq!(weight(Mood::Happy), 1.2);
        assert_eq!(weight(Mood::Anxious), 1.6);
        assert_eq!(weight(Mood::Excited), 1.5);
        assert_eq!(weight(Mood::Neutral), 1.0);
    }

    #[test]
    fn test_multi_word_terms_become_phrases() {
        let excited = Lexicon::standard().profile(Mood::Excited).unwrap();
        assert!(excited.phrases().contains("can't wait"));
        assert!(excited.phrases().contains("pumped up"));
        assert!(excited.is_keyword("pumped"));
        assert!(!excited.is_keyword("pumped up"));
    }

    #[test]
    fn test_no_profile_excludes_its_own_terms() {
        for profile in Lexicon::standard().profiles() {
            for term in profile.exclude() {
                assert!(!profile.keywords().contains(term), "{}: {}", profile.mood(), term);
                assert!(!profile.phrases().contains(term), "{}: {}", profile.mood(), term);
            }
        }
    }

    #[test]
    fn test_fragment_matching_only_sees_short_terms() {
        let happy = Lexicon::standard().profile(Mood::Happy).unwrap();
        assert!(happy.matches_fragment("joy"));
        assert!(!happy.matches_fragment("gre"));

        let sad = Lexicon::standard().profile(Mood::Sad).unwrap();
        assert!(sad.matches_fragment("sad"));
        assert!(!sad.matches_fragment("dow"));
    }

    #[test]
    fn test_terms_are_normalized() {
        let profile = MoodProfile::new(Mood::Happy, 1.0, ["  Joy ", "Good Vibes"], ["SAD"]);
        assert!(profile.is_keyword("joy"));
        assert!(profile.phrases().contains("good vibes"));
        assert!(profile.is_excluded("sad"));
    }

    #[test]
    fn test_rejects_duplicate_mood() {
        let mut profiles = minimal_profiles();
        profiles.push(MoodProfile::new(Mood::Sad, 1.0, ["blue"], Vec::<&str>::new()));
        assert!(matches!(
            Lexicon::new(profiles),
            Err(LexiconError::DuplicateMood(Mood::Sad))
        ));
    }

    #[test]
    fn test_rejects_missing_mood() {
        let profiles: Vec<MoodProfile> = minimal_profiles()
            .into_iter()
            .filter(|p| p.mood() != Mood::Romantic)
            .collect();
        assert!(matches!(
            Lexicon::new(profiles),
            Err(LexiconError::MissingMood(Mood::Romantic))
        ));
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        let mut profiles = minimal_profiles();
        profiles[0] = MoodProfile::new(Mood::Happy, 0.0, ["joy"], Vec::<&str>::new());
        assert!(matches!(
            Lexicon::new(profiles),
            Err(LexiconError::InvalidWeight { mood: Mood::Happy, .. })
        ));

        let mut profiles = minimal_profiles();
        profiles[1] = MoodProfile::new(Mood::Sad, f64::NAN, ["blue"], Vec::<&str>::new());
        assert!(Lexicon::new(profiles).is_err());
    }

    #[test]
    fn test_rejects_exclude_overlap() {
        let mut profiles = minimal_profiles();
        profiles[0] = MoodProfile::new(Mood::Happy, 1.0, ["joy", "great"], ["Great"]);
        match Lexicon::new(profiles) {
            Err(LexiconError::ExcludeOverlap { mood, term }) => {
                assert_eq!(mood, Mood::Happy);
                assert_eq!(term, "great");
            }
            other => panic!("expected overlap error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_empty_term() {
        let mut profiles = minimal_profiles();
        profiles[2] = MoodProfile::new(Mood::Anxious, 1.0, ["tense", "  "], Vec::<&str>::new());
        assert!(matches!(
            Lexicon::new(profiles),
            Err(LexiconError::EmptyTerm(Mood::Anxious))
        ));
    }

    #[test]
    fn test_from_json_str() {
        let json = serde_json::to_string(
            &Mood::ALL
                .iter()
                .map(|m| {
                    serde_json::json!({
                        "mood": m.as_str(),
                        "weight": 2.0,
                        "keywords": [format!("{}ish", m.as_str())],
                    })
                })
                .collect::<Vec<_>>(),
        )
        .unwrap();

        let lexicon = Lexicon::from_json_str(&json).unwrap();
        let sad = lexicon.profile(Mood::Sad).unwrap();
        assert!(sad.is_keyword("sadish"));
        assert!(sad.exclude().is_empty());
        assert_eq!(sad.weight(), 2.0);
    }

    #[test]
    fn test_from_json_rejects_unknown_mood() {
        let json = r#"[{"mood": "angry", "weight": 1.0, "keywords": ["mad"]}]"#;
        assert!(matches!(
            Lexicon::from_json_str(json),
            Err(LexiconError::Json(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let profiles: Vec<_> = Mood::ALL
            .iter()
            .map(|m| {
                let keywords = match m {
                    Mood::Sad => vec!["gloomy".to_string(), "down in the dumps".to_string()],
                    _ => vec![format!("{}ish", m.as_str())],
                };
                serde_json::json!({ "mood": m.as_str(), "weight": 1.0, "keywords": keywords })
            })
            .collect();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::Value::from(profiles)).unwrap();

        let lexicon = Lexicon::load(file.path()).unwrap();
        assert_eq!(lexicon.moods().collect::<Vec<_>>(), Mood::ALL.to_vec());
        let sad = lexicon.profile(Mood::Sad).unwrap();
        assert!(sad.is_keyword("gloomy"));
        assert!(sad.phrases().contains("down in the dumps"));

        let result = crate::scoring::KeywordScorer::new(&lexicon).classify("So gloomy today");
        assert_eq!(result.mood, Mood::Sad);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Lexicon::load("/nonexistent/lexicon.json").unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
    }
}
