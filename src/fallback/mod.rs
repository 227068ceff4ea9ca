//! Generative-model fallback classifier.
//!
//! Asks a [`TextGenerator`] to pick exactly one label from the closed mood
//! set. One attempt, bounded by a timeout. Every failure comes back as a
//! [`FallbackError`] and is logged here; deciding what to do about it is the
//! caller's business.

use std::sync::Arc;
use std::time::Duration;

use crate::llms::base_llm::TextGenerator;
use crate::mood::Mood;
use crate::utilities::config::DEFAULT_FALLBACK_TIMEOUT;
use crate::utilities::errors::FallbackError;

/// Render the constrained classification prompt for `text`.
pub fn classification_prompt(text: &str) -> String {
    format!(
        "Analyze the following text and determine the primary mood expressed.\n\
         Consider the context and emotional tone carefully.\n\
         Choose EXACTLY ONE mood from: {labels}.\n\
         Only respond with the mood word, nothing else.\n\
         \n\
         Text: {text}",
        labels = Mood::label_list(),
        text = text,
    )
}

/// Parse a generator reply into a mood.
///
/// The reply is trimmed and lowercased; anything other than a bare label is
/// rejected.
pub fn parse_label(reply: &str) -> Result<Mood, FallbackError> {
    reply
        .parse::<Mood>()
        .map_err(|_| FallbackError::InvalidLabel(reply.trim().to_string()))
}

/// Secondary classifier backed by a generative model.
#[derive(Debug, Clone)]
pub struct FallbackClassifier {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl FallbackClassifier {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            timeout: DEFAULT_FALLBACK_TIMEOUT,
        }
    }

    /// Set the upper bound on a single classification call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn generator(&self) -> &Arc<dyn TextGenerator> {
        &self.generator
    }

    /// Classify `text` with the generator.
    pub async fn classify(&self, text: &str) -> Result<Mood, FallbackError> {
        let prompt = classification_prompt(text);
        let outcome = match tokio::time::timeout(self.timeout, self.generator.generate(&prompt)).await {
            Ok(Ok(reply)) => parse_label(&reply),
            Ok(Err(e)) => Err(FallbackError::from(e)),
            Err(_) => Err(FallbackError::Timeout(self.timeout)),
        };

        match &outcome {
            Ok(mood) => log::debug!(
                "fallback classification via {}/{}: {}",
                self.generator.provider(),
                self.generator.model(),
                mood
            ),
            Err(e) => log::warn!(
                "fallback classification via {}/{} failed: {}",
                self.generator.provider(),
                self.generator.model(),
                e
            ),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::errors::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug)]
    struct Scripted {
        reply: Result<&'static str, &'static str>,
        prompts: Mutex<Vec<String>>,
    }

    impl Scripted {
        fn new(reply: Result<&'static str, &'static str>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for Scripted {
        fn model(&self) -> &str {
            "scripted"
        }

        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply
                .map(str::to_string)
                .map_err(|e| LlmError::Api(e.to_string()))
        }
    }

    #[derive(Debug)]
    struct Stalled;

    #[async_trait]
    impl TextGenerator for Stalled {
        fn model(&self) -> &str {
            "stalled"
        }

        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok("happy".to_string())
        }
    }

    #[test]
    fn test_prompt_lists_every_label_and_the_text() {
        let prompt = classification_prompt("I miss the old days");
        for mood in Mood::ALL {
            assert!(prompt.contains(mood.as_str()));
        }
        assert!(prompt.contains("EXACTLY ONE"));
        assert!(prompt.ends_with("Text: I miss the old days"));
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(parse_label("Romantic\n").unwrap(), Mood::Romantic);
        assert_eq!(parse_label("  SAD ").unwrap(), Mood::Sad);
        assert!(matches!(
            parse_label("The mood is happy."),
            Err(FallbackError::InvalidLabel(_))
        ));
        assert!(matches!(parse_label("angry"), Err(FallbackError::InvalidLabel(s)) if s == "angry"));
    }

    #[tokio::test]
    async fn test_classify_sends_prompt_and_parses_reply() {
        let generator = Scripted::new(Ok("Nostalgic"));
        let fallback = FallbackClassifier::new(generator.clone());

        assert_eq!(fallback.classify("those were the days").await.unwrap(), Mood::Nostalgic);
        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("those were the days"));
    }

    #[tokio::test]
    async fn test_classify_reports_generator_failure() {
        let fallback = FallbackClassifier::new(Scripted::new(Err("quota exceeded")));
        assert!(matches!(
            fallback.classify("hello").await,
            Err(FallbackError::Unavailable(LlmError::Api(_)))
        ));
    }

    #[tokio::test]
    async fn test_classify_rejects_label_outside_set() {
        let fallback = FallbackClassifier::new(Scripted::new(Ok("melancholy")));
        assert!(matches!(
            fallback.classify("hello").await,
            Err(FallbackError::InvalidLabel(_))
        ));
    }

    #[tokio::test]
    async fn test_classify_times_out() {
        let fallback =
            FallbackClassifier::new(Arc::new(Stalled)).with_timeout(Duration::from_millis(20));
        assert_eq!(fallback.timeout(), Duration::from_millis(20));
        assert!(matches!(
            fallback.classify("hello").await,
            Err(FallbackError::Timeout(_))
        ));
    }
}
