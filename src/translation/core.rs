/*!
 * Core translation functionality.
 *
 * The `Translator` wraps a translation provider: it detects the language of
 * a text, picks the configured language the text is not already in and asks
 * the provider for a translation into it.
 */

use log::debug;
use std::sync::Arc;

use crate::app_config::ForeignLanguagePolicy;
use crate::errors::TranslationError;
use crate::language_utils::language_codes_match;
use crate::providers::Provider;
use super::LanguagePair;

/// Detects and translates text between the two configured languages
#[derive(Debug, Clone)]
pub struct Translator {
    provider: Arc<dyn Provider>,
    languages: LanguagePair,
    foreign_language_policy: ForeignLanguagePolicy,
}

impl Translator {
    /// Create a translator with the default foreign language policy
    pub fn new(provider: Arc<dyn Provider>, languages: LanguagePair) -> Self {
        Self {
            provider,
            languages,
            foreign_language_policy: ForeignLanguagePolicy::default(),
        }
    }

    /// Set what happens to text in neither configured language
    pub fn with_foreign_language_policy(mut self, policy: ForeignLanguagePolicy) -> Self {
        self.foreign_language_policy = policy;
        self
    }

    /// Pick the target language from the provider's detection candidates.
    ///
    /// Only the first candidate counts. Text in the first language goes to
    /// the second, anything else goes to the first, unless the candidate is
    /// a third language and the policy is `Skip`, which yields `None`.
    pub fn choose_target(&self, detections: &[String]) -> Option<&str> {
        let Some(detected) = detections.first() else {
            return Some(&self.languages.first);
        };

        if language_codes_match(detected, &self.languages.first) {
            return Some(&self.languages.second);
        }

        if self.foreign_language_policy == ForeignLanguagePolicy::Skip
            && !language_codes_match(detected, &self.languages.second)
        {
            return None;
        }

        Some(&self.languages.first)
    }

    /// Translate `text` into the configured language it is not written in.
    ///
    /// Returns an empty string without contacting the provider when `text`
    /// is empty, and an empty string when the policy skips the detected
    /// language. An empty string therefore always means "nothing to append".
    pub async fn translate(&self, text: &str) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            debug!("empty text for translation");
            return Ok(String::new());
        }

        let detections = self.provider.detect_language(text).await?;
        let Some(target) = self.choose_target(&detections) else {
            debug!(
                "Detected language {:?} is neither {}, skipping",
                detections.first(),
                self.languages
            );
            return Ok(String::new());
        };
        debug!("Detected {:?}, translating into {}", detections.first(), target);

        let translated = self.provider.translate(text, target).await?;
        if translated.trim().is_empty() {
            return Err(TranslationError::EmptyTranslation {
                target_language: target.to_string(),
            });
        }

        Ok(translated)
    }
}
