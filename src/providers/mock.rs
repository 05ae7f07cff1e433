/*!
 * Mock provider implementation for testing.
 *
 * - `MockProvider::detecting(lang)` - Detects `lang` and prefixes translations
 *   with the target language
 * - `MockProvider::failing()` - Always fails with an error
 * - `MockProvider::empty(lang)` - Detects `lang` but translates to nothing
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Behavior mode for the mock provider
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Detects the given candidates and translates to `[target] text`
    Working { detections: Vec<String> },
    /// Detects the given candidates but returns an empty translation
    Empty { detections: Vec<String> },
    /// Always fails with an error
    Failing,
}

/// Mock provider for testing translation behavior.
/// Clones share their call counters.
#[derive(Debug, Clone)]
pub struct MockProvider {
    behavior: MockBehavior,
    detect_count: Arc<AtomicUsize>,
    translate_count: Arc<AtomicUsize>,
    targets: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            detect_count: Arc::new(AtomicUsize::new(0)),
            translate_count: Arc::new(AtomicUsize::new(0)),
            targets: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a working mock provider that detects `language`
    pub fn detecting(language: &str) -> Self {
        Self::new(MockBehavior::Working { detections: vec![language.to_string()] })
    }

    /// Create a working mock provider whose detection finds nothing
    pub fn undetected() -> Self {
        Self::new(MockBehavior::Working { detections: Vec::new() })
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that returns empty translations
    pub fn empty(language: &str) -> Self {
        Self::new(MockBehavior::Empty { detections: vec![language.to_string()] })
    }

    pub fn detect_calls(&self) -> usize {
        self.detect_count.load(Ordering::SeqCst)
    }

    pub fn translate_calls(&self) -> usize {
        self.translate_count.load(Ordering::SeqCst)
    }

    /// Target languages requested so far, in call order
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().clone()
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn detect_language(&self, _text: &str) -> Result<Vec<String>, ProviderError> {
        self.detect_count.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Working { detections } | MockBehavior::Empty { detections } => {
                Ok(detections.clone())
            }
            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),
        }
    }

    async fn translate(&self, text: &str, target_language: &str) -> Result<String, ProviderError> {
        self.translate_count.fetch_add(1, Ordering::SeqCst);
        self.targets.lock().push(target_language.to_string());

        match &self.behavior {
            MockBehavior::Working { .. } => Ok(format!("[{}] {}", target_language, text)),
            MockBehavior::Empty { .. } => Ok(String::new()),
            MockBehavior::Failing => Err(ProviderError::RateLimitExceeded(
                "Simulated quota exhaustion".to_string(),
            )),
        }
    }
}
