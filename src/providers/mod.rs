/*!
 * Provider implementations for different translation services.
 *
 * This module contains client implementations for machine translation APIs:
 * - Google: Google Cloud Translation (v2 basic)
 * - LibreTranslate: self-hosted or public LibreTranslate instance
 * - Mock: in-process provider for tests and dry runs
 */

use anyhow::Result;
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::{TranslationConfig, TranslationProvider};
use crate::errors::ProviderError;

/// Common trait for all translation providers
///
/// This trait defines the interface that all provider implementations must follow,
/// allowing them to be used interchangeably by the translator.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Detect the language of `text`
    ///
    /// # Returns
    /// * Candidate language codes, most likely first. May be empty.
    async fn detect_language(&self, text: &str) -> Result<Vec<String>, ProviderError>;

    /// Translate `text` into `target_language`
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, ProviderError>;
}

/// Build the configured provider
pub fn from_config(config: &TranslationConfig) -> Result<Arc<dyn Provider>> {
    let endpoint = config.get_endpoint();
    let timeout = Duration::from_secs(config.get_timeout_secs());
    let provider_config = config.get_active_provider_config();

    let provider: Arc<dyn Provider> = match config.provider {
        TranslationProvider::Google => {
            let (project_id, credentials, api_key) = provider_config
                .map(|p| (p.project_id.as_str(), p.credentials.as_str(), p.api_key.as_str()))
                .unwrap_or_default();
            let auth = google::GoogleAuth::from_config(credentials, api_key)?;
            Arc::new(google::GoogleTranslate::new(endpoint, project_id, auth, timeout)?)
        }
        TranslationProvider::LibreTranslate => {
            let api_key = provider_config.map(|p| p.api_key.as_str()).unwrap_or_default();
            Arc::new(libretranslate::LibreTranslate::new(endpoint, api_key, timeout)?)
        }
    };

    Ok(provider)
}

/// Read the error body of a failed response into a provider error
pub(crate) async fn error_from_response(response: reqwest::Response) -> ProviderError {
    let status = response.status();
    let error_text = response.text().await
        .unwrap_or_else(|_| "Failed to get error response text".to_string());
    log::error!("Translation API error ({}): {}", status, error_text);
    ProviderError::from_status(status.as_u16(), error_text)
}

pub mod google;
pub mod libretranslate;
pub mod mock;
