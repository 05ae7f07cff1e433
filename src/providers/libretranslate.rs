use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::{Provider, error_from_response};

/// LibreTranslate client
#[derive(Debug)]
pub struct LibreTranslate {
    /// HTTP client for API requests
    client: Client,
    /// Instance URL
    endpoint: String,
    /// API key, required by some public instances
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct DetectRequest<'a> {
    q: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'static str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct Detection {
    language: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
}

impl LibreTranslate {
    /// Create a new LibreTranslate client; an empty key is sent as no key
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()?;
        let api_key = api_key.into();

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: (!api_key.trim().is_empty()).then_some(api_key),
        })
    }

    async fn send<B: Serialize, T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ProviderError> {
        let response = self.client.post(format!("{}{}", self.endpoint, path))
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        response.json::<T>().await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl Provider for LibreTranslate {
    async fn detect_language(&self, text: &str) -> Result<Vec<String>, ProviderError> {
        let request = DetectRequest {
            q: text,
            api_key: self.api_key.as_deref(),
        };
        let detections: Vec<Detection> = self.send("/detect", &request).await?;

        Ok(detections.into_iter().map(|d| d.language).collect())
    }

    async fn translate(&self, text: &str, target_language: &str) -> Result<String, ProviderError> {
        let request = TranslateRequest {
            q: text,
            source: "auto",
            target: target_language,
            format: "text",
            api_key: self.api_key.as_deref(),
        };
        let response: TranslateResponse = self.send("/translate", &request).await?;

        Ok(response.translated_text)
    }
}
