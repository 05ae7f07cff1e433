use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::{Provider, error_from_response};

/// How requests to Google Cloud Translation are authorized
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoogleAuth {
    /// API key sent as the `key` query parameter
    ApiKey(String),
    /// OAuth access token sent as a Bearer token
    AccessToken(String),
}

/// Accepted shapes of the credentials JSON
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CredentialsJson {
    ApiKey { api_key: String },
    AccessToken { access_token: String },
    ServiceAccount {
        #[serde(rename = "type")]
        account_type: String,
    },
}

impl GoogleAuth {
    /// Resolve authorization from the credentials JSON, falling back to a
    /// bare API key
    pub fn from_config(credentials: &str, api_key: &str) -> Result<Self> {
        if !credentials.trim().is_empty() {
            let parsed: CredentialsJson = serde_json::from_str(credentials)
                .map_err(|e| anyhow!("Failed to parse Google credentials JSON: {}", e))?;
            return match parsed {
                CredentialsJson::ApiKey { api_key } => Ok(Self::ApiKey(api_key)),
                CredentialsJson::AccessToken { access_token } => Ok(Self::AccessToken(access_token)),
                CredentialsJson::ServiceAccount { account_type } => Err(anyhow!(
                    "Google credentials of type '{}' are not supported, provide an api_key or access_token",
                    account_type
                )),
            };
        }

        if !api_key.trim().is_empty() {
            return Ok(Self::ApiKey(api_key.trim().to_string()));
        }

        Err(anyhow!("Google credentials or API key are required"))
    }
}

/// Google Cloud Translation (v2 basic) client
#[derive(Debug)]
pub struct GoogleTranslate {
    /// HTTP client for API requests
    client: Client,
    /// API endpoint URL
    endpoint: String,
    /// Billing project, sent with access token requests
    project_id: String,
    auth: GoogleAuth,
}

#[derive(Debug, Serialize)]
struct DetectRequest<'a> {
    q: &'a str,
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    target: &'a str,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct DetectData {
    #[serde(default)]
    detections: Vec<DetectionGroup>,
}

/// One entry per input text; the API answers with either a list of
/// candidates or a single candidate
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DetectionGroup {
    Many(Vec<Detection>),
    One(Detection),
}

#[derive(Debug, Deserialize)]
struct Detection {
    language: String,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

impl GoogleTranslate {
    /// Create a new Google Cloud Translation client
    pub fn new(
        endpoint: impl Into<String>,
        project_id: impl Into<String>,
        auth: GoogleAuth,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            auth,
        })
    }

    fn post(&self, path: &str) -> RequestBuilder {
        let request = self.client.post(format!("{}/language/translate/v2{}", self.endpoint, path));
        match &self.auth {
            GoogleAuth::ApiKey(key) => request.query(&[("key", key)]),
            GoogleAuth::AccessToken(token) => {
                let request = request.bearer_auth(token);
                if self.project_id.is_empty() {
                    request
                } else {
                    request.header("x-goog-user-project", &self.project_id)
                }
            }
        }
    }

    async fn send<B: Serialize, T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ProviderError> {
        let response = self.post(path)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let parsed = response.json::<ApiResponse<T>>().await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;
        Ok(parsed.data)
    }
}

#[async_trait]
impl Provider for GoogleTranslate {
    async fn detect_language(&self, text: &str) -> Result<Vec<String>, ProviderError> {
        let data: DetectData = self.send("/detect", &DetectRequest { q: text }).await?;

        let languages = data.detections
            .into_iter()
            .next()
            .map(|group| match group {
                DetectionGroup::Many(candidates) => candidates,
                DetectionGroup::One(candidate) => vec![candidate],
            })
            .unwrap_or_default()
            .into_iter()
            .map(|d| d.language)
            .collect();

        Ok(languages)
    }

    async fn translate(&self, text: &str, target_language: &str) -> Result<String, ProviderError> {
        let request = TranslateRequest {
            q: text,
            target: target_language,
            format: "text",
        };
        let data: TranslateData = self.send("", &request).await?;

        data.translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| ProviderError::ParseError("response contained no translations".to_string()))
    }
}
