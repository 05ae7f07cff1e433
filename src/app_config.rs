use anyhow::{Context, Result, anyhow};
use log::debug;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use url::Url;

use crate::language_utils;
use crate::translation::LanguagePair;

/// Application configuration module
/// This module handles the application configuration including loading,
/// applying command line / workflow input overrides and validating.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// First configured language code (ISO), e.g. "en"
    #[serde(default = "default_language_1")]
    pub language_1: String,

    /// Second configured language code (ISO), e.g. "ko"
    #[serde(default = "default_language_2")]
    pub language_2: String,

    /// Icon rendered in front of the translation label
    #[serde(default = "default_translation_emoji")]
    pub translation_emoji: String,

    /// What to do with text in neither configured language
    #[serde(default)]
    pub foreign_language_policy: ForeignLanguagePolicy,

    /// Repository host settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// Translation config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Policy for a detected language that matches neither configured language
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ForeignLanguagePolicy {
    /// Translate into the first configured language
    #[default]
    TranslateToFirst,
    /// Leave the text untouched
    Skip,
}

impl std::str::FromStr for ForeignLanguagePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "translate-to-first" => Ok(Self::TranslateToFirst),
            "skip" => Ok(Self::Skip),
            _ => Err(anyhow!("Invalid foreign language policy: {}", s)),
        }
    }
}

/// GitHub REST API settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GitHubConfig {
    /// Repository access token
    #[serde(default = "String::new")]
    pub token: String,

    /// REST API base URL (differs on GitHub Enterprise)
    #[serde(default = "default_github_api_url")]
    pub api_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_url: default_github_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Translation provider type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    // @provider: Google Cloud Translation (v2 basic)
    #[default]
    Google,
    // @provider: LibreTranslate (self-hosted or public instance)
    LibreTranslate,
}

impl TranslationProvider {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Google => "Google Cloud Translation",
            Self::LibreTranslate => "LibreTranslate",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Google => "google".to_string(),
            Self::LibreTranslate => "libretranslate".to_string(),
        }
    }
}

impl std::fmt::Display for TranslationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for TranslationProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "libretranslate" => Ok(Self::LibreTranslate),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Provider configuration wrapper
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Provider type identifier
    #[serde(rename = "type")]
    pub provider_type: String,

    // @field: Cloud project id (Google)
    #[serde(default = "String::new")]
    pub project_id: String,

    // @field: Credentials JSON (Google)
    #[serde(default = "String::new")]
    pub credentials: String,

    // @field: API key
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL
    #[serde(default = "String::new")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    // @param provider_type: Provider enum
    // @returns: Provider config with defaults
    pub fn new(provider_type: TranslationProvider) -> Self {
        match provider_type {
            TranslationProvider::Google => Self {
                provider_type: "google".to_string(),
                project_id: String::new(),
                credentials: String::new(),
                api_key: String::new(),
                endpoint: default_google_endpoint(),
                timeout_secs: default_timeout_secs(),
            },
            TranslationProvider::LibreTranslate => Self {
                provider_type: "libretranslate".to_string(),
                project_id: String::new(),
                credentials: String::new(),
                api_key: String::new(),
                endpoint: default_libretranslate_endpoint(),
                timeout_secs: default_timeout_secs(),
            },
        }
    }
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Translation provider to use
    #[serde(default)]
    pub provider: TranslationProvider,

    /// Available translation providers
    #[serde(default)]
    pub available_providers: Vec<ProviderConfig>,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: TranslationProvider::default(),
            available_providers: vec![
                ProviderConfig::new(TranslationProvider::Google),
                ProviderConfig::new(TranslationProvider::LibreTranslate),
            ],
        }
    }
}

impl TranslationConfig {
    /// Get the active provider configuration from the available_providers array
    pub fn get_active_provider_config(&self) -> Option<&ProviderConfig> {
        self.get_provider_config(&self.provider)
    }

    /// Get a specific provider configuration by type
    pub fn get_provider_config(&self, provider_type: &TranslationProvider) -> Option<&ProviderConfig> {
        let provider_str = provider_type.to_lowercase_string();
        self.available_providers.iter()
            .find(|p| p.provider_type == provider_str)
    }

    /// Get (creating if needed) the configuration entry of the active provider
    pub fn active_provider_config_mut(&mut self) -> &mut ProviderConfig {
        let provider_str = self.provider.to_lowercase_string();
        let index = match self.available_providers.iter().position(|p| p.provider_type == provider_str) {
            Some(index) => index,
            None => {
                self.available_providers.push(ProviderConfig::new(self.provider.clone()));
                self.available_providers.len() - 1
            }
        };
        &mut self.available_providers[index]
    }

    /// Get the endpoint for the active provider
    pub fn get_endpoint(&self) -> String {
        if let Some(provider_config) = self.get_active_provider_config() {
            if !provider_config.endpoint.is_empty() {
                return provider_config.endpoint.clone();
            }
        }

        match self.provider {
            TranslationProvider::Google => default_google_endpoint(),
            TranslationProvider::LibreTranslate => default_libretranslate_endpoint(),
        }
    }

    /// Get the request timeout for the active provider
    pub fn get_timeout_secs(&self) -> u64 {
        self.get_active_provider_config()
            .map(|p| p.timeout_secs)
            .filter(|secs| *secs > 0)
            .unwrap_or_else(default_timeout_secs)
    }
}

/// Values supplied on the command line or as workflow inputs.
/// Every field left as `None` keeps the value from the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub repo_token: Option<String>,
    pub language_1: Option<String>,
    pub language_2: Option<String>,
    pub translation_emoji: Option<String>,
    pub provider: Option<TranslationProvider>,
    pub project_id: Option<String>,
    pub credentials: Option<String>,
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub foreign_language_policy: Option<ForeignLanguagePolicy>,
    pub log_level: Option<LogLevel>,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_language_1() -> String {
    "en".to_string()
}

fn default_language_2() -> String {
    "ko".to_string()
}

fn default_translation_emoji() -> String {
    "🌐".to_string()
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_google_endpoint() -> String {
    "https://translation.googleapis.com".to_string()
}

fn default_libretranslate_endpoint() -> String {
    "https://libretranslate.com".to_string()
}

/// Keep `current` unless the override carries a non-blank value
fn override_string(current: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        if !value.trim().is_empty() {
            *current = value.trim().to_string();
        }
    }
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults when
    /// the file does not exist (workflow inputs then supply everything)
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Apply command line / workflow input values on top of this config
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        override_string(&mut self.github.token, &overrides.repo_token);
        override_string(&mut self.language_1, &overrides.language_1);
        override_string(&mut self.language_2, &overrides.language_2);
        override_string(&mut self.translation_emoji, &overrides.translation_emoji);

        if let Some(provider) = &overrides.provider {
            self.translation.provider = provider.clone();
        }
        if let Some(policy) = overrides.foreign_language_policy {
            self.foreign_language_policy = policy;
        }
        if let Some(log_level) = &overrides.log_level {
            self.log_level = log_level.clone();
        }

        let provider_config = self.translation.active_provider_config_mut();
        override_string(&mut provider_config.project_id, &overrides.project_id);
        override_string(&mut provider_config.credentials, &overrides.credentials);
        override_string(&mut provider_config.api_key, &overrides.api_key);
        override_string(&mut provider_config.endpoint, &overrides.endpoint);
    }

    /// The configured language pair
    pub fn language_pair(&self) -> LanguagePair {
        LanguagePair::new(self.language_1.clone(), self.language_2.clone())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate languages
        language_utils::validate_language_code(&self.language_1)
            .context("language-1 is not a valid ISO 639 code")?;
        language_utils::validate_language_code(&self.language_2)
            .context("language-2 is not a valid ISO 639 code")?;
        let first_name = language_utils::get_language_name(&self.language_1)
            .context("language-1 is not a valid ISO 639 code")?;
        let second_name = language_utils::get_language_name(&self.language_2)
            .context("language-2 is not a valid ISO 639 code")?;
        if language_utils::language_codes_match(&self.language_1, &self.language_2) {
            return Err(anyhow!(
                "language-1 and language-2 must differ, both are {}",
                first_name
            ));
        }
        debug!("Translating between {} and {}", first_name, second_name);

        if self.translation_emoji.trim().is_empty() {
            return Err(anyhow!("Translation emoji must not be empty"));
        }

        if self.github.token.trim().is_empty() {
            return Err(anyhow!("Repository token is required"));
        }
        Url::parse(&self.github.api_url)
            .context(format!("Invalid GitHub API URL: {}", self.github.api_url))?;

        let endpoint = self.translation.get_endpoint();
        Url::parse(&endpoint)
            .context(format!("Invalid translation endpoint: {}", endpoint))?;

        if self.translation.provider == TranslationProvider::Google {
            let has_credentials = self.translation.get_active_provider_config()
                .map(|p| !p.credentials.trim().is_empty() || !p.api_key.trim().is_empty())
                .unwrap_or(false);
            if !has_credentials {
                return Err(anyhow!("Google credentials or API key are required for the Google provider"));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            language_1: default_language_1(),
            language_2: default_language_2(),
            translation_emoji: default_translation_emoji(),
            foreign_language_policy: ForeignLanguagePolicy::default(),
            github: GitHubConfig::default(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
