use anyhow::{Context, Result};
use log::{debug, info};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::Config;
use crate::github::{GitHubClient, RepositoryHost};
use crate::handlers::DispatchOutcome;
use crate::providers::{self, Provider};
use crate::router::EventRouter;
use crate::translation::{AnnotationFormatter, Translator};

// @module: Application controller wiring configuration to the event router

/// The triggering event of one run
#[derive(Debug, Clone)]
pub struct Trigger {
    /// Webhook event name, e.g. `pull_request`
    pub event_name: String,
    /// Raw webhook payload
    pub payload: Value,
}

impl Trigger {
    pub fn new(event_name: impl Into<String>, payload: Value) -> Self {
        Self {
            event_name: event_name.into(),
            payload,
        }
    }

    /// Read the payload file the runner wrote for this event
    pub fn load(event_name: impl Into<String>, event_path: &Path) -> Result<Self> {
        let file = File::open(event_path)
            .context(format!("Failed to open event payload: {}", event_path.display()))?;
        let payload: Value = serde_json::from_reader(BufReader::new(file))
            .context(format!("Failed to parse event payload: {}", event_path.display()))?;

        Ok(Self::new(event_name, payload))
    }
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Router with its collaborators built
    router: EventRouter,
}

impl Controller {
    /// Create a controller with the collaborators described by `config`
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()
            .context("Configuration validation failed")?;

        let provider = providers::from_config(&config.translation)
            .context("Failed to create translation provider")?;
        let host = GitHubClient::new(
            config.github.api_url.clone(),
            &config.github.token,
            Duration::from_secs(config.github.timeout_secs),
        )
        .context("Failed to create GitHub client")?;

        Ok(Self::with_collaborators(config, provider, Arc::new(host)))
    }

    /// Create a controller around externally built collaborators
    pub fn with_collaborators(
        config: Config,
        provider: Arc<dyn Provider>,
        host: Arc<dyn RepositoryHost>,
    ) -> Self {
        let translator = Translator::new(provider, config.language_pair())
            .with_foreign_language_policy(config.foreign_language_policy);
        let formatter = AnnotationFormatter::new(config.translation_emoji.clone());
        let router = EventRouter::new(host, translator, formatter);

        Self { config, router }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the bot for one triggering event
    pub async fn run(&self, trigger: Trigger) -> Result<DispatchOutcome> {
        info!(
            "Handling '{}' with {} ({})",
            trigger.event_name,
            self.config.translation.provider.display_name(),
            self.config.language_pair()
        );
        debug!("Payload: {}", trigger.payload);

        let outcome = self.router.dispatch(&trigger.event_name, trigger.payload).await
            .context(format!("Failed to handle '{}' event", trigger.event_name))?;

        debug!("Outcome: {:?}", outcome);
        Ok(outcome)
    }
}
