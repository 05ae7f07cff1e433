// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{LevelFilter, error, info};
use std::path::PathBuf;

use gh_translator::app_config::{self, Config, ConfigOverrides, ForeignLanguagePolicy, TranslationProvider};
use gh_translator::app_controller::{Controller, Trigger};
use gh_translator::handlers::DispatchOutcome;
use gh_translator::logging::CustomLogger;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate the text of the triggering event (default command)
    Run(RunArgs),

    /// Generate shell completions for gh-translator
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options of the run command. Every option can also come from the
/// environment the Actions runner provides, so a workflow step needs no flags.
#[derive(Args, Debug)]
struct RunArgs {
    /// Webhook event name (e.g. pull_request, issue_comment)
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    event_name: Option<String>,

    /// Path of the JSON webhook payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "translator.json")]
    config_path: PathBuf,

    /// Repository access token
    #[arg(long, env = "INPUT_REPO-TOKEN", hide_env_values = true)]
    repo_token: Option<String>,

    /// First language code (e.g., 'en')
    #[arg(long = "language-1", env = "INPUT_LANGUAGE-1")]
    language_1: Option<String>,

    /// Second language code (e.g., 'ko')
    #[arg(long = "language-2", env = "INPUT_LANGUAGE-2")]
    language_2: Option<String>,

    /// Icon shown in front of the translation label
    #[arg(long, env = "INPUT_TRANSLATION-EMOJI")]
    translation_emoji: Option<String>,

    /// Translation provider (google, libretranslate)
    #[arg(short, long, env = "INPUT_PROVIDER")]
    provider: Option<String>,

    /// Google Cloud project id
    #[arg(long, env = "INPUT_GOOGLE-PROJECT-ID")]
    google_project_id: Option<String>,

    /// Google credentials JSON ({"api_key": ...} or {"access_token": ...})
    #[arg(long, env = "INPUT_GOOGLE-CREDENTIALS", hide_env_values = true)]
    google_credentials: Option<String>,

    /// API key of the translation provider
    #[arg(long, env = "INPUT_PROVIDER-API-KEY", hide_env_values = true)]
    provider_api_key: Option<String>,

    /// Translation provider endpoint URL
    #[arg(long, env = "INPUT_PROVIDER-ENDPOINT")]
    provider_endpoint: Option<String>,

    /// What to do with text in neither language (translate-to-first, skip)
    #[arg(long, env = "INPUT_FOREIGN-LANGUAGE-POLICY")]
    foreign_language_policy: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// gh-translator - translate pull requests, reviews and comments in place
///
/// Detects the language of the text of the triggering event, translates it
/// into the other configured language and appends the translation to the
/// original object.
#[derive(Parser, Debug)]
#[command(name = "gh-translator")]
#[command(version)]
#[command(about = "Translate GitHub pull requests, reviews and comments in place")]
#[command(long_about = "gh-translator runs as a GitHub Actions step. It reads the triggering event
from GITHUB_EVENT_NAME / GITHUB_EVENT_PATH and the action inputs from INPUT_* variables.

EXAMPLES:
    gh-translator                                         # Inside a workflow step
    gh-translator run --event-name issue_comment --event-path event.json --language-1 en --language-2 ko
    gh-translator completions bash > gh-translator.bash

SUPPORTED EVENTS:
    pull_request, issue_comment, pull_request_review_comment, pull_request_review")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

/// Treat blank values (unset action inputs arrive as empty strings) as absent
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl RunArgs {
    fn overrides(&self) -> Result<ConfigOverrides> {
        Ok(ConfigOverrides {
            repo_token: self.repo_token.clone(),
            language_1: self.language_1.clone(),
            language_2: self.language_2.clone(),
            translation_emoji: self.translation_emoji.clone(),
            provider: non_blank(self.provider.clone())
                .map(|p| p.parse::<TranslationProvider>())
                .transpose()?,
            project_id: self.google_project_id.clone(),
            credentials: self.google_credentials.clone(),
            api_key: self.provider_api_key.clone(),
            endpoint: self.provider_endpoint.clone(),
            foreign_language_policy: non_blank(self.foreign_language_policy.clone())
                .map(|p| p.parse::<ForeignLanguagePolicy>())
                .transpose()?,
            log_level: self.log_level.clone().map(Into::into),
        })
    }
}

#[tokio::main]
async fn main() {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    if let Err(e) = CustomLogger::init(LevelFilter::Info) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let cli = CommandLineOptions::parse();

    let result = match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "gh-translator", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Run(args)) => run(args).await,
        None => run(cli.run).await,
    };

    if let Err(e) = result {
        error!("{:#}", e);
        log::logger().flush();
        std::process::exit(1);
    }
}

async fn run(options: RunArgs) -> Result<()> {
    let mut config = Config::load(&options.config_path)?;
    config.apply_overrides(&options.overrides()?);
    log::set_max_level(config.log_level.to_level_filter());

    let event_name = non_blank(options.event_name.clone())
        .ok_or_else(|| anyhow!("Event name is required (--event-name or GITHUB_EVENT_NAME)"))?;
    let event_path = options.event_path.clone()
        .ok_or_else(|| anyhow!("Event payload path is required (--event-path or GITHUB_EVENT_PATH)"))?;
    let trigger = Trigger::load(event_name, &event_path)?;

    let controller = Controller::with_config(config)?;
    match controller.run(trigger).await? {
        DispatchOutcome::Updated => info!("Translation added"),
        DispatchOutcome::Unchanged => info!("Nothing to translate"),
        DispatchOutcome::Skipped => info!("Event ignored"),
    }

    Ok(())
}
