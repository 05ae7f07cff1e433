/*!
 * # gh-translator
 *
 * A GitHub automation bot that translates the human-written text of pull
 * requests, reviews and comments between two configured languages, and
 * appends the translation to the original object.
 *
 * ## Features
 *
 * - Handles `pull_request`, `issue_comment`, `pull_request_review_comment`
 *   and `pull_request_review` events
 * - Detects the language of the text and translates into the other one
 * - Idempotent: annotated text carries a marker and is never re-translated
 * - Translation providers:
 *   - Google Cloud Translation
 *   - LibreTranslate
 * - ISO 639-1 and ISO 639-2 language code support
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `app_controller`: Builds the collaborators from configuration and runs one event
 * - `router`: Maps an event kind to its handler
 * - `handlers`: The four event handlers
 * - `events`: Webhook payload parsing
 * - `translation`: Language detection, target choice and annotation formatting
 * - `providers`: Translation provider clients
 * - `github`: Repository host client
 * - `language_utils`: ISO language code utilities
 * - `logging`: GitHub Actions aware logger for the binary
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod events;
pub mod github;
pub mod handlers;
pub mod language_utils;
pub mod logging;
pub mod providers;
pub mod router;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, Trigger};
pub use errors::{BotError, HostError, ProviderError, TranslationError};
pub use events::Event;
pub use handlers::DispatchOutcome;
pub use language_utils::{get_language_name, language_codes_match};
pub use router::EventRouter;
pub use translation::{AnnotationFormatter, LanguagePair, Translator};
