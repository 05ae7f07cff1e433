/*!
 * Logger for the command line binary.
 *
 * Inside a GitHub Actions job records are written as workflow commands, so
 * errors and warnings show up as annotations on the run and debug lines only
 * appear when step debugging is enabled. Elsewhere records go to stderr with
 * a timestamp and a colored level tag.
 */

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

// @struct: Custom logger implementation
pub struct CustomLogger {
    github_actions: bool,
}

impl CustomLogger {
    // @creates: New logger, rendering workflow commands when `github_actions`
    pub fn new(github_actions: bool) -> Self {
        CustomLogger { github_actions }
    }

    // @initializes: Global logger; the level can be changed later with log::set_max_level
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let github_actions = std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true");
        log::set_boxed_logger(Box::new(CustomLogger::new(github_actions)))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Workflow command prefix for level
    fn workflow_command(level: Level) -> &'static str {
        match level {
            Level::Error => "::error::",
            Level::Warn => "::warning::",
            Level::Info => "",
            Level::Debug | Level::Trace => "::debug::",
        }
    }

    // @returns: ANSI color code for level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }

    /// Render one record as it should be printed
    pub fn render(&self, level: Level, message: &str) -> String {
        if self.github_actions {
            let prefix = Self::workflow_command(level);
            if prefix.is_empty() {
                message.to_string()
            } else {
                format!("{}{}", prefix, escape_workflow_data(message))
            }
        } else {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            format!(
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(level), now, level, message
            )
        }
    }
}

/// Escape a message for use as workflow command data
pub fn escape_workflow_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.render(record.level(), &record.args().to_string());
        // The runner only parses workflow commands from stdout
        let _ = if self.github_actions {
            writeln!(std::io::stdout(), "{}", line)
        } else {
            writeln!(std::io::stderr(), "{}", line)
        };
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
    }
}
