//! User-facing notifications
//!
//! Every outcome the user should see, success or failure, goes through
//! [`Notifier`]. Messages go to stderr so stdout carries only prompts.

use crate::error::{ErrorKind, PostforgeError};
use console::{Term, style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notifier {
    term: Term,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    pub fn notify(&self, level: Level, message: &str) {
        // Ignore write failures; there is nowhere else to report them.
        let _ = self.term.write_line(&format_line(level, message));
    }

    pub fn success(&self, message: &str) {
        self.notify(Level::Success, message);
    }

    pub fn info(&self, message: &str) {
        self.notify(Level::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.notify(Level::Warning, message);
    }

    pub fn error(&self, err: &PostforgeError) {
        self.notify(Level::Error, &describe(err));
    }
}

/// Prefix an error message with its user-facing class
pub fn describe(err: &PostforgeError) -> String {
    let class = match err.kind() {
        ErrorKind::Validation => "Invalid input",
        ErrorKind::Configuration => "Configuration error",
        ErrorKind::Remote => "Suggestion request failed",
        ErrorKind::Output => "Could not save prompts",
    };
    format!("{class}: {err}")
}

fn format_line(level: Level, message: &str) -> String {
    match level {
        Level::Success => format!("{} {message}", style("✓").green().bold()),
        Level::Info => format!("{} {message}", style("•").cyan()),
        Level::Warning => format!("{} {message}", style("!").yellow().bold()),
        Level::Error => format!("{} {message}", style("✗").red().bold()),
    }
}
