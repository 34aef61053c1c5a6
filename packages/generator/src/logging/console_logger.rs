// Console Logger
//
// Logger that writes to stderr, tagging each line with the file being generated.

use super::logger::{LogLevel, Logger};

/// Console logger.
#[derive(Debug)]
pub struct ConsoleLogger {
    level: LogLevel,
    scope: Option<String>,
}

impl ConsoleLogger {
    pub fn new(level: LogLevel) -> Self {
        Self { level, scope: None }
    }

    /// Prefixes every message with `scope`, typically the IDL file name.
    pub fn scoped(level: LogLevel, scope: impl Into<String>) -> Self {
        Self {
            level,
            scope: Some(scope.into()),
        }
    }

    fn format(&self, level: LogLevel, msg: &str) -> String {
        match &self.scope {
            Some(scope) => format!("[{}] {}: {}", level, scope, msg),
            None => format!("[{}] {}", level, msg),
        }
    }
}

impl Logger for ConsoleLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn log(&self, level: LogLevel, msg: &str) {
        if self.is_enabled(level) {
            eprintln!("{}", self.format(level, msg));
        }
    }
}
