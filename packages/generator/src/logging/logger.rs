// Logger Interface
//
// Logger trait definition.

use std::fmt;

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.write_str(label)
    }
}

/// Logger trait.
///
/// Loggers are shared between files generated in parallel, hence `Send + Sync`.
pub trait Logger: Send + Sync {
    fn level(&self) -> LogLevel;
    fn log(&self, level: LogLevel, msg: &str);

    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }
    fn debug(&self, msg: &str) {
        self.log(LogLevel::Debug, msg);
    }
    fn info(&self, msg: &str) {
        self.log(LogLevel::Info, msg);
    }
    fn warn(&self, msg: &str) {
        self.log(LogLevel::Warn, msg);
    }
    fn error(&self, msg: &str) {
        self.log(LogLevel::Error, msg);
    }
}

/// Null logger (logs nothing).
#[derive(Debug, Default)]
pub struct NullLogger;

impl NullLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NullLogger {
    fn level(&self) -> LogLevel {
        LogLevel::Error
    }
    fn log(&self, _level: LogLevel, _msg: &str) {}
}
