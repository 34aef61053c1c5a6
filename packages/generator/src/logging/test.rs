// Logging Tests
//
// Tests for the logging module.

use crate::logging::*;
use std::sync::Mutex;

/// Collects every enabled message.
struct RecordingLogger {
    level: LogLevel,
    lines: Mutex<Vec<(LogLevel, String)>>,
}

impl Logger for RecordingLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn log(&self, level: LogLevel, msg: &str) {
        if self.is_enabled(level) {
            self.lines.lock().unwrap().push((level, msg.to_string()));
        }
    }
}

mod log_level_tests {
    use super::*;

    #[test]
    fn should_have_correct_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn should_display_upper_case() {
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
    }
}

mod console_logger_tests {
    use super::*;

    #[test]
    fn should_create_with_level() {
        let logger = ConsoleLogger::new(LogLevel::Warn);
        assert_eq!(logger.level(), LogLevel::Warn);
    }

    #[test]
    fn should_check_level_enabled() {
        let logger = ConsoleLogger::new(LogLevel::Warn);

        assert!(!logger.is_enabled(LogLevel::Debug));
        assert!(!logger.is_enabled(LogLevel::Info));
        assert!(logger.is_enabled(LogLevel::Warn));
        assert!(logger.is_enabled(LogLevel::Error));
    }
}

mod dispatch_tests {
    use super::*;

    #[test]
    fn should_route_helpers_through_log() {
        let logger = RecordingLogger {
            level: LogLevel::Info,
            lines: Mutex::new(Vec::new()),
        };
        logger.debug("dropped");
        logger.info("kept");
        logger.error("also kept");

        let lines = logger.lines.lock().unwrap();
        assert_eq!(
            *lines,
            vec![
                (LogLevel::Info, "kept".to_string()),
                (LogLevel::Error, "also kept".to_string()),
            ]
        );
    }

    #[test]
    fn should_not_log_anything_with_null_logger() {
        let logger = NullLogger::new();

        // These should not panic
        logger.debug("debug message");
        logger.info("info message");
        logger.warn("warn message");
        logger.error("error message");
    }
}
