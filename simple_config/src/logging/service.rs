//! Logging service and logger backends

use super::codes::Code;
use super::config;
use crate::config::runtime::LoggingPreferences;
use super::events::{LogEvent, LogLevel};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Destination for events that passed the service's level filter
pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

/// Level filter in front of a logger backend
pub struct LoggingService {
    logger: Arc<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    pub fn new(logger: Arc<dyn Logger>, min_level: LogLevel) -> Self {
        Self { logger, min_level }
    }

    /// Backend and level chosen from `preferences`
    pub fn from_preferences(preferences: &LoggingPreferences) -> Self {
        let logger: Arc<dyn Logger> = if !preferences.enable_console_logging {
            Arc::new(NullLogger)
        } else if preferences.use_structured_logging {
            Arc::new(StructuredLogger)
        } else {
            Arc::new(ConsoleLogger)
        };

        Self::new(logger, preferences.min_log_level.to_events_log_level())
    }

    /// Service for the stored runtime preferences
    pub fn with_config() -> Self {
        Self::from_preferences(&config::runtime_preferences())
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }

    pub fn log_event(&self, event: LogEvent) {
        if self.should_log(event.level) {
            self.logger.log(&event);
        }
    }
}

/// Errors go to stderr, everything else to stdout
fn write_line(level: LogLevel, line: &str) {
    match level {
        LogLevel::Error => eprintln!("{}", line),
        _ => println!("{}", line),
    }
}

/// Human-readable single-line output
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, event: &LogEvent) {
        write_line(event.level, &event.format());
    }
}

/// One JSON object per line
pub struct StructuredLogger;

impl Logger for StructuredLogger {
    fn log(&self, event: &LogEvent) {
        let output = event.format_json().unwrap_or_else(|_| event.format());
        write_line(event.level, &output);
    }
}

/// Discards everything; used when console output is disabled
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _event: &LogEvent) {}
}

/// Keeps events in memory, bounded by the compile-time buffer size
pub struct MemoryLogger {
    events: Mutex<Vec<LogEvent>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    fn lock_events(&self) -> MutexGuard<'_, Vec<LogEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn matching(&self, predicate: impl Fn(&LogEvent) -> bool) -> Vec<LogEvent> {
        self.lock_events()
            .iter()
            .filter(|e| predicate(*e))
            .cloned()
            .collect()
    }

    pub fn get_events(&self) -> Vec<LogEvent> {
        self.lock_events().clone()
    }

    pub fn clear(&self) {
        self.lock_events().clear();
    }

    pub fn event_count(&self) -> usize {
        self.lock_events().len()
    }

    pub fn get_errors(&self) -> Vec<LogEvent> {
        self.matching(LogEvent::is_error)
    }

    pub fn get_warnings(&self) -> Vec<LogEvent> {
        self.matching(LogEvent::is_warning)
    }

    pub fn get_events_with_code(&self, code: Code) -> Vec<LogEvent> {
        self.matching(|e| e.code == code)
    }

    pub fn has_error_with_code(&self, code: Code) -> bool {
        self.lock_events()
            .iter()
            .any(|e| e.is_error() && e.code == code)
    }

    pub fn has_success_with_code(&self, code: Code) -> bool {
        self.lock_events()
            .iter()
            .any(|e| e.is_info() && e.code == code)
    }
}

impl Default for MemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, event: &LogEvent) {
        let mut events = self.lock_events();

        // Oldest events make room once the buffer is full
        let capacity = config::get_log_buffer_size();
        if events.len() >= capacity {
            let excess = events.len() + 1 - capacity;
            events.drain(..excess);
        }

        events.push(event.clone());
    }
}

/// Create logging service based on current configuration
pub fn create_configured_service() -> LoggingService {
    LoggingService::with_config()
}

pub fn create_test_logger() -> Arc<MemoryLogger> {
    Arc::new(MemoryLogger::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;

    #[test]
    fn test_console_and_structured_loggers_do_not_panic() {
        let event = LogEvent::error(codes::file_processing::FILE_NOT_FOUND, "Test error")
            .with_context("key", "value");

        ConsoleLogger.log(&event);
        StructuredLogger.log(&event);
        NullLogger.log(&event);
    }

    #[test]
    fn test_memory_logger() {
        let logger = MemoryLogger::new();

        logger.log(&LogEvent::info("Message 1"));
        logger.log(&LogEvent::error(
            codes::lexical::UNEXPECTED_CHARACTER,
            "Error message",
        ));
        logger.log(&LogEvent::warning("Overwritten"));

        assert_eq!(logger.event_count(), 3);
        assert_eq!(logger.get_errors().len(), 1);
        assert_eq!(logger.get_warnings().len(), 1);
        assert!(logger.has_error_with_code(codes::lexical::UNEXPECTED_CHARACTER));
        assert!(!logger.has_success_with_code(codes::success::PARSE_COMPLETE));

        logger.clear();
        assert_eq!(logger.event_count(), 0);
    }

    #[test]
    fn test_memory_logger_drops_oldest_when_full() {
        let logger = MemoryLogger::new();
        let capacity = config::get_log_buffer_size();

        for i in 0..=capacity {
            logger.log(&LogEvent::debug(&format!("event {}", i)));
        }

        let events = logger.get_events();
        assert_eq!(events.len(), capacity);
        assert_eq!(events[0].message, "event 1");
    }

    #[test]
    fn test_level_filtering() {
        let logger = create_test_logger();
        let service = LoggingService::new(logger.clone(), LogLevel::Error);

        service.log_event(LogEvent::debug("Debug message"));
        service.log_event(LogEvent::warning("Warning message"));
        service.log_event(LogEvent::error(codes::system::INTERNAL_ERROR, "Error message"));

        assert_eq!(logger.event_count(), 1);
        assert!(logger.has_error_with_code(codes::system::INTERNAL_ERROR));
        assert!(service.should_log(LogLevel::Error));
        assert!(!service.should_log(LogLevel::Warning));
    }

    #[test]
    fn test_service_from_preferences() {
        use crate::config::runtime::LogLevel as RuntimeLogLevel;

        let service = LoggingService::from_preferences(&LoggingPreferences {
            use_structured_logging: false,
            enable_console_logging: false,
            min_log_level: RuntimeLogLevel::Warning,
        });

        assert_eq!(service.min_level(), LogLevel::Warning);
        assert!(service.should_log(LogLevel::Error));
        assert!(!service.should_log(LogLevel::Info));
        // Console disabled routes to the null backend
        service.log_event(LogEvent::warning("discarded"));
    }

    #[test]
    fn test_success_events_are_info() {
        let logger = create_test_logger();
        let service = LoggingService::new(logger.clone(), LogLevel::Info);

        service.log_event(LogEvent::success(codes::success::PARSE_COMPLETE, "Parsed"));

        assert!(logger.has_success_with_code(codes::success::PARSE_COMPLETE));
        assert_eq!(
            logger
                .get_events_with_code(codes::success::PARSE_COMPLETE)
                .len(),
            1
        );
    }
}
