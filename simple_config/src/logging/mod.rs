//! Global logging module for simple_config
//!
//! Provides a thread-safe global logging service and a clean macro
//! interface. Logging before initialization is a silent no-op.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use crate::config::runtime::RuntimeConfig;
use std::sync::{Arc, OnceLock};

// Re-export main types
pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging system from the runtime configuration
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Configuration validation failed: {}", e))?;

    let logging_service = Arc::new(service::create_configured_service());

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized")?;

    // Validate error code system
    let required_codes = [
        codes::system::INTERNAL_ERROR,
        codes::lexical::UNEXPECTED_CHARACTER,
        codes::syntax::EXPECTED_LITERAL,
        codes::lookup::KEY_NOT_FOUND,
    ];
    for code in required_codes {
        if code.metadata().is_none() {
            return Err(format!("Missing metadata for error code: {}", code));
        }
    }

    logging_service.log_event(LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    ));

    Ok(())
}

/// Store `config.logging` as the runtime preferences, then initialize.
///
/// Nothing is stored when a global logger already exists.
pub fn init_global_logging_with_config(config: &RuntimeConfig) -> Result<(), String> {
    if is_initialized() {
        return Err("Global logger already initialized".to_string());
    }

    config::init_runtime_preferences(config.logging.clone())?;
    init_global_logging()
}

/// Initialize with custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized")?;

    Ok(())
}

/// Check if global logging is initialized
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

// ============================================================================
// GLOBAL ACCESS
// ============================================================================

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

/// Build and log an event if the global service accepts `level`.
///
/// Called by the logging macros; `build` runs only when the event will be kept.
pub fn emit(level: LogLevel, build: impl FnOnce() -> LogEvent) {
    if let Some(logger) = try_get_global_logger() {
        if logger.should_log(level) {
            logger.log_event(build());
        }
    }
}

/// Get system diagnostics
pub fn get_system_diagnostics() -> String {
    let mut diagnostics = String::new();

    diagnostics.push_str("=== Logging System Diagnostics ===\n");
    diagnostics.push_str(&format!("Initialized: {}\n", is_initialized()));
    if let Some(logger) = try_get_global_logger() {
        diagnostics.push_str(&format!("Active level: {}\n", logger.min_level().as_str()));
    }
    diagnostics.push('\n');
    diagnostics.push_str(&config::get_config_summary());

    diagnostics
}

/// Shared global memory logger for tests across the crate
#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    static MEMORY: OnceLock<Arc<MemoryLogger>> = OnceLock::new();

    /// Install (once) a debug-level memory logger as the global service.
    ///
    /// Tests run in parallel and share it, so assertions should look for
    /// their own events rather than count or clear.
    pub fn global_memory_logger() -> Arc<MemoryLogger> {
        MEMORY
            .get_or_init(|| {
                let memory = service::create_test_logger();
                let service = Arc::new(LoggingService::new(memory.clone(), LogLevel::Debug));
                // Another path may have initialized first; the memory logger is then unused.
                let _ = init_global_logging_with_service(service);
                memory
            })
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_initialization_is_rejected() {
        test_support::global_memory_logger();

        assert!(is_initialized());
        assert!(init_global_logging().is_err());
        assert_eq!(
            init_global_logging_with_config(&RuntimeConfig::default()),
            Err("Global logger already initialized".to_string())
        );
    }

    #[test]
    fn test_emit_reaches_global_logger() {
        let memory = test_support::global_memory_logger();

        emit(LogLevel::Error, || {
            LogEvent::error(codes::lookup::KEY_NOT_FOUND, "global logger reachability")
                .with_line(9)
                .with_context("key", "timeout")
        });

        let events = memory.get_events_with_code(codes::lookup::KEY_NOT_FOUND);
        assert!(events
            .iter()
            .any(|e| e.message == "global logger reachability" && e.line == Some(9)));
    }

    #[test]
    fn test_diagnostics() {
        let diagnostics = get_system_diagnostics();
        assert!(diagnostics.contains("Logging System Diagnostics"));
        assert!(diagnostics.contains("Logging Configuration"));
    }
}
