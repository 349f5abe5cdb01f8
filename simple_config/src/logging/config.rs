//! Configuration access for logging
//!
//! Compile-time limits come from the generated constants; user preferences
//! are stored once and fall back to environment defaults.

use crate::config::compile_time::logging::*;
use crate::config::runtime::LoggingPreferences;
use std::sync::OnceLock;

// ============================================================================
// RUNTIME PREFERENCES STORAGE
// ============================================================================

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Initialize runtime preferences
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime preferences already initialized")?;

    Ok(())
}

/// Stored preferences, or the environment defaults when none were stored
pub fn runtime_preferences() -> LoggingPreferences {
    RUNTIME_PREFERENCES.get().cloned().unwrap_or_default()
}

// ============================================================================
// CONFIGURATION ACCESS FUNCTIONS
// ============================================================================

/// Get in-memory event buffer size (compile-time constant)
pub fn get_log_buffer_size() -> usize {
    LOG_BUFFER_SIZE
}

/// Get maximum log message length (compile-time constant)
pub fn get_max_log_message_length() -> usize {
    MAX_LOG_MESSAGE_LENGTH
}

// ============================================================================
// CONFIGURATION VALIDATION
// ============================================================================

/// Validate current configuration settings
pub fn validate_config() -> Result<(), String> {
    if LOG_BUFFER_SIZE > 100_000 {
        return Err(format!("Log buffer size too large: {}", LOG_BUFFER_SIZE));
    }

    if MAX_LOG_MESSAGE_LENGTH < 64 {
        return Err(format!(
            "Max log message length too small: {}",
            MAX_LOG_MESSAGE_LENGTH
        ));
    }

    Ok(())
}

/// Get configuration summary for diagnostics
pub fn get_config_summary() -> String {
    let preferences = runtime_preferences();

    format!(
        "Logging Configuration:\n\
         === Compile-time Limits ===\n\
         - Log buffer size: {}\n\
         - Max message length: {}\n\
         === User Preferences (Runtime) ===\n\
         - Min log level: {:?}\n\
         - Structured logging: {}\n\
         - Console logging: {}",
        LOG_BUFFER_SIZE,
        MAX_LOG_MESSAGE_LENGTH,
        preferences.min_log_level,
        preferences.use_structured_logging,
        preferences.enable_console_logging,
    )
}

/// Truncate a message to the configured maximum length on a char boundary
pub fn truncate_message(message: &str) -> String {
    let max = get_max_log_message_length();
    if message.len() <= max {
        return message.to_string();
    }

    let mut end = max;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &message[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::runtime::LogLevel as RuntimeLogLevel;

    #[test]
    fn test_config_validation() {
        assert!(validate_config().is_ok());
    }

    #[test]
    fn test_summary_mentions_limits() {
        let summary = get_config_summary();
        assert!(summary.contains("Log buffer size"));
        assert!(summary.contains("Min log level"));
    }

    #[test]
    fn test_stored_preferences_drive_the_configured_service() {
        let preferences = LoggingPreferences {
            use_structured_logging: true,
            enable_console_logging: false,
            min_log_level: RuntimeLogLevel::Debug,
        };
        init_runtime_preferences(preferences.clone()).unwrap();

        let stored = runtime_preferences();
        assert_eq!(stored.min_log_level, RuntimeLogLevel::Debug);
        assert!(stored.use_structured_logging);
        assert!(init_runtime_preferences(preferences).is_err());

        let service = crate::logging::LoggingService::with_config();
        assert_eq!(service.min_level(), crate::logging::LogLevel::Debug);
    }

    #[test]
    fn test_truncate_message() {
        assert_eq!(truncate_message("short"), "short");
        assert_eq!(get_max_log_message_length(), MAX_LOG_MESSAGE_LENGTH);

        let long = "é".repeat(MAX_LOG_MESSAGE_LENGTH);
        let truncated = truncate_message(&long);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= MAX_LOG_MESSAGE_LENGTH + 3);
    }
}
