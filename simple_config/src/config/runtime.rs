// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileProcessorPreferences {
    /// Whether to log a warning for files above the large file threshold
    pub warn_on_large_files: bool,

    /// Whether to log read duration and size after each file
    pub enable_performance_logging: bool,
}

impl Default for FileProcessorPreferences {
    fn default() -> Self {
        Self {
            warn_on_large_files: env_flag(env_vars::FILE_WARN_ON_LARGE, true),
            enable_performance_logging: env_flag(env_vars::FILE_PERFORMANCE_LOGGING, false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalPreferences {
    /// Whether to collect per-kind token counts
    pub collect_detailed_metrics: bool,

    /// Whether to emit a debug event for every token produced
    pub log_tokens: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            collect_detailed_metrics: env_flag(env_vars::LEXICAL_DETAILED_METRICS, true),
            log_tokens: env_flag(env_vars::LEXICAL_LOG_TOKENS, false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserPreferences {
    /// Whether re-assigning a key in the same section logs a warning
    pub warn_on_overwrite: bool,

    /// Whether a successful parse logs a completion event with counts
    pub log_completion: bool,
}

impl Default for ParserPreferences {
    fn default() -> Self {
        Self {
            warn_on_overwrite: env_flag(env_vars::PARSER_WARN_ON_OVERWRITE, false),
            log_completion: env_flag(env_vars::PARSER_LOG_COMPLETION, true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging (user preference)
    pub use_structured_logging: bool,

    /// Whether to enable console output (user preference)
    pub enable_console_logging: bool,

    /// User preferred minimum log level
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env_flag(env_vars::LOGGING_USE_STRUCTURED, false),
            enable_console_logging: env_flag(env_vars::LOGGING_ENABLE_CONSOLE, false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub file_processor: FileProcessorPreferences,
    pub lexical: LexicalPreferences,
    pub parser: ParserPreferences,
    pub logging: LoggingPreferences,
}

/// Environment variable names for configuration
pub mod env_vars {
    // File Processor
    pub const FILE_WARN_ON_LARGE: &str = "SIMPLE_CONFIG_FILE_WARN_ON_LARGE";
    pub const FILE_PERFORMANCE_LOGGING: &str = "SIMPLE_CONFIG_FILE_PERFORMANCE_LOGGING";

    // Lexical
    pub const LEXICAL_DETAILED_METRICS: &str = "SIMPLE_CONFIG_LEXICAL_DETAILED_METRICS";
    pub const LEXICAL_LOG_TOKENS: &str = "SIMPLE_CONFIG_LEXICAL_LOG_TOKENS";

    // Parser
    pub const PARSER_WARN_ON_OVERWRITE: &str = "SIMPLE_CONFIG_PARSER_WARN_ON_OVERWRITE";
    pub const PARSER_LOG_COMPLETION: &str = "SIMPLE_CONFIG_PARSER_LOG_COMPLETION";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "SIMPLE_CONFIG_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "SIMPLE_CONFIG_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "SIMPLE_CONFIG_LOGGING_MIN_LEVEL";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("0"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("warning"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("info"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("3"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("verbose"), None);
    }

    #[test]
    fn test_log_level_ordering_matches_events() {
        assert!(LogLevel::Error < LogLevel::Debug);
        assert_eq!(
            LogLevel::Warning.to_events_log_level(),
            crate::logging::events::LogLevel::Warning
        );
    }

    #[test]
    fn test_env_flag_falls_back_on_missing_variable() {
        assert!(env_flag("SIMPLE_CONFIG_TEST_UNSET_FLAG", true));
        assert!(!env_flag("SIMPLE_CONFIG_TEST_UNSET_FLAG", false));
    }

    #[test]
    fn test_env_var_names_are_prefixed() {
        for name in [
            env_vars::FILE_WARN_ON_LARGE,
            env_vars::LEXICAL_LOG_TOKENS,
            env_vars::PARSER_WARN_ON_OVERWRITE,
            env_vars::LOGGING_MIN_LEVEL,
        ] {
            assert!(name.starts_with("SIMPLE_CONFIG_"));
        }
    }
}
