//! Log events and their plain and JSON renderings

use super::codes::Code;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Log severity levels, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
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
}

/// Codes for events that carry no registered code
pub const GENERIC_WARNING: Code = Code::new("W000");
pub const GENERIC_INFO: Code = Code::new("I000");
pub const GENERIC_DEBUG: Code = Code::new("D000");

/// One logged occurrence
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub timestamp: SystemTime,
    pub level: LogLevel,
    pub code: Code,
    pub message: String,
    /// Source line the event refers to, when there is one
    pub line: Option<u32>,
    pub context: HashMap<String, String>,
}

impl LogEvent {
    fn new(level: LogLevel, code: Code, message: &str) -> Self {
        Self {
            timestamp: SystemTime::now(),
            level,
            code,
            message: super::config::truncate_message(message),
            line: None,
            context: HashMap::new(),
        }
    }

    pub fn error(code: Code, message: &str) -> Self {
        Self::new(LogLevel::Error, code, message)
    }

    pub fn warning(message: &str) -> Self {
        Self::new(LogLevel::Warning, GENERIC_WARNING, message)
    }

    pub fn info(message: &str) -> Self {
        Self::new(LogLevel::Info, GENERIC_INFO, message)
    }

    /// Info-level event carrying a success code
    pub fn success(code: Code, message: &str) -> Self {
        Self::new(LogLevel::Info, code, message)
    }

    pub fn debug(message: &str) -> Self {
        Self::new(LogLevel::Debug, GENERIC_DEBUG, message)
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_context(mut self, key: &str, value: &str) -> Self {
        self.context.insert(key.to_string(), value.to_string());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == LogLevel::Error
    }

    pub fn is_warning(&self) -> bool {
        self.level == LogLevel::Warning
    }

    pub fn is_info(&self) -> bool {
        self.level == LogLevel::Info
    }

    pub fn is_debug(&self) -> bool {
        self.level == LogLevel::Debug
    }

    pub fn category(&self) -> &'static str {
        self.code.category()
    }

    fn sorted_context(&self) -> BTreeMap<&str, &str> {
        self.context
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    /// Single line: `[LEVEL] CODE - message at line N`
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Multi-line rendering with registry metadata and sorted context
    pub fn format_detailed(&self) -> String {
        let mut lines = vec![
            self.to_string(),
            format!("  Category: {}", self.category()),
            format!("  Severity: {}", self.code.severity().as_str()),
        ];

        if self.is_error() {
            lines.push(format!("  Recoverable: {}", self.code.is_recoverable()));
            lines.push(format!("  Requires halt: {}", self.code.requires_halt()));
        }
        if let Some(metadata) = self.code.metadata() {
            lines.push(format!("  Description: {}", metadata.description));
            lines.push(format!("  Recommended action: {}", metadata.recommended_action));
        }
        if !self.context.is_empty() {
            lines.push("  Context:".to_string());
            lines.extend(
                self.sorted_context()
                    .into_iter()
                    .map(|(k, v)| format!("    {}: {}", k, v)),
            );
        }

        lines.join("\n")
    }

    /// JSON object for structured logging
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        let metadata = self
            .is_error()
            .then(|| self.code.metadata())
            .flatten()
            .map(|m| JsonErrorMetadata {
                recoverable: m.recoverable,
                requires_halt: m.requires_halt,
                description: m.description,
                recommended_action: m.recommended_action,
            });

        serde_json::to_string(&JsonEvent {
            timestamp: self
                .timestamp
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default(),
            level: self.level.as_str(),
            code: self.code.as_str(),
            message: &self.message,
            category: self.category(),
            severity: self.code.severity().as_str(),
            line: self.line,
            context: self.sorted_context(),
            error_metadata: metadata,
        })
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} - {}", self.level.as_str(), self.code, self.message)?;
        if let Some(line) = self.line {
            write!(f, " at line {}", line)?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    timestamp: u64,
    level: &'static str,
    code: &'static str,
    message: &'a str,
    category: &'static str,
    severity: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<u32>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    context: BTreeMap<&'a str, &'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_metadata: Option<JsonErrorMetadata>,
}

#[derive(Serialize)]
struct JsonErrorMetadata {
    recoverable: bool,
    requires_halt: bool,
    description: &'static str,
    recommended_action: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;

    #[test]
    fn test_error_event_creation() {
        let event = LogEvent::error(codes::file_processing::FILE_NOT_FOUND, "File not found");

        assert!(event.is_error());
        assert_eq!(event.code.as_str(), "E005");
        assert_eq!(event.message, "File not found");
        assert_eq!(event.category(), "FileProcessing");
    }

    #[test]
    fn test_generic_codes() {
        assert_eq!(LogEvent::warning("w").code, GENERIC_WARNING);
        assert_eq!(LogEvent::debug("d").code, GENERIC_DEBUG);
        assert!(LogEvent::success(codes::success::PARSE_COMPLETE, "Parsed").is_info());
    }

    #[test]
    fn test_format_with_line() {
        let event = LogEvent::error(codes::lexical::UNTERMINATED_STRING, "Unterminated string")
            .with_line(7);

        assert_eq!(event.format(), "[ERROR] E021 - Unterminated string at line 7");
        assert_eq!(
            LogEvent::info("plain").format(),
            "[INFO] I000 - plain"
        );
    }

    #[test]
    fn test_detailed_format_lists_context_in_order() {
        let event = LogEvent::error(codes::syntax::EXPECTED_EQUALS, "Expected '='")
            .with_context("found", "value")
            .with_context("expected", "=");
        let detailed = event.format_detailed();

        assert!(detailed.contains("Category: Syntax"));
        assert!(detailed.contains("Recoverable: "));
        let expected_at = detailed.find("expected: =").unwrap();
        let found_at = detailed.find("found: value").unwrap();
        assert!(expected_at < found_at);
    }

    #[test]
    fn test_json_formatting() {
        let event = LogEvent::error(codes::lookup::KEY_NOT_FOUND, "Key not found")
            .with_line(3)
            .with_context("key", "port");

        let json = event.format_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["level"], "ERROR");
        assert_eq!(value["code"], "E060");
        assert_eq!(value["line"], 3);
        assert_eq!(value["context"]["key"], "port");
        assert_eq!(value["error_metadata"]["recoverable"], true);
    }

    #[test]
    fn test_json_omits_empty_fields() {
        let json = LogEvent::debug("quiet").format_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value.get("line").is_none());
        assert!(value.get("context").is_none());
        assert!(value.get("error_metadata").is_none());
        assert_eq!(value["category"], "Unknown");
    }
}
