//! Error and success codes with their classification metadata
//!
//! Single source of truth for every code the crate logs. Error enums map
//! their variants onto these codes through `error_code()`.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// File processing error codes
pub mod file_processing {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const FILE_TOO_LARGE: Code = Code::new("E007");
    pub const PERMISSION_DENIED: Code = Code::new("E009");
    pub const INVALID_ENCODING: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
    pub const INVALID_PATH: Code = Code::new("E012");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const UNEXPECTED_CHARACTER: Code = Code::new("E020");
    pub const UNTERMINATED_STRING: Code = Code::new("E021");
}

/// Syntax analysis error codes
pub mod syntax {
    use super::Code;

    pub const EXPECTED_IDENTIFIER: Code = Code::new("E040");
    pub const EXPECTED_RIGHT_BRACKET: Code = Code::new("E041");
    pub const EXPECTED_EQUALS: Code = Code::new("E042");
    pub const EXPECTED_LITERAL: Code = Code::new("E043");
    pub const EXPECTED_IDENTIFIER_OR_BRACKET: Code = Code::new("E044");
    pub const SOURCE_READ_FAILURE: Code = Code::new("E045");
}

/// Lookup and conversion error codes
pub mod lookup {
    use super::Code;

    pub const KEY_NOT_FOUND: Code = Code::new("E060");
    pub const INVALID_FORMAT: Code = Code::new("E061");
    pub const OUT_OF_RANGE: Code = Code::new("E062");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");

    // File processing success codes
    pub const FILE_PROCESSING_SUCCESS: Code = Code::new("I006");

    // Lexical success codes
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");

    // Syntax success codes
    pub const PARSE_COMPLETE: Code = Code::new("I040");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

const REGISTERED_CODES: &[ErrorMetadata] = &[
    // System errors
    ErrorMetadata::new(
        "ERR001",
        "System",
        Severity::Critical,
        false,
        true,
        "Critical internal error",
        "File a bug report with the input that triggered it",
    ),
    ErrorMetadata::new(
        "ERR002",
        "System",
        Severity::High,
        false,
        true,
        "Logging or runtime initialization failed",
        "Initialize logging once before parsing",
    ),
    // File processing errors
    ErrorMetadata::new(
        "E005",
        "FileProcessing",
        Severity::High,
        true,
        false,
        "Configuration file not found",
        "Check the file path",
    ),
    ErrorMetadata::new(
        "E007",
        "FileProcessing",
        Severity::High,
        true,
        false,
        "Configuration file exceeds the maximum allowed size",
        "Reduce the file size or rebuild with a larger limit",
    ),
    ErrorMetadata::new(
        "E009",
        "FileProcessing",
        Severity::High,
        true,
        false,
        "Permission denied while accessing the file",
        "Check file permissions",
    ),
    ErrorMetadata::new(
        "E010",
        "FileProcessing",
        Severity::Medium,
        true,
        false,
        "File is not valid UTF-8",
        "Save the file with UTF-8 encoding",
    ),
    ErrorMetadata::new(
        "E011",
        "FileProcessing",
        Severity::High,
        true,
        false,
        "I/O error while reading the file",
        "Check disk and file system health",
    ),
    ErrorMetadata::new(
        "E012",
        "FileProcessing",
        Severity::Medium,
        true,
        false,
        "Path is empty or does not name a regular file",
        "Pass the path of a regular file",
    ),
    // Lexical errors
    ErrorMetadata::new(
        "E020",
        "Lexical",
        Severity::High,
        false,
        true,
        "Character cannot start any token",
        "Remove the character or quote the value",
    ),
    ErrorMetadata::new(
        "E021",
        "Lexical",
        Severity::High,
        false,
        true,
        "String literal is not terminated",
        "Add the closing double quote",
    ),
    // Syntax errors
    ErrorMetadata::new(
        "E040",
        "Syntax",
        Severity::High,
        false,
        true,
        "Section header is missing its name",
        "Write the header as [Name]",
    ),
    ErrorMetadata::new(
        "E041",
        "Syntax",
        Severity::High,
        false,
        true,
        "Section header is missing its closing bracket",
        "Close the header with ]",
    ),
    ErrorMetadata::new(
        "E042",
        "Syntax",
        Severity::High,
        false,
        true,
        "Key is not followed by '='",
        "Write assignments as key = value",
    ),
    ErrorMetadata::new(
        "E043",
        "Syntax",
        Severity::High,
        false,
        true,
        "Assignment value is not a literal",
        "Use an integer, real number, boolean or quoted string",
    ),
    ErrorMetadata::new(
        "E044",
        "Syntax",
        Severity::High,
        false,
        true,
        "Statement does not start with a key or section header",
        "Start each statement with a key or [Section]",
    ),
    ErrorMetadata::new(
        "E045",
        "Syntax",
        Severity::High,
        false,
        true,
        "Source stream could not be read as UTF-8 text",
        "Check the reader and the source encoding",
    ),
    // Lookup errors
    ErrorMetadata::new(
        "E060",
        "Lookup",
        Severity::Low,
        true,
        false,
        "Section or key is not present",
        "Check the section and key names or supply a default",
    ),
    ErrorMetadata::new(
        "E061",
        "Lookup",
        Severity::Low,
        true,
        false,
        "Stored value cannot be converted to the requested type",
        "Use the lookup matching the literal's type",
    ),
    ErrorMetadata::new(
        "E062",
        "Lookup",
        Severity::Low,
        true,
        false,
        "Stored value is outside the range of the requested type",
        "Use a smaller value or a wider lookup",
    ),
    // Success codes
    ErrorMetadata::new(
        "I004",
        "System",
        Severity::Low,
        true,
        false,
        "Logging initialized",
        "None",
    ),
    ErrorMetadata::new(
        "I006",
        "FileProcessing",
        Severity::Low,
        true,
        false,
        "File read successfully",
        "Continue to lexical analysis",
    ),
    ErrorMetadata::new(
        "I020",
        "Lexical",
        Severity::Low,
        true,
        false,
        "Tokenization completed",
        "Continue to parsing",
    ),
    ErrorMetadata::new(
        "I040",
        "Syntax",
        Severity::Low,
        true,
        false,
        "Configuration parsed",
        "Query values through the store",
    ),
];

/// Error metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

/// Initialize and get the error registry
fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        REGISTERED_CODES
            .iter()
            .map(|metadata| (metadata.code, metadata.clone()))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Registry entry for a code string
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Classification read from the registry. Unregistered codes (such as the
/// generic warning and debug codes) fall back to neutral defaults.
impl Code {
    pub fn metadata(&self) -> Option<&'static ErrorMetadata> {
        get_error_metadata(self.0)
    }

    pub fn category(&self) -> &'static str {
        self.metadata().map_or("Unknown", |m| m.category)
    }

    pub fn severity(&self) -> Severity {
        self.metadata().map_or(Severity::Medium, |m| m.severity)
    }

    pub fn is_recoverable(&self) -> bool {
        self.metadata().map_or(true, |m| m.recoverable)
    }

    /// Whether the failure stops the current parse
    pub fn requires_halt(&self) -> bool {
        self.metadata().is_some_and(|m| m.requires_halt)
    }

    pub fn description(&self) -> &'static str {
        self.metadata().map_or("Unknown error", |m| m.description)
    }

    pub fn recommended_action(&self) -> &'static str {
        self.metadata()
            .map_or("No specific action available", |m| m.recommended_action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_declared_code_is_registered() {
        let declared = [
            system::INTERNAL_ERROR,
            system::INITIALIZATION_FAILURE,
            file_processing::FILE_NOT_FOUND,
            file_processing::FILE_TOO_LARGE,
            file_processing::PERMISSION_DENIED,
            file_processing::INVALID_ENCODING,
            file_processing::IO_ERROR,
            file_processing::INVALID_PATH,
            lexical::UNEXPECTED_CHARACTER,
            lexical::UNTERMINATED_STRING,
            syntax::EXPECTED_IDENTIFIER,
            syntax::EXPECTED_RIGHT_BRACKET,
            syntax::EXPECTED_EQUALS,
            syntax::EXPECTED_LITERAL,
            syntax::EXPECTED_IDENTIFIER_OR_BRACKET,
            syntax::SOURCE_READ_FAILURE,
            lookup::KEY_NOT_FOUND,
            lookup::INVALID_FORMAT,
            lookup::OUT_OF_RANGE,
            success::SYSTEM_INITIALIZATION_COMPLETED,
            success::FILE_PROCESSING_SUCCESS,
            success::TOKENIZATION_COMPLETE,
            success::PARSE_COMPLETE,
        ];

        for code in declared {
            assert!(
                get_error_metadata(code.as_str()).is_some(),
                "code {} has no metadata",
                code
            );
        }
        assert_eq!(get_error_registry().len(), declared.len());
    }

    #[test]
    fn test_classification() {
        assert_eq!(lexical::UNTERMINATED_STRING.category(), "Lexical");
        assert!(lexical::UNTERMINATED_STRING.requires_halt());
        assert!(lookup::KEY_NOT_FOUND.is_recoverable());
        assert!(!lookup::KEY_NOT_FOUND.requires_halt());
        assert_eq!(lookup::KEY_NOT_FOUND.severity(), Severity::Low);
    }

    #[test]
    fn test_unknown_code_defaults() {
        let unknown = Code::new("W000");

        assert!(unknown.metadata().is_none());
        assert_eq!(unknown.description(), "Unknown error");
        assert_eq!(unknown.category(), "Unknown");
        assert_eq!(unknown.severity(), Severity::Medium);
        assert!(!unknown.requires_halt());
    }
}
