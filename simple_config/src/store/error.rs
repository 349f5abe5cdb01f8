use crate::logging::{codes, Code};
use crate::utils::ConversionError;

/// Failures of a typed lookup against a finished store
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
    #[error("Key '{key}' not found in section '{section}'")]
    KeyNotFound { section: String, key: String },

    #[error("Invalid value for key '{key}' in section '{section}' on line {line}: {source}")]
    Conversion {
        section: String,
        key: String,
        line: u32,
        #[source]
        source: ConversionError,
    },
}

impl LookupError {
    pub fn error_code(&self) -> Code {
        match self {
            Self::KeyNotFound { .. } => codes::lookup::KEY_NOT_FOUND,
            Self::Conversion { source, .. } => source.error_code(),
        }
    }

    /// Line of the stored literal, if the key exists
    pub fn line(&self) -> Option<u32> {
        match self {
            Self::KeyNotFound { .. } => None,
            Self::Conversion { line, .. } => Some(*line),
        }
    }
}
