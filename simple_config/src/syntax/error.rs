//! Error types for parsing configuration text
//!
//! Every variant maps to a logging code. Structural variants carry the
//! offending token's description and line.

use crate::file_processor::FileProcessorError;
use crate::lexical::LexerError;
use crate::logging::{codes, Code};
use crate::tokens::Token;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Parse failures. The first one aborts the parse.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lexical(#[from] LexerError),

    #[error("Expected section name after '[', found {found} on line {line}")]
    ExpectedIdentifier { found: String, line: u32 },

    #[error("Expected ']' after section name, found {found} on line {line}")]
    ExpectedRightBracket { found: String, line: u32 },

    #[error("Expected '=' after key, found {found} on line {line}")]
    ExpectedEquals { found: String, line: u32 },

    #[error("Expected literal value, found {found} on line {line}")]
    ExpectedLiteral { found: String, line: u32 },

    #[error("Expected key or section header, found {found} on line {line}")]
    ExpectedIdentifierOrBracket { found: String, line: u32 },

    #[error("Could not read configuration source: {message}")]
    Io { message: String },

    #[error(transparent)]
    FileProcessing(#[from] FileProcessorError),
}

impl SyntaxError {
    pub fn expected_identifier(found: &Token) -> Self {
        Self::ExpectedIdentifier {
            found: found.describe(),
            line: found.line(),
        }
    }

    pub fn expected_right_bracket(found: &Token) -> Self {
        Self::ExpectedRightBracket {
            found: found.describe(),
            line: found.line(),
        }
    }

    pub fn expected_equals(found: &Token) -> Self {
        Self::ExpectedEquals {
            found: found.describe(),
            line: found.line(),
        }
    }

    pub fn expected_literal(found: &Token) -> Self {
        Self::ExpectedLiteral {
            found: found.describe(),
            line: found.line(),
        }
    }

    pub fn expected_identifier_or_bracket(found: &Token) -> Self {
        Self::ExpectedIdentifierOrBracket {
            found: found.describe(),
            line: found.line(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Get the error code for this syntax error
    pub fn error_code(&self) -> Code {
        match self {
            Self::Lexical(error) => error.error_code(),
            Self::ExpectedIdentifier { .. } => codes::syntax::EXPECTED_IDENTIFIER,
            Self::ExpectedRightBracket { .. } => codes::syntax::EXPECTED_RIGHT_BRACKET,
            Self::ExpectedEquals { .. } => codes::syntax::EXPECTED_EQUALS,
            Self::ExpectedLiteral { .. } => codes::syntax::EXPECTED_LITERAL,
            Self::ExpectedIdentifierOrBracket { .. } => {
                codes::syntax::EXPECTED_IDENTIFIER_OR_BRACKET
            }
            Self::Io { .. } => codes::syntax::SOURCE_READ_FAILURE,
            Self::FileProcessing(error) => error.error_code(),
        }
    }

    /// Source line, when the error refers to one
    pub fn line(&self) -> Option<u32> {
        match self {
            Self::Lexical(error) => Some(error.line()),
            Self::ExpectedIdentifier { line, .. }
            | Self::ExpectedRightBracket { line, .. }
            | Self::ExpectedEquals { line, .. }
            | Self::ExpectedLiteral { line, .. }
            | Self::ExpectedIdentifierOrBracket { line, .. } => Some(*line),
            Self::Io { .. } | Self::FileProcessing(_) => None,
        }
    }

    /// Lexer and grammar errors, as opposed to problems reading the source
    pub fn is_structural(&self) -> bool {
        !matches!(self, Self::Io { .. } | Self::FileProcessing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenKind;

    #[test]
    fn test_constructors_capture_token() {
        let token = Token::new(TokenKind::Integer, "42", 6);
        let error = SyntaxError::expected_identifier(&token);

        assert_eq!(
            error,
            SyntaxError::ExpectedIdentifier {
                found: "42".to_string(),
                line: 6
            }
        );
        assert_eq!(error.line(), Some(6));
        assert_eq!(error.error_code(), codes::syntax::EXPECTED_IDENTIFIER);
    }

    #[test]
    fn test_messages() {
        let eof = Token::end_of_file(3);
        assert_eq!(
            SyntaxError::expected_literal(&eof).to_string(),
            "Expected literal value, found end of file on line 3"
        );

        let string = Token::new(TokenKind::String, "v", 1);
        assert_eq!(
            SyntaxError::expected_identifier_or_bracket(&string).to_string(),
            "Expected key or section header, found \"v\" on line 1"
        );
    }

    #[test]
    fn test_lexer_errors_pass_through_unchanged() {
        let lexer_error = LexerError::UnterminatedString { line: 2 };
        let error: SyntaxError = lexer_error.clone().into();

        assert_eq!(error.to_string(), lexer_error.to_string());
        assert_eq!(error.error_code(), codes::lexical::UNTERMINATED_STRING);
        assert_eq!(error.line(), Some(2));
        assert!(error.is_structural());
    }

    #[test]
    fn test_io_error() {
        let error = SyntaxError::io("stream did not contain valid UTF-8");
        assert_eq!(error.error_code(), codes::syntax::SOURCE_READ_FAILURE);
        assert_eq!(error.line(), None);
        assert!(!error.is_structural());
    }
}
