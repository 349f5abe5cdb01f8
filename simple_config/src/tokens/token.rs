//! Token and token kind definitions for configuration text
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every kind of token the lexer can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    LeftBracket,  // [
    RightBracket, // ]
    Equals,       // =
    Identifier,
    Integer,
    RealNumber,
    String,
    Bool,
    EndOfFile,
}

impl TokenKind {
    /// Literal kinds are the only ones stored as values
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::Integer | Self::RealNumber | Self::String | Self::Bool
        )
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::LeftBracket | Self::RightBracket | Self::Equals)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LeftBracket => "LeftBracket",
            Self::RightBracket => "RightBracket",
            Self::Equals => "Equals",
            Self::Identifier => "Identifier",
            Self::Integer => "Integer",
            Self::RealNumber => "RealNumber",
            Self::String => "String",
            Self::Bool => "Bool",
            Self::EndOfFile => "EndOfFile",
        }
    }

    /// All kinds, in declaration order
    pub const ALL: [TokenKind; 9] = [
        Self::LeftBracket,
        Self::RightBracket,
        Self::Equals,
        Self::Identifier,
        Self::Integer,
        Self::RealNumber,
        Self::String,
        Self::Bool,
        Self::EndOfFile,
    ];
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A lexed token: its kind, the exact source text and the line it starts on.
///
/// String tokens hold their content without the surrounding quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    /// End-of-input marker with an empty lexeme
    pub fn end_of_file(line: u32) -> Self {
        Self::new(TokenKind::EndOfFile, String::new(), line)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn is_literal(&self) -> bool {
        self.kind.is_literal()
    }

    pub fn is_end_of_file(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }

    /// Short description used in error messages: the lexeme, or the kind
    /// when the lexeme is empty
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EndOfFile => "end of file".to_string(),
            TokenKind::String => format!("\"{}\"", self.lexeme),
            _ => self.lexeme.clone(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) at line {}", self.kind, self.describe(), self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_classification() {
        let literals: Vec<_> = TokenKind::ALL
            .iter()
            .filter(|kind| kind.is_literal())
            .collect();
        assert_eq!(
            literals,
            [
                &TokenKind::Integer,
                &TokenKind::RealNumber,
                &TokenKind::String,
                &TokenKind::Bool
            ]
        );
        assert!(TokenKind::Equals.is_symbol());
        assert!(!TokenKind::Identifier.is_symbol());
    }

    #[test]
    fn test_accessors() {
        let token = Token::new(TokenKind::Integer, "-0x1F", 3);
        assert_eq!(token.kind(), TokenKind::Integer);
        assert_eq!(token.lexeme(), "-0x1F");
        assert_eq!(token.line(), 3);
        assert!(token.is_literal());

        let eof = Token::end_of_file(5);
        assert!(eof.is_end_of_file());
        assert_eq!(eof.lexeme(), "");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Token::new(TokenKind::String, "a b", 2).to_string(),
            "String(\"a b\") at line 2"
        );
        assert_eq!(
            Token::end_of_file(1).to_string(),
            "EndOfFile(end of file) at line 1"
        );
    }

    #[test]
    fn test_serde_shape() {
        let token = Token::new(TokenKind::Bool, "True", 1);
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["kind"], "Bool");
        assert_eq!(json["lexeme"], "True");
        assert_eq!(json["line"], 1);

        let back: Token = serde_json::from_value(json).unwrap();
        assert_eq!(back, token);
    }
}
