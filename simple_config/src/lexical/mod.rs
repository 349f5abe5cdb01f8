//! Lexical analysis module
//!
//! Character stream with one character of pushback, and the lexer that
//! turns it into tokens with line tracking.

pub mod analyzer;
pub mod stream;

use crate::config::runtime::LexicalPreferences;
use crate::tokens::Token;

pub use analyzer::{ConfigLexer, LexerError, LexicalMetrics};
pub use stream::CharStream;

/// Tokenize `text` with a fresh lexer and default preferences
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexerError> {
    ConfigLexer::new().scan(&mut CharStream::new(text))
}

/// Tokenize with custom runtime preferences
pub fn tokenize_with_preferences(
    text: &str,
    preferences: LexicalPreferences,
) -> Result<Vec<Token>, LexerError> {
    ConfigLexer::with_preferences(preferences).scan(&mut CharStream::new(text))
}
