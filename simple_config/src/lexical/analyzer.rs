//! Core lexer implementation
//!
//! Turns a character stream into tokens one at a time. The lexer owns the
//! line counter, so a single lexer should read a single stream.

use super::stream::CharStream;
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tokens::{Token, TokenKind};
use crate::utils::text::to_uppered;
use crate::{log_debug, log_error, log_success};
use std::collections::HashMap;

/// Lexical analysis errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexerError {
    #[error("Unexpected character {character:?} on line {line}")]
    UnexpectedCharacter { character: char, line: u32 },

    #[error("Unterminated string on line {line}")]
    UnterminatedString { line: u32 },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::UnexpectedCharacter { .. } => codes::lexical::UNEXPECTED_CHARACTER,
            LexerError::UnterminatedString { .. } => codes::lexical::UNTERMINATED_STRING,
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            LexerError::UnexpectedCharacter { line, .. } | LexerError::UnterminatedString { line } => {
                *line
            }
        }
    }
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

/// Skipped between tokens. Newline is handled separately to count lines.
const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\x0C' | '\x0B')
}

const fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

const fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Digit set active while scanning a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberBase {
    Octal,
    Decimal,
    Hexadecimal,
}

impl NumberBase {
    const fn accepts(self, c: char) -> bool {
        match self {
            NumberBase::Octal => matches!(c, '0'..='7'),
            NumberBase::Decimal => c.is_ascii_digit(),
            // Upper case only; a lower-case `e` is the exponent marker
            NumberBase::Hexadecimal => matches!(c, '0'..='9' | 'A'..='F'),
        }
    }
}

// ============================================================================
// METRICS
// ============================================================================

/// Lexical analysis metrics
#[derive(Debug, Default, Clone)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub tokens_by_kind: HashMap<TokenKind, usize>,
    pub comment_count: usize,
    pub max_string_length: usize,
    /// Line counter value when the last token was produced
    pub lines_seen: u32,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        self.total_tokens += 1;
        self.lines_seen = self.lines_seen.max(token.line());

        if preferences.collect_detailed_metrics {
            *self.tokens_by_kind.entry(token.kind()).or_insert(0) += 1;
        }

        if token.kind() == TokenKind::String {
            self.max_string_length = self.max_string_length.max(token.lexeme().len());
        }

        if preferences.log_tokens {
            log_debug!("Token produced",
                "kind" => token.kind(),
                "lexeme" => token.lexeme(),
                "line" => token.line()
            );
        }
    }

    pub(crate) fn record_comment(&mut self) {
        self.comment_count += 1;
    }

    pub fn count_of(&self, kind: TokenKind) -> usize {
        self.tokens_by_kind.get(&kind).copied().unwrap_or(0)
    }
}

// ============================================================================
// LEXER
// ============================================================================

/// Configuration lexer
pub struct ConfigLexer {
    line: u32,
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl ConfigLexer {
    pub fn new() -> Self {
        Self::with_preferences(LexicalPreferences::default())
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            line: 1,
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    /// Current line counter (1-based)
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    /// Return to line 1 with empty metrics, ready for a new stream
    pub fn reset(&mut self) {
        self.line = 1;
        self.metrics = LexicalMetrics::default();
    }

    /// Tokenize the whole stream. The result always ends with exactly one
    /// `EndOfFile` token.
    pub fn scan(&mut self, stream: &mut CharStream<'_>) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token(stream)?;
            let done = token.is_end_of_file();
            tokens.push(token);
            if done {
                break;
            }
        }

        log_success!(codes::success::TOKENIZATION_COMPLETE, "Tokenization completed",
            "tokens" => tokens.len(),
            "lines" => self.line,
            "comments" => self.metrics.comment_count
        );

        Ok(tokens)
    }

    /// Produce the next token. Once input is exhausted every call returns
    /// `EndOfFile` on the current line.
    pub fn next_token(&mut self, stream: &mut CharStream<'_>) -> Result<Token, LexerError> {
        let token = self.lex_token(stream).inspect_err(|error| {
            log_error!(error.error_code(), &error.to_string(),
                line = error.line(),
                "lexer_line" => self.line
            );
        })?;

        self.metrics.record_token(&token, &self.preferences);
        Ok(token)
    }

    fn lex_token(&mut self, stream: &mut CharStream<'_>) -> Result<Token, LexerError> {
        loop {
            let Some(c) = stream.get() else {
                return Ok(Token::end_of_file(self.line));
            };

            match c {
                c if is_whitespace(c) => continue,
                '\n' => self.line += 1,
                '[' => return Ok(Token::new(TokenKind::LeftBracket, "[", self.line)),
                ']' => return Ok(Token::new(TokenKind::RightBracket, "]", self.line)),
                '=' => return Ok(Token::new(TokenKind::Equals, "=", self.line)),
                '"' => return self.lex_string(stream),
                '#' => self.skip_comment(stream),
                '-' if stream.peek().is_some_and(|next| next.is_ascii_digit()) => {
                    return Ok(self.lex_number(c, stream));
                }
                c if c.is_ascii_digit() => return Ok(self.lex_number(c, stream)),
                c if is_identifier_start(c) => return Ok(self.lex_word(c, stream)),
                character => {
                    return Err(LexerError::UnexpectedCharacter {
                        character,
                        line: self.line,
                    })
                }
            }
        }
    }

    /// Opening quote already consumed. Newlines are kept and counted; the
    /// token carries the line it started on.
    fn lex_string(&mut self, stream: &mut CharStream<'_>) -> Result<Token, LexerError> {
        let start_line = self.line;
        let mut content = String::new();

        loop {
            match stream.get() {
                None => return Err(LexerError::UnterminatedString { line: start_line }),
                Some('"') => return Ok(Token::new(TokenKind::String, content, start_line)),
                Some(c) => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    content.push(c);
                }
            }
        }
    }

    /// Discard up to, not including, the next newline
    fn skip_comment(&mut self, stream: &mut CharStream<'_>) {
        while stream.next_if(|c| c != '\n').is_some() {}
        self.metrics.record_comment();
    }

    /// `first` is a digit, or a `-` known to be followed by one
    fn lex_number(&mut self, first: char, stream: &mut CharStream<'_>) -> Token {
        let mut lexeme = String::from(first);
        let mut real = false;

        let lead = if first == '-' {
            // The caller peeked a digit
            stream.get().map(|digit| {
                lexeme.push(digit);
                digit
            })
        } else {
            Some(first)
        };

        let base = if lead == Some('0') {
            if let Some(x) = stream.next_if(|c| c == 'x') {
                lexeme.push(x);
                NumberBase::Hexadecimal
            } else {
                NumberBase::Octal
            }
        } else {
            NumberBase::Decimal
        };

        let take_digits = |lexeme: &mut String, stream: &mut CharStream<'_>| {
            while let Some(digit) = stream.next_if(|c| base.accepts(c)) {
                lexeme.push(digit);
            }
        };

        take_digits(&mut lexeme, stream);

        if let Some(dot) = stream.next_if(|c| c == '.') {
            real = true;
            lexeme.push(dot);
            take_digits(&mut lexeme, stream);
        }

        if let Some(marker) = stream.next_if(|c| c == 'e' || c == 'E') {
            real = true;
            lexeme.push(marker);
            take_digits(&mut lexeme, stream);
        }

        let kind = if real {
            TokenKind::RealNumber
        } else {
            TokenKind::Integer
        };
        Token::new(kind, lexeme, self.line)
    }

    fn lex_word(&mut self, first: char, stream: &mut CharStream<'_>) -> Token {
        let mut word = String::from(first);
        while let Some(c) = stream.next_if(is_identifier_continue) {
            word.push(c);
        }

        let kind = match to_uppered(&word).as_str() {
            "TRUE" | "FALSE" => TokenKind::Bool,
            _ => TokenKind::Identifier,
        };
        Token::new(kind, word, self.line)
    }
}

impl Default for ConfigLexer {
    fn default() -> Self {
        Self::new()
    }
}
