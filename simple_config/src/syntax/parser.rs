//! Configuration parser
//!
//! Pulls tokens from the lexer one at a time and drives a small state
//! machine: section headers switch the current section, assignments store a
//! literal under the current section. The first error aborts the parse.

use crate::config::runtime::{
    FileProcessorPreferences, LexicalPreferences, ParserPreferences, RuntimeConfig,
};
use crate::file_processor::FileProcessor;
use crate::lexical::{CharStream, ConfigLexer};
use crate::logging::codes;
use crate::store::{ConfigStore, TOP_LEVEL};
use crate::syntax::error::{SyntaxError, SyntaxResult};
use crate::tokens::{Token, TokenKind};
use crate::{log_debug, log_error, log_success, log_warning};
use std::io::Read;
use std::path::Path;

/// What the parser expects next
#[derive(Debug, Clone, PartialEq, Eq)]
enum ParserState {
    /// Between statements: a header, a key or end of input
    Statement,
    /// After `[`
    SectionName,
    /// After `[name`
    SectionClose,
    /// After a key
    Equals { key: String },
    /// After `key =`
    Value { key: String },
}

/// Parser that owns the resulting store between parses
pub struct ConfigParser {
    lexer: ConfigLexer,
    store: ConfigStore,
    preferences: ParserPreferences,
    file_preferences: FileProcessorPreferences,
}

impl ConfigParser {
    pub fn new() -> Self {
        Self::with_preferences(ParserPreferences::default(), LexicalPreferences::default())
    }

    pub fn with_preferences(preferences: ParserPreferences, lexical: LexicalPreferences) -> Self {
        Self {
            lexer: ConfigLexer::with_preferences(lexical),
            store: ConfigStore::new(),
            preferences,
            file_preferences: FileProcessorPreferences::default(),
        }
    }

    pub fn from_runtime_config(config: &RuntimeConfig) -> Self {
        let mut parser = Self::with_preferences(config.parser.clone(), config.lexical.clone());
        parser.file_preferences = config.file_processor.clone();
        parser
    }

    /// Store produced by the most recent parse
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn into_store(self) -> ConfigStore {
        self.store
    }

    /// Lines consumed by the most recent parse
    pub fn lines_read(&self) -> u32 {
        self.lexer.line()
    }

    /// Parse `text` into a fresh store
    pub fn parse_str(&mut self, text: &str) -> SyntaxResult<&ConfigStore> {
        self.lexer.reset();
        self.store = ConfigStore::new();

        log_debug!("Starting configuration parse", "bytes" => text.len());

        let mut stream = CharStream::new(text);
        if let Err(error) = self.run(&mut stream) {
            // A failed parse leaves nothing half-built behind
            self.store = ConfigStore::new();
            return Err(error);
        }

        if self.preferences.log_completion {
            log_success!(codes::success::PARSE_COMPLETE, "Configuration parsed",
                "sections" => self.store.section_count(),
                "keys" => self.store.len(),
                "lines" => self.lexer.line()
            );
        }

        Ok(&self.store)
    }

    /// Read the whole stream and parse it. Invalid UTF-8 is an I/O error.
    pub fn parse_reader(&mut self, mut reader: impl Read) -> SyntaxResult<&ConfigStore> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| Self::read_failure(e.to_string()))?;

        let text = String::from_utf8(bytes).map_err(|e| Self::read_failure(e.to_string()))?;
        self.parse_str(&text)
    }

    /// Read and parse a file through the file processor
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> SyntaxResult<&ConfigStore> {
        let processor = FileProcessor::from_preferences(self.file_preferences.clone());
        let result = processor.process_file(path)?;
        self.parse_str(&result.source)
    }

    fn read_failure(message: String) -> SyntaxError {
        let error = SyntaxError::io(message);
        log_error!(error.error_code(), "Failed to read configuration source",
            "error" => error
        );
        error
    }

    fn run(&mut self, stream: &mut CharStream<'_>) -> SyntaxResult<()> {
        let mut section = TOP_LEVEL.to_string();
        let mut state = ParserState::Statement;

        loop {
            // Lexer errors are logged by the lexer itself
            let token = self.lexer.next_token(stream)?;

            state = match (state, token.kind()) {
                (ParserState::Statement, TokenKind::EndOfFile) => return Ok(()),
                (ParserState::Statement, TokenKind::LeftBracket) => ParserState::SectionName,
                (ParserState::Statement, TokenKind::Identifier) => ParserState::Equals {
                    key: token.lexeme().to_string(),
                },
                (ParserState::Statement, _) => {
                    return Err(Self::fail(SyntaxError::expected_identifier_or_bracket(
                        &token,
                    )))
                }

                (ParserState::SectionName, TokenKind::Identifier) => {
                    section = token.lexeme().to_string();
                    ParserState::SectionClose
                }
                (ParserState::SectionName, _) => {
                    return Err(Self::fail(SyntaxError::expected_identifier(&token)))
                }

                (ParserState::SectionClose, TokenKind::RightBracket) => {
                    log_debug!("Entered section", "section" => section, "line" => token.line());
                    ParserState::Statement
                }
                (ParserState::SectionClose, _) => {
                    return Err(Self::fail(SyntaxError::expected_right_bracket(&token)))
                }

                (ParserState::Equals { key }, TokenKind::Equals) => ParserState::Value { key },
                (ParserState::Equals { .. }, _) => {
                    return Err(Self::fail(SyntaxError::expected_equals(&token)))
                }

                (ParserState::Value { key }, kind) if kind.is_literal() => {
                    self.assign(&section, &key, token);
                    ParserState::Statement
                }
                (ParserState::Value { .. }, _) => {
                    return Err(Self::fail(SyntaxError::expected_literal(&token)))
                }
            };
        }
    }

    fn assign(&mut self, section: &str, key: &str, token: Token) {
        let line = token.line();
        let replaced = self.store.insert(section, key, token);

        if let Some(previous) = replaced {
            if self.preferences.warn_on_overwrite {
                log_warning!("Key assigned more than once; keeping the last value",
                    "section" => section,
                    "key" => key,
                    "previous_line" => previous.line(),
                    "line" => line
                );
            }
        }
    }

    fn fail(error: SyntaxError) -> SyntaxError {
        let line = error.line().unwrap_or_default();
        log_error!(error.error_code(), &error.to_string(), line = line);
        error
    }
}

impl Default for ConfigParser {
    fn default() -> Self {
        Self::new()
    }
}
