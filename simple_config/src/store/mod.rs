//! Section-scoped value store and typed lookups
//!
//! The parser fills a [`ConfigStore`]; callers then query it read-only. The
//! empty section name is the implicit top-level scope. Typed lookups convert
//! the stored lexeme on demand and never coerce silently.

mod error;

pub use error::LookupError;

use crate::tokens::Token;
use crate::utils::{self, ConversionError};
use serde::Serialize;
use std::collections::HashMap;

/// Name of the implicit scope before the first section header
pub const TOP_LEVEL: &str = "";

pub type LookupResult<T> = Result<T, LookupError>;

/// Two-level map of section name to key to literal token
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ConfigStore {
    sections: HashMap<String, HashMap<String, Token>>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `token` under `section`/`key`, returning the value it replaced
    pub(crate) fn insert(&mut self, section: &str, key: &str, token: Token) -> Option<Token> {
        debug_assert!(token.is_literal());
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), token)
    }

    /// Raw literal token stored under `section`/`key`
    pub fn lookup(&self, section: &str, key: &str) -> LookupResult<&Token> {
        self.sections
            .get(section)
            .and_then(|keys| keys.get(key))
            .ok_or_else(|| LookupError::KeyNotFound {
                section: section.to_string(),
                key: key.to_string(),
            })
    }

    /// Lexeme exactly as written, without quotes for strings
    pub fn lookup_string(&self, section: &str, key: &str) -> LookupResult<&str> {
        self.lookup(section, key).map(Token::lexeme)
    }

    /// Integer value; a `0x` prefix selects hexadecimal, everything else is decimal
    pub fn lookup_integer(&self, section: &str, key: &str) -> LookupResult<i32> {
        self.convert(section, key, |text| utils::str_to_int(text, 0))
    }

    /// Decimal or scientific value; hexadecimal literals are a conversion error
    pub fn lookup_double(&self, section: &str, key: &str) -> LookupResult<f64> {
        self.convert(section, key, utils::str_to_double)
    }

    /// `true`/`false` in any case, or an integer where nonzero is true
    pub fn lookup_boolean(&self, section: &str, key: &str) -> LookupResult<bool> {
        self.convert(section, key, utils::str_to_bool)
    }

    pub fn lookup_top_level(&self, key: &str) -> LookupResult<&Token> {
        self.lookup(TOP_LEVEL, key)
    }

    pub fn lookup_string_top_level(&self, key: &str) -> LookupResult<&str> {
        self.lookup_string(TOP_LEVEL, key)
    }

    pub fn lookup_integer_top_level(&self, key: &str) -> LookupResult<i32> {
        self.lookup_integer(TOP_LEVEL, key)
    }

    pub fn lookup_double_top_level(&self, key: &str) -> LookupResult<f64> {
        self.lookup_double(TOP_LEVEL, key)
    }

    pub fn lookup_boolean_top_level(&self, key: &str) -> LookupResult<bool> {
        self.lookup_boolean(TOP_LEVEL, key)
    }

    fn convert<T>(
        &self,
        section: &str,
        key: &str,
        conversion: impl FnOnce(&str) -> Result<T, ConversionError>,
    ) -> LookupResult<T> {
        let token = self.lookup(section, key)?;
        conversion(token.lexeme()).map_err(|source| LookupError::Conversion {
            section: section.to_string(),
            key: key.to_string(),
            line: token.line(),
            source,
        })
    }

    /// Section names holding at least one key, sorted
    pub fn sections(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sections.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Keys of `section`, sorted; `None` if the section holds nothing
    pub fn keys(&self, section: &str) -> Option<Vec<&str>> {
        self.sections.get(section).map(|keys| {
            let mut names: Vec<&str> = keys.keys().map(String::as_str).collect();
            names.sort_unstable();
            names
        })
    }

    pub fn contains_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    pub fn contains_key(&self, section: &str, key: &str) -> bool {
        self.sections
            .get(section)
            .is_some_and(|keys| keys.contains_key(key))
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of stored values across all sections
    pub fn len(&self) -> usize {
        self.sections.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
