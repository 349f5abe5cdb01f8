//! Syntax analysis: configuration text to [`ConfigStore`]
//!
//! ```text
//! config         := (section_header | assignment)* EOF
//! section_header := '[' IDENTIFIER ']'
//! assignment     := IDENTIFIER '=' literal
//! literal        := INTEGER | REAL_NUMBER | STRING | BOOL
//! ```

mod error;
mod parser;

pub use error::{SyntaxError, SyntaxResult};
pub use parser::ConfigParser;

use crate::store::ConfigStore;
use std::io::Read;
use std::path::Path;

/// Parse configuration text with default preferences
pub fn parse_str(text: &str) -> SyntaxResult<ConfigStore> {
    let mut parser = ConfigParser::new();
    parser.parse_str(text)?;
    Ok(parser.into_store())
}

/// Parse everything readable from `reader`
pub fn parse_reader(reader: impl Read) -> SyntaxResult<ConfigStore> {
    let mut parser = ConfigParser::new();
    parser.parse_reader(reader)?;
    Ok(parser.into_store())
}

/// Parse a configuration file
pub fn parse_file(path: impl AsRef<Path>) -> SyntaxResult<ConfigStore> {
    let mut parser = ConfigParser::new();
    parser.parse_file(path)?;
    Ok(parser.into_store())
}
