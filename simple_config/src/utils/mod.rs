//! Shared helpers for the lexer, parser and store
//!
//! `text` holds the ASCII trimming and case helpers, `convert` turns literal
//! text into typed scalars.

pub mod convert;
pub mod text;

pub use convert::{str_to_bool, str_to_double, str_to_int, ConversionError};
pub use text::{ltrim, ltrimmed, rtrim, rtrimmed, to_upper, to_uppered, trim, trimmed};
