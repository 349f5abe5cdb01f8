//! Token system for configuration text
//!
//! A token is immutable once the lexer produces it: `kind`, `lexeme` and
//! `line` are only readable through accessors.
//!
//! ## Token Kinds
//!
//! - **Symbols**: `[`, `]`, `=`
//! - **Literals**: integers (decimal, octal-looking, hex), real numbers,
//!   double-quoted strings and case-insensitive `true`/`false`
//! - **Identifiers**: section names and keys
//! - **EndOfFile**: emitted once input is exhausted, and again on every
//!   later request
//!
//! Only literal tokens end up in the store.

pub mod token;

pub use token::{Token, TokenKind};
