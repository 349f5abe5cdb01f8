// Internal modules
pub mod config;
pub mod file_processor;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod store;
pub mod syntax;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use lexical::{tokenize, ConfigLexer, LexerError};
pub use store::{ConfigStore, LookupError, LookupResult};
pub use syntax::{parse_file, parse_reader, parse_str, ConfigParser, SyntaxError, SyntaxResult};
pub use tokens::{Token, TokenKind};
pub use utils::ConversionError;
