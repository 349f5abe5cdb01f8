//! File processor module: turns a path into configuration source text
//!
//! Enforces the compile-time maximum file size and UTF-8 decoding before any
//! text reaches the lexer.

mod processor;

use crate::config::runtime::FileProcessorPreferences;
use std::path::Path;

pub use processor::{FileMetadata, FileProcessingResult, FileProcessor, FileProcessorError};

/// Process a file with default settings
pub fn process_file(file_path: impl AsRef<Path>) -> Result<FileProcessingResult, FileProcessorError> {
    FileProcessor::new().process_file(file_path)
}

/// Create a file processor from runtime preferences
pub fn create_processor_from_preferences(prefs: FileProcessorPreferences) -> FileProcessor {
    FileProcessor::from_preferences(prefs)
}

/// Get the compile-time maximum file size limit
pub fn get_max_file_size() -> u64 {
    FileProcessor::max_file_size()
}
