//! Reads configuration files: path resolution, size limit and UTF-8 decoding

use crate::config::compile_time::file_processing::{LARGE_FILE_THRESHOLD, MAX_FILE_SIZE};
use crate::config::runtime::FileProcessorPreferences;
use crate::logging::{codes, Code};
use crate::{log_debug, log_error, log_success, log_warning};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Failures while turning a path into source text
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FileProcessorError {
    #[error("Could not open file {path}: file not found")]
    FileNotFound { path: String },

    #[error("File too large: {size} bytes (max: {max_size})")]
    FileTooLarge { size: u64, max_size: u64 },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid UTF-8 encoding in file: {path}")]
    InvalidEncoding { path: String },

    #[error("I/O error reading file: {message}")]
    IoError { message: String },

    #[error("Invalid file path: {path}")]
    InvalidPath { path: String },
}

impl FileProcessorError {
    fn from_io(path: &Path, error: &io::Error) -> Self {
        let path_str = path.display().to_string();
        match error.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound { path: path_str },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path: path_str },
            io::ErrorKind::InvalidData => Self::InvalidEncoding { path: path_str },
            _ => Self::IoError {
                message: format!("{}: {}", path_str, error),
            },
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            Self::FileNotFound { .. } => codes::file_processing::FILE_NOT_FOUND,
            Self::FileTooLarge { .. } => codes::file_processing::FILE_TOO_LARGE,
            Self::PermissionDenied { .. } => codes::file_processing::PERMISSION_DENIED,
            Self::InvalidEncoding { .. } => codes::file_processing::INVALID_ENCODING,
            Self::IoError { .. } => codes::file_processing::IO_ERROR,
            Self::InvalidPath { .. } => codes::file_processing::INVALID_PATH,
        }
    }

    pub fn category(&self) -> &'static str {
        self.error_code().category()
    }

    pub fn is_recoverable(&self) -> bool {
        self.error_code().is_recoverable()
    }
}

/// What was learned about the file while reading it
#[derive(Debug, Clone)]
pub struct FileMetadata {
    /// Canonical file path
    pub path: PathBuf,
    pub size: u64,
    pub line_count: usize,
}

impl FileMetadata {
    pub fn human_readable_size(&self) -> String {
        const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

        let mut scaled = self.size as f64;
        let mut unit = 0;
        while scaled >= 1024.0 && unit + 1 < UNITS.len() {
            scaled /= 1024.0;
            unit += 1;
        }

        match unit {
            0 => format!("{} B", self.size),
            _ => format!("{:.2} {}", scaled, UNITS[unit]),
        }
    }

    /// Above the compile-time large file threshold
    pub fn is_large_file(&self) -> bool {
        self.size > LARGE_FILE_THRESHOLD
    }
}

#[derive(Debug, Clone)]
pub struct FileProcessingResult {
    pub source: String,
    pub metadata: FileMetadata,
    pub processing_duration: Duration,
}

impl FileProcessingResult {
    pub fn char_count(&self) -> usize {
        self.source.chars().count()
    }
}

/// Reads configuration files within the compile-time size limit
pub struct FileProcessor {
    preferences: FileProcessorPreferences,
}

impl FileProcessor {
    pub fn new() -> Self {
        Self::from_preferences(FileProcessorPreferences::default())
    }

    pub fn from_preferences(preferences: FileProcessorPreferences) -> Self {
        Self { preferences }
    }

    pub fn max_file_size() -> u64 {
        MAX_FILE_SIZE
    }

    /// Read a file and return its contents with metadata.
    ///
    /// The size limit is checked against the file's metadata and again while
    /// reading, so a file that grows after the check is still rejected.
    pub fn process_file(
        &self,
        file_path: impl AsRef<Path>,
    ) -> Result<FileProcessingResult, FileProcessorError> {
        let started = Instant::now();
        let requested = file_path.as_ref();

        log_debug!("Starting file processing", "file" => requested.display());

        if requested.as_os_str().is_empty() {
            return Err(reject(
                FileProcessorError::InvalidPath {
                    path: String::new(),
                },
                "Empty file path provided",
                requested,
            ));
        }

        let path = requested.canonicalize().map_err(|e| {
            reject(
                FileProcessorError::from_io(requested, &e),
                "Failed to resolve file path",
                requested,
            )
        })?;

        let file = File::open(&path).map_err(|e| {
            reject(
                FileProcessorError::from_io(&path, &e),
                "Failed to open file",
                &path,
            )
        })?;

        let size = self.checked_size(&file, &path)?;
        let source = read_limited(file, size, &path)?;

        let result = FileProcessingResult {
            metadata: FileMetadata {
                path,
                size: source.len() as u64,
                line_count: source.lines().count(),
            },
            source,
            processing_duration: started.elapsed(),
        };

        self.log_processing_success(&result);
        Ok(result)
    }

    /// Size from the open handle; rejects non-files and oversized files
    fn checked_size(&self, file: &File, path: &Path) -> Result<u64, FileProcessorError> {
        let metadata = file.metadata().map_err(|e| {
            reject(
                FileProcessorError::from_io(path, &e),
                "Failed to read file metadata",
                path,
            )
        })?;

        if !metadata.is_file() {
            return Err(reject(
                FileProcessorError::InvalidPath {
                    path: path.display().to_string(),
                },
                "Path is not a regular file",
                path,
            ));
        }

        let size = metadata.len();
        if size > MAX_FILE_SIZE {
            return Err(reject(
                FileProcessorError::FileTooLarge {
                    size,
                    max_size: MAX_FILE_SIZE,
                },
                "File exceeds compile-time maximum size limit",
                path,
            ));
        }

        if size > LARGE_FILE_THRESHOLD && self.preferences.warn_on_large_files {
            log_warning!("Configuration file is unusually large",
                "file" => path.display(),
                "size_bytes" => size,
                "threshold_bytes" => LARGE_FILE_THRESHOLD
            );
        }

        Ok(size)
    }

    fn log_processing_success(&self, result: &FileProcessingResult) {
        let metadata = &result.metadata;

        if self.preferences.enable_performance_logging {
            log_success!(codes::success::FILE_PROCESSING_SUCCESS,
                "File processed successfully with performance metrics",
                "file" => metadata.path.display(),
                "size_bytes" => metadata.size,
                "size_human" => metadata.human_readable_size(),
                "lines" => metadata.line_count,
                "duration_ms" => format!("{:.2}", result.processing_duration.as_secs_f64() * 1000.0)
            );
        } else {
            log_success!(codes::success::FILE_PROCESSING_SUCCESS,
                "File processed successfully",
                "file" => metadata.path.display(),
                "size_bytes" => metadata.size,
                "lines" => metadata.line_count
            );
        }
    }
}

impl Default for FileProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Read at most one byte past the limit and decode as UTF-8
fn read_limited(file: File, expected: u64, path: &Path) -> Result<String, FileProcessorError> {
    let mut bytes = Vec::with_capacity(expected as usize);
    file.take(MAX_FILE_SIZE + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| {
            reject(
                FileProcessorError::from_io(path, &e),
                "Failed to read file contents",
                path,
            )
        })?;

    if bytes.len() as u64 > MAX_FILE_SIZE {
        return Err(reject(
            FileProcessorError::FileTooLarge {
                size: bytes.len() as u64,
                max_size: MAX_FILE_SIZE,
            },
            "File grew past the maximum size while reading",
            path,
        ));
    }

    String::from_utf8(bytes).map_err(|e| {
        reject(
            FileProcessorError::InvalidEncoding {
                path: path.display().to_string(),
            },
            &format!(
                "File is not valid UTF-8 after byte {}",
                e.utf8_error().valid_up_to()
            ),
            path,
        )
    })
}

/// Log a failure with its path and hand the error back
fn reject(error: FileProcessorError, message: &str, path: &Path) -> FileProcessorError {
    log_error!(error.error_code(), message,
        "path" => path.display(),
        "error" => error
    );
    error
}
