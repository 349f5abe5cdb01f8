//! Configuration module for simple_config
//! Compile-time limits come from the generated constants, runtime
//! preferences from the environment.

// Include generated constants from build.rs
// This file is generated at compile time from the TOML profile
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

pub mod runtime;

pub use runtime::{
    FileProcessorPreferences, LexicalPreferences, LoggingPreferences, ParserPreferences,
    RuntimeConfig,
};

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the configuration profile used during build
    pub fn profile() -> &'static str {
        option_env!("SIMPLE_CONFIG_BUILD_PROFILE").unwrap_or("development")
    }

    /// Returns the configuration directory used during build
    pub fn config_dir() -> &'static str {
        option_env!("SIMPLE_CONFIG_CONFIG_DIR").unwrap_or("config")
    }

    /// Returns configuration source information
    pub fn source_info() -> String {
        format!("Generated from {}/{}.toml", config_dir(), profile())
    }
}

#[cfg(test)]
mod tests {
    use super::compile_time::{file_processing, logging};
    use super::*;

    #[test]
    fn test_generated_limits_are_consistent() {
        assert!(file_processing::MAX_FILE_SIZE > 0);
        assert!(file_processing::LARGE_FILE_THRESHOLD <= file_processing::MAX_FILE_SIZE);
        assert!(logging::LOG_BUFFER_SIZE > 0);
    }

    #[test]
    fn test_source_info() {
        let info = build_info::source_info();
        assert!(info.starts_with("Generated from "));
        assert!(info.ends_with(".toml"));
    }
}
