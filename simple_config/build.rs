// build.rs - compile-time limits generated from config/<profile>.toml
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

const PROFILE_VAR: &str = "SIMPLE_CONFIG_BUILD_PROFILE";
const CONFIG_DIR_VAR: &str = "SIMPLE_CONFIG_CONFIG_DIR";

/// Hard ceiling regardless of profile
const ABSOLUTE_MAX_FILE_SIZE: u64 = 1_000_000_000;
const PRODUCTION_MAX_FILE_SIZE: u64 = 50_000_000;

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct CompileTimeConfig {
    file_processing: FileProcessingLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct FileProcessingLimits {
    max_file_size: u64,
    large_file_threshold: u64,
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
}

impl CompileTimeConfig {
    /// Every violated limit, so one build reports all of them
    fn violations(&self, profile: &str) -> Vec<String> {
        let files = &self.file_processing;
        let logging = &self.logging;
        let mut problems = Vec::new();

        if files.max_file_size == 0 {
            problems.push("file_processing.max_file_size must be greater than zero".to_string());
        }
        if files.max_file_size > ABSOLUTE_MAX_FILE_SIZE {
            problems.push(format!(
                "file_processing.max_file_size {} exceeds the absolute maximum {}",
                files.max_file_size, ABSOLUTE_MAX_FILE_SIZE
            ));
        }
        if profile == "production" && files.max_file_size > PRODUCTION_MAX_FILE_SIZE {
            problems.push(format!(
                "file_processing.max_file_size {} is too high for production (max {})",
                files.max_file_size, PRODUCTION_MAX_FILE_SIZE
            ));
        }
        if files.large_file_threshold > files.max_file_size {
            problems.push("file_processing.large_file_threshold cannot exceed max_file_size".to_string());
        }
        if logging.log_buffer_size == 0 {
            problems.push("logging.log_buffer_size must be greater than zero".to_string());
        }
        if logging.max_log_message_length == 0 {
            problems.push("logging.max_log_message_length must be greater than zero".to_string());
        }

        problems
    }

    fn render(&self, profile: &str, source: &Path) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(out, "// Generated by build.rs from {} (profile: {})", source.display(), profile);
        let _ = writeln!(out, "pub mod compile_time {{");
        let _ = writeln!(out, "    pub mod file_processing {{");
        let _ = writeln!(out, "        pub const MAX_FILE_SIZE: u64 = {};", self.file_processing.max_file_size);
        let _ = writeln!(
            out,
            "        pub const LARGE_FILE_THRESHOLD: u64 = {};",
            self.file_processing.large_file_threshold
        );
        let _ = writeln!(out, "    }}");
        let _ = writeln!(out, "    pub mod logging {{");
        let _ = writeln!(out, "        pub const LOG_BUFFER_SIZE: usize = {};", self.logging.log_buffer_size);
        let _ = writeln!(
            out,
            "        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};",
            self.logging.max_log_message_length
        );
        let _ = writeln!(out, "    }}");
        let _ = writeln!(out, "}}");
        out
    }
}

fn config_path(profile: &str) -> PathBuf {
    let config_dir = env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| "config".to_string());
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());

    // Profiles live next to the workspace manifest
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir).to_path_buf();
    workspace_root.join(config_dir).join(format!("{}.toml", profile))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={}", PROFILE_VAR);
    println!("cargo:rerun-if-env-changed={}", CONFIG_DIR_VAR);

    let profile = env::var(PROFILE_VAR).unwrap_or_else(|_| "development".to_string());
    let path = config_path(&profile);
    println!("cargo:rerun-if-changed={}", path.display());

    let content = fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!(
            "Cannot read compile-time profile '{}' at {}: {}",
            profile,
            path.display(),
            e
        )
    });
    let config: CompileTimeConfig = toml::from_str(&content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", path.display(), e));

    let problems = config.violations(&profile);
    if !problems.is_empty() {
        panic!(
            "Invalid compile-time limits in {}:\n  {}",
            path.display(),
            problems.join("\n  ")
        );
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("constants.rs"), config.render(&profile, &path)).unwrap();
}
