//! Configuration System
//!
//! Layered runtime configuration: built-in defaults, then the global config file
//! (or an explicit `--config` file), then `DISPARRANGE_`-prefixed environment
//! variables. Covers the control utility invocation, where profile files are
//! looked up, and logging.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisparrangeConfig {
    /// External display control utility settings
    #[serde(default)]
    pub tool: ToolConfig,

    /// Profile file lookup
    #[serde(default)]
    pub profiles: ProfilesConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How the external display control utility is invoked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Program name or path, used for both the query and the apply invocation
    #[serde(default = "default_command")]
    pub command: String,

    /// Flag appended in dry-run mode; the utility must treat it as a no-op switch
    #[serde(default = "default_dry_run_flag")]
    pub dry_run_flag: String,

    /// Upper bound for each invocation, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_command() -> String {
    "xrandr".to_string()
}

fn default_dry_run_flag() -> String {
    "--dryrun".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            dry_run_flag: default_dry_run_flag(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ToolConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Where profile files are found
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilesConfig {
    /// Profile file used when `--jsonfile` is not given
    #[serde(default = "default_profiles_file")]
    pub file: PathBuf,

    /// Base directory for relative profile paths (defaults to the executable's directory)
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
}

fn default_profiles_file() -> PathBuf {
    PathBuf::from("displaysetups.json")
}

impl Default for ProfilesConfig {
    fn default() -> Self {
        Self {
            file: default_profiles_file(),
            base_dir: None,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Tool(String),
    Profiles(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Tool(msg) => write!(f, "tool: {}", msg),
            ValidationError::Profiles(msg) => write!(f, "profiles: {}", msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl DisparrangeConfig {
    /// Validate the entire configuration, collecting every problem found.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.tool.command.trim().is_empty() {
            errors.push(ValidationError::Tool("command cannot be empty".to_string()));
        }
        if self.tool.dry_run_flag.trim().is_empty() {
            errors.push(ValidationError::Tool(
                "dry_run_flag cannot be empty".to_string(),
            ));
        }
        if self.tool.timeout_secs == 0 {
            errors.push(ValidationError::Tool(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.profiles.file.as_os_str().is_empty() {
            errors.push(ValidationError::Profiles("file cannot be empty".to_string()));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
