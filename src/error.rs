//! Error types for the disparrange display layout tool.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Exit code when the requested profile is not defined.
pub const EXIT_PROFILE_NOT_FOUND: i32 = 1;
/// Exit code when a profile names an output the control utility does not report.
pub const EXIT_UNKNOWN_OUTPUT: i32 = 2;
/// Exit code when no output would be activated.
pub const EXIT_NO_OUTPUTS: i32 = 3;
/// Exit code when the external control utility could not be run to completion.
pub const EXIT_TOOL_FAILURE: i32 = 4;
/// Exit code for profile file and configuration problems.
pub const EXIT_CONFIG: i32 = 5;

/// Profile file errors
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Cannot read profile file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in profile file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed profile file {path:?}: {message}")]
    Format { path: PathBuf, message: String },
}

/// Failures running the external display control utility
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` did not finish within {timeout:?}")]
    Timeout { program: String, timeout: Duration },

    #[error("I/O error while running `{program}`: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors turning a profile into output argument groups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("Invalid display setup name: {0}")]
    ProfileNotFound(String),

    #[error("Output \"{0}\" does not exist")]
    UnknownOutput(String),

    #[error("No connected displays were configured - aborting")]
    NoOutputsConfigured,
}

/// Top-level error surfaced by the CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ApiError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ApiError::Plan(PlanError::ProfileNotFound(_)) => EXIT_PROFILE_NOT_FOUND,
            ApiError::Plan(PlanError::UnknownOutput(_)) => EXIT_UNKNOWN_OUTPUT,
            ApiError::Plan(PlanError::NoOutputsConfigured) => EXIT_NO_OUTPUTS,
            ApiError::Tool(_) => EXIT_TOOL_FAILURE,
            ApiError::Profile(_) | ApiError::ConfigError(_) => EXIT_CONFIG,
        }
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
