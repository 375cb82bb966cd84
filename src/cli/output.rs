//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain/service errors to a string for stderr.
/// Plan errors keep their plain wording; everything else is prefixed.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Plan(plan) => plan.to_string(),
        other => format!("error: {}", other),
    }
}

/// Render a non-fatal warning for stderr.
pub fn format_warning(message: &str) -> String {
    format!("warning: {}", message)
}
