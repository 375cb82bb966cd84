//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
/// Later sources override earlier ones key by key.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("tool.command", "xrandr")?
        .set_default("tool.dry_run_flag", "--dryrun")?
        .set_default("tool.timeout_secs", 10_i64)?
        .set_default("profiles.file", "displaysetups.json")
}
