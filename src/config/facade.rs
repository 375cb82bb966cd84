//! Config loader facade: assembles sources in precedence order and validates the result.

use super::merge::merge_policy::builder_with_defaults;
use super::sources::{environment, global_file};
use super::DisparrangeConfig;
use crate::error::ApiError;
use config::{File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads [`DisparrangeConfig`] from defaults, files and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration: defaults, then the global config file, then environment.
    pub fn load() -> Result<DisparrangeConfig, ApiError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = environment::add_to_builder(builder);
        let config: DisparrangeConfig = builder.build()?.try_deserialize()?;
        debug!(?config, "Loaded configuration");
        Self::validated(config)
    }

    /// Load configuration from an explicit file in place of the global one.
    /// The file must exist; environment overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<DisparrangeConfig, ApiError> {
        let builder = builder_with_defaults()?.add_source(
            File::from(path)
                .format(FileFormat::Toml)
                .required(true),
        );
        let builder = environment::add_to_builder(builder);
        let config: DisparrangeConfig = builder.build()?.try_deserialize()?;
        debug!(config_path = %path.display(), ?config, "Loaded configuration file");
        Self::validated(config)
    }

    /// Load from `path` when given, otherwise from the default locations.
    pub fn load_optional(path: Option<&Path>) -> Result<DisparrangeConfig, ApiError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }

    /// Path of the global config file, if a home directory is known.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    fn validated(config: DisparrangeConfig) -> Result<DisparrangeConfig, ApiError> {
        config.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })?;
        Ok(config)
    }
}
