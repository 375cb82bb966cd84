//! CLI route: run context and the single dispatch table.

use crate::cli::command_name;
use crate::cli::output::format_warning;
use crate::cli::parse::Commands;
use crate::cli::presentation::{format_activation, format_setup_list};
use crate::config::DisparrangeConfig;
use crate::error::{ApiError, PlanError, EXIT_TOOL_FAILURE};
use crate::executor::Executor;
use crate::plan::build_plan;
use crate::probe::{DisplayProber, XrandrProber};
use crate::process::ToolCommand;
use crate::profile::{load_profiles, resolve_profile_path, ProfileSet};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for one CLI run: configuration and the profile file in use.
pub struct RunContext {
    config: DisparrangeConfig,
    /// Profile file as named by the user or the configuration
    profile_source: PathBuf,
}

impl RunContext {
    /// `jsonfile` overrides `profiles.file` from the configuration.
    pub fn new(config: DisparrangeConfig, jsonfile: Option<PathBuf>) -> Self {
        let profile_source = jsonfile.unwrap_or_else(|| config.profiles.file.clone());
        Self {
            config,
            profile_source,
        }
    }

    /// Profile file path after resolving relative paths.
    pub fn profile_path(&self) -> Result<PathBuf, ApiError> {
        Ok(resolve_profile_path(
            &self.profile_source,
            self.config.profiles.base_dir.as_deref(),
        )?)
    }

    fn load_profiles(&self) -> Result<ProfileSet, ApiError> {
        let path = self.profile_path()?;
        debug!(path = %path.display(), "Loading display setups");
        Ok(load_profiles(&path)?)
    }

    /// Execute a command, returning the process exit code.
    pub fn execute(&self, command: &Commands) -> Result<i32, ApiError> {
        let prober = XrandrProber::new(ToolCommand::new(
            self.config.tool.command.clone(),
            self.config.tool.timeout(),
        ));
        self.execute_with(command, &prober)
    }

    /// Execute a command with an explicit prober.
    pub fn execute_with(
        &self,
        command: &Commands,
        prober: &dyn DisplayProber,
    ) -> Result<i32, ApiError> {
        let started = Instant::now();
        info!(command = command_name(command), "Command started");
        let result = match command {
            Commands::List => self.list(),
            Commands::Apply { setup, dry_run } => self.apply(setup, *dry_run, prober),
        };
        info!(
            command = command_name(command),
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn list(&self) -> Result<i32, ApiError> {
        let profiles = self.load_profiles()?;
        println!("{}", format_setup_list(&self.profile_source, &profiles));
        Ok(0)
    }

    fn apply(
        &self,
        setup: &str,
        dry_run: bool,
        prober: &dyn DisplayProber,
    ) -> Result<i32, ApiError> {
        let profiles = self.load_profiles()?;
        if profiles.get(setup).is_none() {
            return Err(PlanError::ProfileNotFound(setup.to_string()).into());
        }

        println!("{}", format_activation(setup));
        let probed = prober.probe()?;
        let plan = build_plan(setup, &profiles, &probed)?;
        for warning in &plan.warnings {
            eprintln!("{}", format_warning(warning));
        }

        let status = Executor::from_config(&self.config.tool).apply(&plan, dry_run)?;
        Ok(status.code().unwrap_or(EXIT_TOOL_FAILURE))
    }
}
