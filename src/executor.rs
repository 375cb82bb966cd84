//! Executor: one invocation of the control utility for a whole plan.

use crate::config::ToolConfig;
use crate::error::ToolError;
use crate::plan::ApplyPlan;
use crate::process::ToolCommand;
use std::process::ExitStatus;
use tracing::info;

/// Applies plans through the external control utility.
#[derive(Debug, Clone)]
pub struct Executor {
    command: ToolCommand,
    dry_run_flag: String,
}

impl Executor {
    pub fn new(command: ToolCommand, dry_run_flag: impl Into<String>) -> Self {
        Self {
            command,
            dry_run_flag: dry_run_flag.into(),
        }
    }

    pub fn from_config(config: &ToolConfig) -> Self {
        Self::new(
            ToolCommand::new(config.command.clone(), config.timeout()),
            config.dry_run_flag.clone(),
        )
    }

    /// Full command line for `plan`, program first.
    pub fn command_line(&self, plan: &ApplyPlan, dry_run: bool) -> Vec<String> {
        let flag = dry_run.then_some(self.dry_run_flag.as_str());
        plan.command_line(self.command.program(), flag)
    }

    /// Run the plan. In dry-run mode the assembled command line is printed first.
    /// A non-zero exit from the utility is returned, not turned into an error.
    pub fn apply(&self, plan: &ApplyPlan, dry_run: bool) -> Result<ExitStatus, ToolError> {
        let line = self.command_line(plan, dry_run);
        if dry_run {
            println!("command: {}", line.join(" "));
        }
        info!(profile = %plan.profile, dry_run, command = %line.join(" "), "Applying display setup");

        let status = self.command.status(&line[1..])?;
        info!(%status, "Display control utility finished");
        Ok(status)
    }
}
