//! Command Builder
//!
//! Turns one profile and the probed outputs into per-output argument groups.
//! Every probed output ends up in exactly one group: activated outputs in
//! profile order, then `--off` groups in probe order.

use crate::error::PlanError;
use crate::probe::OutputRecord;
use crate::profile::{OutputSpec, ProfileSet};
use tracing::{debug, warn};

/// Whether a group switches its output on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Activate,
    Off,
}

/// Command-line tokens for a single output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentGroup {
    pub output: String,
    pub kind: GroupKind,
    pub args: Vec<String>,
}

impl ArgumentGroup {
    fn activate(spec: &OutputSpec) -> Self {
        let mut args = vec![
            "--output".to_string(),
            spec.output.clone(),
            "--pos".to_string(),
            spec.position().to_string(),
        ];
        match spec.mode {
            Some(mode) => {
                args.push("--mode".to_string());
                args.push(mode.to_string());
            }
            None => args.push("--auto".to_string()),
        }
        Self {
            output: spec.output.clone(),
            kind: GroupKind::Activate,
            args,
        }
    }

    fn off(name: &str) -> Self {
        Self {
            output: name.to_string(),
            kind: GroupKind::Off,
            args: vec!["--output".to_string(), name.to_string(), "--off".to_string()],
        }
    }
}

/// Everything needed for one apply invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyPlan {
    pub profile: String,
    pub groups: Vec<ArgumentGroup>,
    /// Non-fatal findings, e.g. a requested output that is disconnected
    pub warnings: Vec<String>,
}

impl ApplyPlan {
    /// Group for `output`, if any.
    pub fn group(&self, output: &str) -> Option<&ArgumentGroup> {
        self.groups.iter().find(|g| g.output == output)
    }

    pub fn activated(&self) -> impl Iterator<Item = &ArgumentGroup> {
        self.groups.iter().filter(|g| g.kind == GroupKind::Activate)
    }

    /// All group tokens, in group order.
    pub fn args(&self) -> Vec<String> {
        self.groups
            .iter()
            .flat_map(|g| g.args.iter().cloned())
            .collect()
    }

    /// Full command line: program, group tokens, then the dry-run flag if given.
    pub fn command_line(&self, program: &str, dry_run_flag: Option<&str>) -> Vec<String> {
        let mut line = Vec::with_capacity(1 + self.groups.len() * 6);
        line.push(program.to_string());
        line.extend(self.args());
        if let Some(flag) = dry_run_flag {
            line.push(flag.to_string());
        }
        line
    }
}

/// Build the plan for `profile_name`.
///
/// Fails without producing any group when the profile is unknown or names an
/// output that was not probed.
pub fn build_plan(
    profile_name: &str,
    profiles: &ProfileSet,
    probed: &[OutputRecord],
) -> Result<ApplyPlan, PlanError> {
    let specs = profiles
        .get(profile_name)
        .ok_or_else(|| PlanError::ProfileNotFound(profile_name.to_string()))?;

    let mut groups: Vec<ArgumentGroup> = Vec::new();
    let mut warnings = Vec::new();

    for spec in specs {
        let record = probed
            .iter()
            .find(|r| r.name == spec.output)
            .ok_or_else(|| PlanError::UnknownOutput(spec.output.clone()))?;

        if !record.connected {
            warn!(output = %spec.output, "Requested output is not connected");
            warnings.push(format!("{} is not connected", spec.output));
        }

        let group = ArgumentGroup::activate(spec);
        match groups.iter_mut().find(|g| g.output == group.output) {
            Some(existing) => *existing = group,
            None => groups.push(group),
        }
    }

    if groups.is_empty() {
        return Err(PlanError::NoOutputsConfigured);
    }

    for record in probed {
        if !groups.iter().any(|g| g.output == record.name) {
            groups.push(ArgumentGroup::off(&record.name));
        }
    }

    debug!(
        profile = profile_name,
        groups = groups.len(),
        "Built argument groups"
    );

    Ok(ApplyPlan {
        profile: profile_name.to_string(),
        groups,
        warnings,
    })
}
