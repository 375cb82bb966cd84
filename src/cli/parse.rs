//! CLI parse: clap types for disparrange. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

const LONG_ABOUT: &str = "\
Display setup configuration tool for window managers such as i3.

Activates the outputs listed for a named setup with the given mode and
position, and turns every other output off, using a single xrandr call.

Setups are defined in a JSON file:

{
    \"setup-name\": [
        {\"output\": \"eDP-1\", \"mode\": [1920, 1080], \"pos\": [1920, 0]},
        {\"output\": \"DP-2-1\"}
    ]
}

- \"output\": name of the display output (see `xrandr --listmonitors`)
- \"mode\" (optional): resolution; defaults to auto, usually the native one
- \"pos\" (optional): top-left corner of the output; defaults to [0, 0]";

/// disparrange - apply named display setups through xrandr
#[derive(Parser, Debug)]
#[command(name = "disparrange")]
#[command(about = "Apply named display setups through xrandr")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    /// Name of display setup to activate. Leave empty to list available setups
    pub setup: Option<String>,

    /// Display setups JSON file (relative paths resolve next to the executable)
    #[arg(short = 'j', long = "jsonfile")]
    pub jsonfile: Option<PathBuf>,

    /// Print the assembled command and ask the control utility for a no-op run
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// List names of available setups in the JSON file
    #[arg(short = 'l', long)]
    pub list_setups: bool,

    /// Configuration file path (replaces the global config file)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Timeout in seconds for each control utility invocation
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// Enable diagnostic logging at debug level
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// What a single run does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the setup names defined in the profile file
    List,
    /// Activate one setup
    Apply { setup: String, dry_run: bool },
}

impl Cli {
    /// Listing wins when requested explicitly or when no setup is named.
    pub fn command(&self) -> Commands {
        match (&self.setup, self.list_setups) {
            (Some(setup), false) => Commands::Apply {
                setup: setup.clone(),
                dry_run: self.dry_run,
            },
            _ => Commands::List,
        }
    }
}
