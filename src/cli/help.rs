//! CLI command-name contract for log events.

use crate::cli::parse::Commands;

/// Command name string for log events ("list", "apply").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::List => "list",
        Commands::Apply { .. } => "apply",
    }
}
