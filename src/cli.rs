//! CLI domain: parse, route, help, output, and presentation only.
//! No domain logic; the route table dispatches to the loader, prober, builder and executor.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::{format_warning, map_error};
pub use parse::{Cli, Commands};
pub use presentation::{format_activation, format_setup_list};
pub use route::RunContext;
