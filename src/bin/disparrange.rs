//! Disparrange CLI Binary
//!
//! Lists the display setups in a profile file or activates one of them.

use clap::Parser;
use disparrange::cli::{map_error, Cli, RunContext};
use disparrange::config::{ConfigLoader, DisparrangeConfig};
use disparrange::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let mut config = match ConfigLoader::load_optional(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(e.exit_code());
        }
    };
    if let Some(timeout) = cli.timeout_secs {
        config.tool.timeout_secs = timeout;
    }

    // Initialize logging early
    let env_filter_set = std::env::var_os("DISPARRANGE_LOG").is_some();
    let logging_config = build_logging_config(&cli, &config, env_filter_set);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(e.exit_code());
    }

    info!("Disparrange CLI starting");

    let context = RunContext::new(config, cli.jsonfile.clone());
    match context.execute(&cli.command()) {
        Ok(code) => {
            info!(code, "Command completed");
            process::exit(code);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(e.exit_code());
        }
    }
}

/// Build logging configuration from CLI args and the loaded config.
/// Logging stays off unless --verbose, --log-level, DISPARRANGE_LOG or
/// `logging.enabled` in the configuration turns it on.
fn build_logging_config(
    cli: &Cli,
    config: &DisparrangeConfig,
    env_filter_set: bool,
) -> LoggingConfig {
    let mut logging = config.logging.clone();

    if cli.verbose || cli.log_level.is_some() || env_filter_set {
        logging.enabled = true;
    }
    if !logging.enabled {
        return logging;
    }

    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }

    logging
}
