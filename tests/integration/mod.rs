//! Integration tests for the disparrange CLI and library

mod cli_list;
mod xdg_config;
