//! Disparrange: named display setups for xrandr
//!
//! Loads display setups from a JSON file, matches them against the outputs the
//! display control utility reports, and applies a setup with a single
//! invocation that also turns every unlisted output off.

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod plan;
pub mod probe;
pub mod process;
pub mod profile;
pub mod types;
