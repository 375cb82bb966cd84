//! Display Prober
//!
//! Queries the control utility for the outputs it knows about. The text
//! scraping lives behind [`DisplayProber`] so another strategy can replace it
//! without touching plan building.

use crate::error::ToolError;
use crate::process::ToolCommand;
use crate::types::Mode;
use tracing::{debug, warn};

/// One output reported by the control utility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub name: String,
    pub connected: bool,
    pub modes: Vec<Mode>,
}

impl OutputRecord {
    pub fn new(name: impl Into<String>, connected: bool) -> Self {
        Self {
            name: name.into(),
            connected,
            modes: Vec::new(),
        }
    }

    pub fn with_modes(mut self, modes: impl IntoIterator<Item = Mode>) -> Self {
        self.modes.extend(modes);
        self
    }
}

/// Source of the current output list.
pub trait DisplayProber {
    /// Outputs in the order the graphics stack reports them.
    fn probe(&self) -> Result<Vec<OutputRecord>, ToolError>;
}

/// Probes by running the control utility without arguments and parsing its listing.
#[derive(Debug, Clone)]
pub struct XrandrProber {
    command: ToolCommand,
}

impl XrandrProber {
    pub fn new(command: ToolCommand) -> Self {
        Self { command }
    }
}

impl DisplayProber for XrandrProber {
    fn probe(&self) -> Result<Vec<OutputRecord>, ToolError> {
        let (status, stdout) = self.command.output(&[])?;
        if !status.success() {
            warn!(
                program = %self.command.program(),
                %status,
                "Display query exited unsuccessfully; parsing its output anyway"
            );
        }
        let outputs = parse_query_output(&String::from_utf8_lossy(&stdout));
        debug!(count = outputs.len(), "Probed outputs");
        Ok(outputs)
    }
}

/// Parse the query listing.
///
/// ```text
/// Screen 0: minimum 8 x 8, current 3840 x 1080, maximum 32767 x 32767
/// eDP-1 connected primary 1920x1080+0+0 (normal left inverted right) 309mm x 174mm
///    1920x1080     60.02*+  59.93
///    1680x1050     59.88
/// HDMI-1 disconnected (normal left inverted right x axis y axis)
/// ```
pub fn parse_query_output(text: &str) -> Vec<OutputRecord> {
    let mut outputs: Vec<OutputRecord> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() || line.starts_with("Screen") {
            continue;
        }

        if !line.starts_with(char::is_whitespace) {
            let mut tokens = line.split_whitespace();
            let Some(name) = tokens.next() else {
                continue;
            };
            let connected = tokens.next() == Some("connected");
            outputs.push(OutputRecord::new(name, connected));
            continue;
        }

        let Some(current) = outputs.last_mut() else {
            continue;
        };
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        match Mode::parse(token) {
            Some(mode) => current.modes.push(mode),
            None => debug!(output = %current.name, token, "Skipping non-mode line"),
        }
    }

    outputs
}
