//! CLI presentation: text formatters for list and apply output.

use crate::profile::ProfileSet;
use std::path::Path;

/// Header line followed by one setup name per line.
pub fn format_setup_list(source: &Path, profiles: &ProfileSet) -> String {
    let mut out = format!("The following setups are defined in {}:", source.display());
    for name in profiles.names() {
        out.push('\n');
        out.push_str(name);
    }
    out
}

pub fn format_activation(setup: &str) -> String {
    format!("Activating display setup {}", setup)
}
