//! Profile Loader
//!
//! Reads the JSON profile file:
//!
//! ```json
//! {
//!     "setup-name": [
//!         {"output": "eDP-1", "mode": [1920, 1080], "pos": [1920, 0]},
//!         {"output": "DP-2-1"}
//!     ]
//! }
//! ```
//!
//! Every entry is validated when the file is loaded, so a malformed entry is
//! reported by profile name and index instead of surfacing during apply.

use crate::error::ProfileError;
use crate::types::{Mode, Position};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One requested output inside a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    pub output: String,
    pub mode: Option<Mode>,
    pub pos: Option<Position>,
}

impl OutputSpec {
    /// Requested position, defaulting to the origin.
    pub fn position(&self) -> Position {
        self.pos.unwrap_or_default()
    }
}

/// Wire shape of a profile entry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOutputSpec {
    output: String,
    #[serde(default)]
    mode: Option<[u32; 2]>,
    #[serde(default)]
    pos: Option<[i32; 2]>,
}

/// All profiles of one file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSet {
    profiles: Vec<(String, Vec<OutputSpec>)>,
}

impl ProfileSet {
    /// Profile names in the order they appear in the file.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|(name, _)| name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&[OutputSpec]> {
        self.profiles
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, specs)| specs.as_slice())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Parse profile file content. `path` is only used in error messages.
    pub fn from_json_str(content: &str, path: &Path) -> Result<Self, ProfileError> {
        let root: Value = serde_json::from_str(content).map_err(|source| ProfileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let format_err = |message: String| ProfileError::Format {
            path: path.to_path_buf(),
            message,
        };

        let Value::Object(map) = root else {
            return Err(format_err(
                "top level must be an object mapping setup names to output lists".to_string(),
            ));
        };

        let mut profiles = Vec::with_capacity(map.len());
        for (name, entries) in map {
            let Value::Array(entries) = entries else {
                return Err(format_err(format!(
                    "setup '{}' must be a list of output entries",
                    name
                )));
            };
            let mut specs = Vec::with_capacity(entries.len());
            for (index, entry) in entries.into_iter().enumerate() {
                let spec = parse_entry(entry)
                    .map_err(|e| format_err(format!("setup '{}' entry {}: {}", name, index, e)))?;
                specs.push(spec);
            }
            profiles.push((name, specs));
        }

        Ok(Self { profiles })
    }
}

impl FromIterator<(String, Vec<OutputSpec>)> for ProfileSet {
    fn from_iter<I: IntoIterator<Item = (String, Vec<OutputSpec>)>>(iter: I) -> Self {
        let mut profiles: Vec<(String, Vec<OutputSpec>)> = Vec::new();
        for (name, specs) in iter {
            match profiles.iter_mut().find(|(n, _)| *n == name) {
                Some(existing) => existing.1 = specs,
                None => profiles.push((name, specs)),
            }
        }
        Self { profiles }
    }
}

fn parse_entry(entry: Value) -> Result<OutputSpec, String> {
    if !entry.is_object() {
        return Err("entry must be an object".to_string());
    }
    let raw: RawOutputSpec = serde_json::from_value(entry).map_err(|e| e.to_string())?;

    if raw.output.trim().is_empty() {
        return Err("\"output\" must not be empty".to_string());
    }
    if let Some([w, h]) = raw.mode {
        if w == 0 || h == 0 {
            return Err(format!("\"mode\" must be positive, got [{}, {}]", w, h));
        }
    }

    Ok(OutputSpec {
        output: raw.output,
        mode: raw.mode.map(|[w, h]| Mode::new(w, h)),
        pos: raw.pos.map(|[x, y]| Position::new(x, y)),
    })
}

/// Resolve a profile file path. Absolute paths are kept; relative paths are
/// joined onto `base_dir`, or onto the directory holding the running
/// executable when no base is configured.
pub fn resolve_profile_path(path: &Path, base_dir: Option<&Path>) -> Result<PathBuf, ProfileError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let base = match base_dir {
        Some(dir) => dir.to_path_buf(),
        None => executable_dir().map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?,
    };
    Ok(base.join(path))
}

fn executable_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "executable has no parent directory",
        )
    })
}

/// Read and validate the profile file at `path`.
pub fn load_profiles(path: &Path) -> Result<ProfileSet, ProfileError> {
    let content = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let profiles = ProfileSet::from_json_str(&content, path)?;
    debug!(path = %path.display(), count = profiles.len(), "Loaded display setups");
    Ok(profiles)
}
