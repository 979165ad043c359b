//! Collator configuration
//!
//! The only setting is the display order of puzzle types, read from a JSON
//! file shaped like `{"puzzle_order": ["framed_regular", "wordle", ...]}`.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ConfigError, ConfigResult};
use crate::models::PuzzleKind;
use crate::parser::FormatRegistry;

/// File name searched for when no path is given
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Order used when no configuration file says otherwise
const DEFAULT_ORDER: [PuzzleKind; 8] = [
    PuzzleKind::FramedRegular,
    PuzzleKind::FramedOneFrame,
    PuzzleKind::Quolture,
    PuzzleKind::Wordle,
    PuzzleKind::Connections,
    PuzzleKind::Strands,
    PuzzleKind::Pips,
    PuzzleKind::Waffle,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Puzzle type identifiers, highest priority first
    #[serde(default)]
    pub puzzle_order: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            puzzle_order: DEFAULT_ORDER.iter().map(|kind| kind.id().to_string()).collect(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading config");

        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::io(path.display().to_string(), e.to_string()))?;
        Self::from_json_str(&contents)
    }

    /// Parse configuration from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object of the expected shape
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::parse(e.to_string()))
    }

    /// Serialize to pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json_string(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::parse(e.to_string()))
    }

    /// Check the order against the formats that are actually registered.
    ///
    /// Problems are only logged. Unknown identifiers never match a puzzle and
    /// a repeated identifier keeps its first position.
    pub fn validate(&self, registry: &FormatRegistry) {
        let mut seen = HashSet::new();

        for id in &self.puzzle_order {
            if !seen.insert(id.as_str()) {
                warn!(id = %id, "puzzle_order lists a type more than once");
            } else if registry.get_by_id(id).is_none() {
                warn!(id = %id, "unknown puzzle type in puzzle_order");
            }
        }
    }

    /// Find the configuration file.
    ///
    /// An explicit path wins. Otherwise `config.json` next to the running
    /// executable is tried, then `config.json` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns an I/O error naming the last candidate if no file exists
    pub fn locate(explicit: Option<&Path>) -> ConfigResult<PathBuf> {
        if let Some(path) = explicit {
            return if path.is_file() {
                Ok(path.to_path_buf())
            } else {
                Err(ConfigError::io(path.display().to_string(), "file not found"))
            };
        }

        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE_NAME)));
        let in_cwd = PathBuf::from(CONFIG_FILE_NAME);

        beside_exe
            .into_iter()
            .chain(std::iter::once(in_cwd.clone()))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| ConfigError::io(in_cwd.display().to_string(), "file not found"))
    }
}
