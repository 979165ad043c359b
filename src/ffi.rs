//! `UniFFI` bindings for the puzzle collator
//!
//! This module exposes the collation pipeline and the completion check to
//! other platforms (iOS, Android, Python, etc.)

use std::sync::Arc;

use crate::config::Config;
use crate::error::ConfigError;
use crate::models::ParsedPuzzle;
use crate::parser::{FormatRegistry, PuzzleManager};

/// A recognized puzzle as seen across the FFI boundary
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiPuzzle {
    /// Configuration identifier of the puzzle type
    pub kind: String,
    pub rendered: String,
}

impl FfiPuzzle {
    fn from_parsed(manager: &PuzzleManager, puzzle: &ParsedPuzzle) -> Self {
        Self {
            kind: puzzle.kind.id().to_string(),
            rendered: manager.render_puzzle(puzzle),
        }
    }
}

/// Collates pasted puzzle results into one normalized block of text
#[derive(uniffi::Object)]
pub struct PuzzleCollator {
    manager: PuzzleManager,
}

#[uniffi::export]
impl PuzzleCollator {
    /// Create a collator with the given puzzle type order.
    /// An empty order falls back to the default order.
    #[uniffi::constructor]
    #[must_use]
    pub fn new(order: Vec<String>) -> Arc<Self> {
        let order = if order.is_empty() {
            Config::default().puzzle_order
        } else {
            order
        };

        Arc::new(Self {
            manager: PuzzleManager::new(FormatRegistry::builtin(), order),
        })
    }

    /// Create a collator from the contents of a JSON configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed
    #[uniffi::constructor]
    pub fn from_config_json(json: &str) -> Result<Arc<Self>, ConfigError> {
        let config = Config::from_json_str(json)?;
        Ok(Arc::new(Self {
            manager: PuzzleManager::from_config(&config),
        }))
    }

    /// Collate raw pasted text into the final output
    #[must_use]
    pub fn process(&self, text: &str) -> String {
        self.manager.process(text)
    }

    /// Check whether accumulated paste lines hold a finished puzzle
    #[must_use]
    pub fn is_complete(&self, lines: Vec<String>) -> bool {
        self.manager.is_complete(&lines)
    }

    /// Recognized puzzles in paste order, each rendered on its own
    #[must_use]
    pub fn detect(&self, text: &str) -> Vec<FfiPuzzle> {
        self.manager
            .detect_and_parse(text)
            .iter()
            .map(|puzzle| FfiPuzzle::from_parsed(&self.manager, puzzle))
            .collect()
    }

    /// Configured puzzle type order
    #[must_use]
    pub fn puzzle_order(&self) -> Vec<String> {
        self.manager.puzzle_order().to_vec()
    }
}
