#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

uniffi::setup_scaffolding!();

pub mod config;
pub mod error;
pub mod ffi;
pub mod models;
pub mod parser;

pub use config::Config;
// Re-export common error types for convenience
pub use error::{CollateError, CollateResult, ConfigError, ConfigResult};
pub use models::{IdentityKey, ParsedPuzzle, PuzzleKind, PuzzleRecord};
pub use parser::{
    FormatRegistry, LineOutcome, NO_PUZZLES_FOUND, PasteSession, PuzzleFormat, PuzzleManager,
};
