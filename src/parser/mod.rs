//! Puzzle share-text detection and parsing framework
//!
//! Pasted text has no schema: puzzles arrive in any order, without a shared
//! delimiter, and their bodies may contain blank lines. This module splits
//! the text into candidate blocks, classifies each block with the first
//! matching format from an ordered registry, and hands the parsed records to
//! the manager for ordering, deduplication, aggregation and rendering.
//!
//! Key design principles:
//! - Block splitting by known headers and trailing web addresses
//! - One format per puzzle type, looked up by first match
//! - Loose detection, strict parsing: a failed parse drops the block
//! - Deterministic rendering of every parsed record

pub mod completion;
pub mod detector;
pub mod interface;
pub mod manager;
pub mod parsers;

pub use completion::{LineOutcome, PasteSession, is_complete};
pub use detector::BlockSegmenter;
pub use interface::{FormatRegistry, PuzzleFormat};
pub use manager::{NO_PUZZLES_FOUND, PuzzleManager};
pub use parsers::{
    ConnectionsFormat, FramedFormat, FramedOneFrameFormat, PipsFormat, QuoltureFormat,
    StrandsFormat, WaffleFormat, WordleFormat,
};

use once_cell::sync::Lazy;
use regex::Regex;

/// Web addresses only ever appear as puzzle terminators
pub(crate) static URL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());

/// Split text into trimmed lines, dropping blank ones
#[must_use]
pub fn content_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Split text into trimmed lines, blank ones included
#[must_use]
pub fn raw_lines(text: &str) -> Vec<&str> {
    text.lines().map(str::trim).collect()
}

/// Check if a line is a bare web address
#[must_use]
pub fn is_address(line: &str) -> bool {
    line.starts_with("http")
}

/// Trimmed, non-blank lines that are not web addresses
#[must_use]
pub fn body_lines(text: &str) -> Vec<&str> {
    content_lines(text)
        .into_iter()
        .filter(|line| !is_address(line))
        .collect()
}

/// Drop thousands separators so `1,692` and `1692` compare equal
#[must_use]
pub fn normalize_number(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}
