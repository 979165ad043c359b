//! NYT Strands parser implementation
//!
//! The share-text is a title, a quoted theme and a wrapped emoji grid. The
//! grid collapses onto one line:
//!
//! ```text
//! Strands #705
//! "Let's face it"
//! 🟡🔵🔵🔵🔵🔵🔵🔵
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{IdentityKey, PuzzleKind, PuzzleRecord, StrandsRecord};
use crate::parser::{PuzzleFormat, content_lines};

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^Strands\s").unwrap());
static DETECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"Strands #(\d+)").unwrap());
/// Theme words, the spangram and hint bulbs
static EMOJI_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[🔵🟡💡]+$").unwrap());

/// Parser for Strands
#[derive(Debug)]
pub struct StrandsFormat;

impl PuzzleFormat for StrandsFormat {
    fn kind(&self) -> PuzzleKind {
        PuzzleKind::Strands
    }

    fn header(&self) -> Option<&Regex> {
        Some(&*HEADER)
    }

    fn can_parse(&self, text: &str) -> bool {
        DETECTION.is_match(text)
    }

    fn parse(&self, text: &str) -> Option<PuzzleRecord> {
        let lines = content_lines(text);

        let puzzle_number = lines
            .iter()
            .find_map(|line| DETECTION.captures(line))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())?;

        let theme = lines
            .iter()
            .find(|line| line.len() >= 2 && line.starts_with('"') && line.ends_with('"'))
            .map(|line| (*line).to_string());

        let emoji_lines = lines
            .iter()
            .filter(|line| EMOJI_ROW.is_match(line))
            .map(|line| (*line).to_string())
            .collect();

        Some(PuzzleRecord::Strands(StrandsRecord {
            puzzle_number,
            theme,
            emoji_lines,
        }))
    }

    fn render(&self, record: &PuzzleRecord) -> String {
        let Some(strands) = record.as_strands() else {
            return String::new();
        };

        let mut lines = vec![format!("Strands #{}", strands.puzzle_number)];
        if let Some(theme) = &strands.theme {
            lines.push(theme.clone());
        }
        if !strands.emoji_lines.is_empty() {
            lines.push(strands.emoji_lines.concat());
        }
        lines.join("\n")
    }

    fn identity(&self, record: &PuzzleRecord) -> IdentityKey {
        record.as_strands().map_or_else(
            || IdentityKey::new(self.kind(), self.render(record)),
            |strands| IdentityKey::new(self.kind(), strands.puzzle_number.clone()),
        )
    }
}
