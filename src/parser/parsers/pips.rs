//! NYT Pips parser implementation
//!
//! Pips publishes three puzzles a day, one per difficulty, and each one is
//! shared separately:
//!
//! ```text
//! Pips #173 Easy 🟢
//! 1:25
//! ```
//!
//! All captured difficulties are combined into one output line:
//! `Pips #173 Easy 🟢 1:25 | Medium 🟡 5:52 | Hard 🔴 35:28`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Difficulty, IdentityKey, ParsedPuzzle, PipsRecord, PuzzleKind, PuzzleRecord};
use crate::parser::{PuzzleFormat, body_lines};

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^Pips\s").unwrap());
static DETECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Pips #\d+ (Easy|Medium|Hard)").unwrap());
static TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Pips #(\d+) (Easy|Medium|Hard) (.)").unwrap());

const SEPARATOR: &str = " | ";

/// Parser for Pips, every difficulty
#[derive(Debug)]
pub struct PipsFormat;

impl PipsFormat {
    /// Difficulty, symbol and time, without the `Pips #N` prefix
    fn suffix(pips: &PipsRecord) -> String {
        format!("{} {} {}", pips.difficulty, pips.emoji, pips.time)
    }
}

impl PuzzleFormat for PipsFormat {
    fn kind(&self) -> PuzzleKind {
        PuzzleKind::Pips
    }

    fn header(&self) -> Option<&Regex> {
        Some(&*HEADER)
    }

    fn can_parse(&self, text: &str) -> bool {
        DETECTION.is_match(text)
    }

    fn parse(&self, text: &str) -> Option<PuzzleRecord> {
        let lines = body_lines(text);
        if lines.len() < 2 {
            return None;
        }

        let caps = TITLE.captures(lines[0])?;
        let difficulty = Difficulty::parse(caps.get(2)?.as_str())?;

        Some(PuzzleRecord::Pips(PipsRecord {
            puzzle_number: caps.get(1)?.as_str().to_string(),
            difficulty,
            emoji: caps.get(3)?.as_str().to_string(),
            time: lines[1].to_string(),
        }))
    }

    fn render(&self, record: &PuzzleRecord) -> String {
        record
            .as_pips()
            .map(|pips| format!("Pips #{} {}", pips.puzzle_number, Self::suffix(pips)))
            .unwrap_or_default()
    }

    fn identity(&self, record: &PuzzleRecord) -> IdentityKey {
        record.as_pips().map_or_else(
            || IdentityKey::new(self.kind(), self.render(record)),
            |pips| {
                IdentityKey::new(self.kind(), pips.puzzle_number.clone())
                    .with_variant(pips.difficulty.as_str())
            },
        )
    }

    /// Every difficulty shares one line per paste session
    fn aggregation_group(&self, record: &PuzzleRecord) -> Option<String> {
        record.is_pips().then(|| self.kind().id().to_string())
    }

    fn combine(&self, members: &[&ParsedPuzzle]) -> Option<String> {
        let mut records: Vec<&PipsRecord> = members
            .iter()
            .filter_map(|member| member.record.as_pips())
            .collect();
        records.sort_by_key(|pips| pips.difficulty);

        let (first, rest) = records.split_first()?;
        let mut parts = vec![format!("Pips #{} {}", first.puzzle_number, Self::suffix(first))];
        parts.extend(rest.iter().map(|pips| Self::suffix(pips)));

        Some(parts.join(SEPARATOR))
    }
}
