//! Wordle parser implementation
//!
//! Keeps the multi-line grid, dropping the blank line after the title and the
//! trailing address.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{IdentityKey, PuzzleKind, PuzzleRecord, WordleRecord};
use crate::parser::{PuzzleFormat, body_lines, normalize_number};

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^Wordle\s").unwrap());
/// An all-green row means the word was found
static END_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"🟩🟩🟩🟩🟩").unwrap());
static DETECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Wordle (\d[\d,]*) [\dX]+/\d+").unwrap());

/// Guess rows use a three-symbol alphabet
pub(crate) static GRID_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[🟩🟨⬛]{5}$").unwrap());

/// Most guesses a game allows
pub const MAX_GUESSES: usize = 6;

/// Parser for Wordle
#[derive(Debug)]
pub struct WordleFormat;

impl PuzzleFormat for WordleFormat {
    fn kind(&self) -> PuzzleKind {
        PuzzleKind::Wordle
    }

    fn header(&self) -> Option<&Regex> {
        Some(&*HEADER)
    }

    fn end_marker(&self) -> Option<&Regex> {
        Some(&*END_MARKER)
    }

    fn can_parse(&self, text: &str) -> bool {
        DETECTION.is_match(text)
    }

    fn parse(&self, text: &str) -> Option<PuzzleRecord> {
        let lines = body_lines(text);
        let (title, grid) = lines.split_first()?;
        if grid.is_empty() {
            return None;
        }

        let puzzle_number = DETECTION
            .captures(title)
            .and_then(|caps| caps.get(1))
            .map(|m| normalize_number(m.as_str()));

        Some(PuzzleRecord::Wordle(WordleRecord {
            title: (*title).to_string(),
            grid_lines: grid.iter().map(|line| (*line).to_string()).collect(),
            puzzle_number,
        }))
    }

    fn render(&self, record: &PuzzleRecord) -> String {
        let Some(wordle) = record.as_wordle() else {
            return String::new();
        };

        let mut lines = Vec::with_capacity(wordle.grid_lines.len() + 1);
        lines.push(wordle.title.as_str());
        lines.extend(wordle.grid_lines.iter().map(String::as_str));
        lines.join("\n")
    }

    fn identity(&self, record: &PuzzleRecord) -> IdentityKey {
        match record.as_wordle() {
            Some(WordleRecord {
                puzzle_number: Some(number),
                ..
            }) => IdentityKey::new(self.kind(), number.clone()),
            _ => IdentityKey::new(self.kind(), self.render(record)),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const WORDLE: &str = "Wordle 1,692 4/6\n\n🟩⬛🟩⬛⬛\n⬛⬛⬛⬛⬛\n🟩🟨🟩⬛⬛\n🟩🟩🟩🟩🟩";

    #[rstest]
    #[case("Wordle 1,692 4/6", true)]
    #[case("Wordle 692 4/6", true)]
    #[case("Wordle 1,234 X/6", true)]
    #[case("Wordle is fun", false)]
    fn detection(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(WordleFormat.can_parse(text), expected);
    }

    #[test]
    fn parse_extracts_title_and_grid() {
        let record = WordleFormat.parse(WORDLE).unwrap();
        let wordle = record.as_wordle().unwrap();

        assert_eq!(wordle.title, "Wordle 1,692 4/6");
        assert_eq!(wordle.grid_lines.len(), 4);
        assert_eq!(wordle.puzzle_number.as_deref(), Some("1692"));
    }

    #[test]
    fn render_drops_blank_line() {
        let output = WordleFormat.process(WORDLE).unwrap();
        assert_eq!(
            output,
            "Wordle 1,692 4/6\n🟩⬛🟩⬛⬛\n⬛⬛⬛⬛⬛\n🟩🟨🟩⬛⬛\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn title_without_grid_fails() {
        assert!(WordleFormat.parse("Wordle 1,692 4/6").is_none());
    }

    #[test]
    fn identity_ignores_separator() {
        let with_comma = WordleFormat.parse(WORDLE).unwrap();
        let without = WordleFormat
            .parse("Wordle 1692 4/6\n🟩🟩🟩🟩🟩")
            .unwrap();

        assert_eq!(
            WordleFormat.identity(&with_comma),
            WordleFormat.identity(&without)
        );
    }

    #[test]
    fn grid_row_pattern() {
        assert!(GRID_ROW.is_match("🟩🟨⬛⬛⬛"));
        assert!(!GRID_ROW.is_match("🟩🟨⬛⬛"));
        assert!(!GRID_ROW.is_match("🟦🟦🟦🟦🟦"));
    }
}
