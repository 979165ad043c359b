//! Waffle parser implementation
//!
//! Waffle shares a 5x5 grid padded with a varying number of blank lines,
//! followed by an optional streak line and the bare site name.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{IdentityKey, PuzzleKind, PuzzleRecord, WaffleRecord};
use crate::parser::{PuzzleFormat, raw_lines};

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#waffle\d").unwrap());
static DETECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"#waffle\d+ \d+/5").unwrap());
static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(#waffle(\d+) \d+/5)").unwrap());
static GRID_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[🟩⬜⭐]{5}$").unwrap());

const GRID_SIZE: usize = 5;
const STREAK_PREFIX: &str = "🔥 streak:";

/// Parser for Waffle
#[derive(Debug)]
pub struct WaffleFormat;

impl PuzzleFormat for WaffleFormat {
    fn kind(&self) -> PuzzleKind {
        PuzzleKind::Waffle
    }

    fn header(&self) -> Option<&Regex> {
        Some(&*HEADER)
    }

    fn can_parse(&self, text: &str) -> bool {
        DETECTION.is_match(text)
    }

    fn parse(&self, text: &str) -> Option<PuzzleRecord> {
        let lines = raw_lines(text);

        let caps = lines.iter().find_map(|line| TITLE.captures(line))?;
        let title = caps.get(1)?.as_str().to_string();
        let puzzle_number = caps.get(2)?.as_str().to_string();

        let grid_lines: Vec<String> = lines
            .iter()
            .filter(|line| !line.is_empty() && GRID_ROW.is_match(line))
            .map(|line| (*line).to_string())
            .collect();
        if grid_lines.len() != GRID_SIZE {
            return None;
        }

        let streak_info = lines
            .iter()
            .find(|line| line.starts_with(STREAK_PREFIX))
            .map(|line| (*line).to_string());

        Some(PuzzleRecord::Waffle(WaffleRecord {
            title,
            puzzle_number,
            grid_lines,
            streak_info,
        }))
    }

    fn render(&self, record: &PuzzleRecord) -> String {
        let Some(waffle) = record.as_waffle() else {
            return String::new();
        };

        let mut lines = vec![waffle.title.clone()];
        lines.extend(waffle.grid_lines.iter().cloned());
        lines.extend(waffle.streak_info.iter().cloned());
        lines.join("\n")
    }

    fn identity(&self, record: &PuzzleRecord) -> IdentityKey {
        record.as_waffle().map_or_else(
            || IdentityKey::new(self.kind(), self.render(record)),
            |waffle| IdentityKey::new(self.kind(), waffle.puzzle_number.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAFFLE: &str = "#waffle1477 1/5\n\n\n\n🟩🟩🟩🟩🟩\n🟩⬜🟩⬜🟩\n🟩🟩⭐🟩🟩\n🟩⬜🟩⬜🟩\n🟩🟩🟩🟩🟩\n\n\n\n🔥 streak: 2\n\nwafflegame.net";
    const NO_STREAK: &str = "#waffle1478 3/5\n\n🟩🟩🟩🟩🟩\n🟩⬜🟩🟩🟩\n🟩🟩⭐🟩🟩\n🟩🟩🟩⬜🟩\n🟩🟩🟩🟩🟩\n\nwafflegame.net";
    const MANY_BLANKS: &str = "#waffle1479 2/5\n\n\n\n\n🟩🟩🟩🟩🟩\n🟩⬜🟩⬜🟩\n\n\n🟩🟩⭐🟩🟩\n\n\n🟩⬜🟩⬜🟩\n🟩🟩🟩🟩🟩\n\n\n\n\n🔥 streak: 5\n\n\n\nwafflegame.net";

    #[test]
    fn parse_extracts_components() {
        let record = WaffleFormat.parse(WAFFLE).unwrap();
        let waffle = record.as_waffle().unwrap();

        assert_eq!(waffle.title, "#waffle1477 1/5");
        assert_eq!(waffle.puzzle_number, "1477");
        assert_eq!(waffle.grid_lines.len(), 5);
        assert_eq!(waffle.streak_info.as_deref(), Some("🔥 streak: 2"));
    }

    #[test]
    fn streak_is_optional() {
        let record = WaffleFormat.parse(NO_STREAK).unwrap();
        let waffle = record.as_waffle().unwrap();

        assert_eq!(waffle.title, "#waffle1478 3/5");
        assert!(waffle.streak_info.is_none());
    }

    #[test]
    fn render_with_streak() {
        let output = WaffleFormat.process(WAFFLE).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "#waffle1477 1/5");
        assert_eq!(lines[1], "🟩🟩🟩🟩🟩");
        assert_eq!(lines[6], "🔥 streak: 2");
        assert!(!output.contains("wafflegame.net"));
    }

    #[test]
    fn render_without_streak() {
        let output = WaffleFormat.process(NO_STREAK).unwrap();
        assert_eq!(output.lines().count(), 6);
        assert!(!output.contains("streak"));
    }

    #[test]
    fn render_removes_blank_lines() {
        let output = WaffleFormat.process(MANY_BLANKS).unwrap();
        assert!(!output.contains("\n\n"));
        assert!(output.ends_with("🔥 streak: 5"));
    }

    #[test]
    fn short_grid_fails() {
        let text = "#waffle1477 1/5\n🟩🟩🟩🟩🟩\n🟩⬜🟩⬜🟩\n🟩🟩⭐🟩🟩\nwafflegame.net";
        assert!(WaffleFormat.parse(text).is_none());
    }
}
