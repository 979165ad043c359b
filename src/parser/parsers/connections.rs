//! NYT Connections parser implementation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ConnectionsRecord, IdentityKey, PuzzleKind, PuzzleRecord};
use crate::parser::{PuzzleFormat, content_lines};

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^Connections\s*\n").unwrap());
static DETECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)Connections\s*\nPuzzle #\d+").unwrap());
static PUZZLE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"Puzzle #(\d+)").unwrap());

/// One guess: four tiles from the four category colours
pub(crate) static GRID_ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[🟦🟪🟩🟨]{4}$").unwrap());

/// Parser for Connections
#[derive(Debug)]
pub struct ConnectionsFormat;

impl PuzzleFormat for ConnectionsFormat {
    fn kind(&self) -> PuzzleKind {
        PuzzleKind::Connections
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
            .find_map(|line| PUZZLE_NUMBER.captures(line))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())?;

        let grid_lines = lines
            .iter()
            .filter(|line| GRID_ROW.is_match(line))
            .map(|line| (*line).to_string())
            .collect();

        Some(PuzzleRecord::Connections(ConnectionsRecord {
            puzzle_number,
            grid_lines,
        }))
    }

    fn render(&self, record: &PuzzleRecord) -> String {
        let Some(connections) = record.as_connections() else {
            return String::new();
        };

        let mut lines = vec![format!("Connections #{}", connections.puzzle_number)];
        lines.extend(connections.grid_lines.iter().cloned());
        lines.join("\n")
    }

    fn identity(&self, record: &PuzzleRecord) -> IdentityKey {
        record.as_connections().map_or_else(
            || IdentityKey::new(self.kind(), self.render(record)),
            |connections| IdentityKey::new(self.kind(), connections.puzzle_number.clone()),
        )
    }
}
