//! Framed and Framed - One Frame Challenge
//!
//! Framed reveals a movie one frame at a time. Both variants condense to a
//! single line: title immediately followed by the emoji row.
//!
//! ```text
//! Framed #1427
//! 🎥 🟥 🟥 🟥 🟥 🟥 🟥
//!
//! https://framed.wtf
//! ```
//! becomes `Framed #1427🎥 🟥 🟥 🟥 🟥 🟥 🟥`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{FramedRecord, IdentityKey, PuzzleKind, PuzzleRecord};
use crate::parser::{PuzzleFormat, body_lines};

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^Framed\s").unwrap());
static END_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"https://framed\.wtf").unwrap());
static REGULAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"Framed #\d+").unwrap());
static ONE_FRAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Framed - One Frame Challenge #\d+").unwrap());
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\d+)").unwrap());

/// Title is the first body line, grid the second
fn parse_framed(text: &str) -> Option<PuzzleRecord> {
    let lines = body_lines(text);
    if lines.len() < 2 {
        return None;
    }

    let title = lines[0].to_string();
    let puzzle_number = NUMBER
        .captures(&title)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    Some(PuzzleRecord::Framed(FramedRecord {
        title,
        emoji_grid: lines[1].to_string(),
        puzzle_number,
    }))
}

fn render_framed(record: &PuzzleRecord) -> String {
    record
        .as_framed()
        .map(|framed| format!("{}{}", framed.title, framed.emoji_grid))
        .unwrap_or_default()
}

fn framed_identity(kind: PuzzleKind, record: &PuzzleRecord) -> IdentityKey {
    match record.as_framed() {
        Some(FramedRecord {
            puzzle_number: Some(number),
            ..
        }) => IdentityKey::new(kind, number.clone()),
        _ => IdentityKey::new(kind, render_framed(record)),
    }
}

/// Regular Framed
#[derive(Debug)]
pub struct FramedFormat;

impl PuzzleFormat for FramedFormat {
    fn kind(&self) -> PuzzleKind {
        PuzzleKind::FramedRegular
    }

    fn header(&self) -> Option<&Regex> {
        Some(&*HEADER)
    }

    fn end_marker(&self) -> Option<&Regex> {
        Some(&*END_MARKER)
    }

    fn can_parse(&self, text: &str) -> bool {
        REGULAR.is_match(text) && !text.contains("One Frame")
    }

    fn parse(&self, text: &str) -> Option<PuzzleRecord> {
        parse_framed(text)
    }

    fn render(&self, record: &PuzzleRecord) -> String {
        render_framed(record)
    }

    fn identity(&self, record: &PuzzleRecord) -> IdentityKey {
        framed_identity(self.kind(), record)
    }
}

/// One Frame Challenge variant
#[derive(Debug)]
pub struct FramedOneFrameFormat;

impl PuzzleFormat for FramedOneFrameFormat {
    fn kind(&self) -> PuzzleKind {
        PuzzleKind::FramedOneFrame
    }

    fn header(&self) -> Option<&Regex> {
        Some(&*HEADER)
    }

    fn end_marker(&self) -> Option<&Regex> {
        Some(&*END_MARKER)
    }

    fn can_parse(&self, text: &str) -> bool {
        ONE_FRAME.is_match(text)
    }

    fn parse(&self, text: &str) -> Option<PuzzleRecord> {
        parse_framed(text)
    }

    fn render(&self, record: &PuzzleRecord) -> String {
        render_framed(record)
    }

    fn identity(&self, record: &PuzzleRecord) -> IdentityKey {
        framed_identity(self.kind(), record)
    }
}
