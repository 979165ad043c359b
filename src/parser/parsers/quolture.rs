//! Quolture parser implementation
//!
//! Every line of the share-text is kept and joined with single spaces.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{IdentityKey, PuzzleKind, PuzzleRecord, QuoltureRecord};
use crate::parser::{PuzzleFormat, body_lines};

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?m)^"Quolture"\s"#).unwrap());
static END_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https://www\.quolture\.com").unwrap());
static DETECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r#""Quolture"\s+(\d+)"#).unwrap());

/// Parser for Quolture
#[derive(Debug)]
pub struct QuoltureFormat;

impl PuzzleFormat for QuoltureFormat {
    fn kind(&self) -> PuzzleKind {
        PuzzleKind::Quolture
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
        let lines: Vec<String> = body_lines(text).into_iter().map(String::from).collect();
        if lines.is_empty() {
            return None;
        }

        let puzzle_number = DETECTION
            .captures(&lines[0])
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());

        Some(PuzzleRecord::Quolture(QuoltureRecord {
            lines,
            puzzle_number,
        }))
    }

    fn render(&self, record: &PuzzleRecord) -> String {
        record
            .as_quolture()
            .map(|quolture| quolture.lines.join(" "))
            .unwrap_or_default()
    }

    fn identity(&self, record: &PuzzleRecord) -> IdentityKey {
        match record.as_quolture() {
            Some(QuoltureRecord {
                puzzle_number: Some(number),
                ..
            }) => IdentityKey::new(self.kind(), number.clone()),
            _ => IdentityKey::new(self.kind(), self.render(record)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUOLTURE: &str =
        "\"Quolture\"  1447  ⭐️3\n\n🎬: ⬜️⬜️5️⃣\n📺: ⬜️🟩0️⃣\n\nhttps://www.quolture.com";

    #[test]
    fn parse_keeps_every_body_line() {
        let record = QuoltureFormat.parse(QUOLTURE).unwrap();
        let quolture = record.as_quolture().unwrap();

        assert_eq!(quolture.lines.len(), 3);
        assert_eq!(quolture.puzzle_number.as_deref(), Some("1447"));
    }

    #[test]
    fn render_joins_with_spaces() {
        let output = QuoltureFormat.process(QUOLTURE).unwrap();
        assert_eq!(output, "\"Quolture\"  1447  ⭐️3 🎬: ⬜️⬜️5️⃣ 📺: ⬜️🟩0️⃣");
    }

    #[test]
    fn missing_blank_lines() {
        let text = "\"Quolture\"  1447  ⭐️3\n🎬: ⬜️⬜️5️⃣\n📺: ⬜️🟩0️⃣\nhttps://www.quolture.com";
        let output = QuoltureFormat.process(text).unwrap();

        assert!(output.contains("🎬:"));
        assert!(!output.contains('\n'));
        assert!(!output.contains("https"));
    }

    #[test]
    fn address_only_fails() {
        assert!(QuoltureFormat.parse("https://www.quolture.com").is_none());
    }
}
