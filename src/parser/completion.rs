//! Completion sensing for line-by-line paste readers
//!
//! An interactive reader receives a paste one line at a time and has to guess
//! when a whole puzzle has arrived. Most formats end with a recognizable
//! marker line; two need counting instead:
//!
//! - a failed Wordle has no all-green row, only six guess rows;
//! - Connections has no marker at all, only its guess rows.
//!
//! [`PasteSession`] drives a whole interactive session on top of that.

use super::FormatRegistry;
use super::parsers::{connections, wordle};

/// Guess rows needed before a Connections paste counts as finished
const CONNECTIONS_MIN_ROWS: usize = 4;

/// Check whether the accumulated lines contain a finished puzzle paste
#[must_use]
pub fn is_complete<S: AsRef<str>>(registry: &FormatRegistry, lines: &[S]) -> bool {
    let lines: Vec<&str> = lines.iter().map(|line| line.as_ref().trim()).collect();

    has_end_marker(registry, &lines) || wordle_exhausted(&lines) || connections_finished(&lines)
}

fn has_end_marker(registry: &FormatRegistry, lines: &[&str]) -> bool {
    lines.iter().any(|line| {
        registry
            .iter()
            .filter_map(|format| format.end_marker())
            .any(|marker| marker.is_match(line))
    })
}

/// Six guesses without a win still end the game
fn wordle_exhausted(lines: &[&str]) -> bool {
    lines
        .iter()
        .filter(|line| wordle::GRID_ROW.is_match(line))
        .count()
        >= wordle::MAX_GUESSES
}

/// Four solved categories, or four mistakes before that
fn connections_finished(lines: &[&str]) -> bool {
    let rows: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| connections::GRID_ROW.is_match(line))
        .collect();
    if rows.len() < CONNECTIONS_MIN_ROWS {
        return false;
    }

    let solid = rows.iter().filter(|row| is_solid(row)).count();
    let mixed = rows.len() - solid;

    (solid >= 4 && mixed <= 3) || (mixed >= 4 && solid <= 2)
}

fn is_solid(row: &str) -> bool {
    let mut tiles = row.chars();
    tiles
        .next()
        .is_some_and(|first| tiles.all(|tile| tile == first))
}

/// Blank lines in a row that end a session
const SESSION_END_BLANKS: usize = 2;

/// What one line did to a [`PasteSession`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line was taken and the current paste is still open
    Pending,
    /// The current paste finished with this many lines
    Captured(usize),
    /// The user ended the session
    Finished,
}

/// Line accumulator for an interactive paste session.
///
/// A paste is captured once [`is_complete`] holds for its lines. The session
/// ends on two blank lines in a row, whether or not the current paste was
/// captured, unless that paste is a recognized puzzle still missing its
/// body. Blank lines before anything was pasted are ignored.
#[derive(Debug, Default)]
pub struct PasteSession {
    captured: Vec<String>,
    paste: Vec<String>,
    blank_run: usize,
}

impl PasteSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one input line
    pub fn push_line(&mut self, registry: &FormatRegistry, line: impl Into<String>) -> LineOutcome {
        let line = line.into();

        if line.trim().is_empty() {
            self.blank_run += 1;
            if self.blank_run >= SESSION_END_BLANKS
                && !self.is_empty()
                && !self.awaiting_body(registry)
            {
                return LineOutcome::Finished;
            }
            if !self.paste.is_empty() {
                self.paste.push(line);
            }
            return LineOutcome::Pending;
        }

        self.blank_run = 0;
        self.paste.push(line);

        if is_complete(registry, &self.paste) {
            let count = self.paste.len();
            self.captured.append(&mut self.paste);
            return LineOutcome::Captured(count);
        }
        LineOutcome::Pending
    }

    /// A header was recognized but the block does not parse yet
    fn awaiting_body(&self, registry: &FormatRegistry) -> bool {
        let text = self.paste.join("\n");
        registry
            .find_for_text(&text)
            .is_some_and(|format| format.parse(&text).is_none())
    }

    /// Lines of the current, not yet captured paste
    #[must_use]
    pub fn pending_lines(&self) -> usize {
        self.paste.len()
    }

    /// Nothing but blank lines so far
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.captured.is_empty() && self.paste.iter().all(|line| line.trim().is_empty())
    }

    /// Everything pasted, unfinished paste included
    #[must_use]
    pub fn into_text(mut self) -> String {
        self.captured.append(&mut self.paste);
        self.captured.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn complete(lines: &[&str]) -> bool {
        is_complete(&FormatRegistry::builtin(), lines)
    }

    #[test]
    fn empty_is_incomplete() {
        assert!(!complete(&[]));
    }

    #[rstest]
    #[case(&["Framed #1427", "🎥 🟥", "", "https://framed.wtf"])]
    #[case(&["\"Quolture\"  1447  ⭐️3", "https://www.quolture.com"])]
    #[case(&["Wordle 1,692 2/6", "", "🟩⬛🟩⬛⬛", "🟩🟩🟩🟩🟩"])]
    fn end_marker_completes(#[case] lines: &[&str]) {
        assert!(complete(lines));
    }

    #[test]
    fn partial_paste_is_incomplete() {
        assert!(!complete(&["Framed #1427", "🎥 🟥"]));
        assert!(!complete(&["Wordle 1,692 X/6", "", "🟩⬛🟩⬛⬛"]));
    }

    #[test]
    fn six_failed_guesses_complete() {
        let lines = [
            "Wordle 1,692 X/6",
            "",
            "🟩⬛🟩⬛⬛",
            "⬛⬛⬛⬛⬛",
            "🟩🟨🟩⬛⬛",
            "🟩🟩🟩⬛⬛",
            "🟩🟩🟩🟨🟨",
            "🟩🟩🟩🟨⬛",
        ];
        assert!(complete(&lines));
    }

    #[test]
    fn five_failed_guesses_are_incomplete() {
        let lines = [
            "🟩⬛🟩⬛⬛",
            "⬛⬛⬛⬛⬛",
            "🟩🟨🟩⬛⬛",
            "🟩🟩🟩⬛⬛",
            "🟩🟩🟩🟨🟨",
        ];
        assert!(!complete(&lines));
    }

    #[rstest]
    #[case(&["🟦🟦🟦🟦", "🟪🟪🟪🟪", "🟩🟩🟩🟩", "🟨🟨🟨🟨"], true)]
    #[case(&["🟦🟪🟩🟨", "🟦🟪🟨🟩", "🟪🟦🟩🟨", "🟨🟪🟩🟦"], true)]
    #[case(&["🟦🟪🟩🟨", "🟦🟦🟦🟦", "🟪🟪🟪🟪", "🟩🟩🟩🟩", "🟨🟨🟨🟨"], true)]
    #[case(&["🟦🟦🟦🟦", "🟪🟪🟪🟪", "🟦🟪🟩🟨", "🟦🟪🟨🟩"], false)]
    #[case(&["🟦🟦🟦🟦", "🟪🟪🟪🟪", "🟩🟩🟩🟩"], false)]
    #[case(&["🟦🟪🟩🟨", "🟦🟪🟨🟩", "🟪🟦🟩🟨"], false)]
    fn connections_counting(#[case] rows: &[&str], #[case] expected: bool) {
        let mut lines = vec!["Connections", "Puzzle #970"];
        lines.extend_from_slice(rows);
        assert_eq!(complete(&lines), expected);
    }

    #[test]
    fn three_solid_three_mixed_stays_open() {
        let lines = [
            "🟦🟪🟩🟨",
            "🟦🟦🟦🟦",
            "🟦🟪🟨🟩",
            "🟪🟪🟪🟪",
            "🟪🟦🟩🟨",
            "🟩🟩🟩🟩",
        ];
        assert!(!complete(&lines));
    }

    #[test]
    fn four_solid_four_mixed_stays_open() {
        let lines = [
            "🟦🟪🟩🟨",
            "🟦🟪🟨🟩",
            "🟪🟦🟩🟨",
            "🟨🟪🟩🟦",
            "🟦🟦🟦🟦",
            "🟪🟪🟪🟪",
            "🟩🟩🟩🟩",
            "🟨🟨🟨🟨",
        ];
        assert!(!complete(&lines));
    }

    #[test]
    fn accepts_owned_lines() {
        let lines: Vec<String> = vec!["Framed #1".into(), "https://framed.wtf".into()];
        assert!(is_complete(&FormatRegistry::builtin(), &lines));
    }

    /// Feed lines until the session ends, returning every outcome
    fn feed(session: &mut PasteSession, lines: &[&str]) -> Vec<LineOutcome> {
        let registry = FormatRegistry::builtin();
        let mut outcomes = Vec::new();
        for line in lines {
            let outcome = session.push_line(&registry, *line);
            outcomes.push(outcome);
            if outcome == LineOutcome::Finished {
                break;
            }
        }
        outcomes
    }

    #[test]
    fn session_captures_framed_then_ends() {
        let mut session = PasteSession::new();
        let outcomes = feed(
            &mut session,
            &["Framed #1427", "🎥 🟥", "", "https://framed.wtf", "", ""],
        );

        assert_eq!(outcomes[3], LineOutcome::Captured(4));
        assert_eq!(outcomes.last(), Some(&LineOutcome::Finished));
    }

    #[rstest]
    #[case(&["Pips #173 Easy 🟢", "1:25", "", ""])]
    #[case(&["Strands #705", "\"Let's face it\"", "🟡🔵🔵🔵", "🔵🔵🔵🔵", "", ""])]
    #[case(&["Wordle 1,692 2/6", "", "🟩⬛🟩⬛⬛", "🟩🟩🟩🟩🟩", "", "https://www.nytimes.com/games/wordle", "", ""])]
    fn session_ends_on_double_blank_after_open_paste(#[case] lines: &[&str]) {
        let mut session = PasteSession::new();
        let outcomes = feed(&mut session, lines);

        assert_eq!(outcomes.len(), lines.len());
        assert_eq!(outcomes.last(), Some(&LineOutcome::Finished));
    }

    #[test]
    fn unfinished_paste_is_kept() {
        let mut session = PasteSession::new();
        feed(&mut session, &["Pips #173 Easy 🟢", "1:25", "", ""]);

        assert_eq!(session.pending_lines(), 3);
        assert_eq!(session.into_text(), "Pips #173 Easy 🟢\n1:25\n");
    }

    #[test]
    fn wordle_and_its_address_are_kept() {
        let mut session = PasteSession::new();
        feed(
            &mut session,
            &["Wordle 1,692 2/6", "", "🟩⬛🟩⬛⬛", "🟩🟩🟩🟩🟩", "", "https://www.nytimes.com/games/wordle", "", ""],
        );

        let text = session.into_text();
        assert!(text.starts_with("Wordle 1,692 2/6"));
        assert!(text.contains("https://www.nytimes.com/games/wordle"));
    }

    #[test]
    fn leading_blank_lines_do_not_end_session() {
        let mut session = PasteSession::new();
        let outcomes = feed(&mut session, &["", "", "", "Pips #173 Easy 🟢"]);

        assert!(!outcomes.contains(&LineOutcome::Finished));
        assert!(!session.is_empty());
    }

    #[test]
    fn waffle_blank_runs_before_grid_do_not_end_session() {
        let mut session = PasteSession::new();
        let outcomes = feed(
            &mut session,
            &[
                "#waffle1479 2/5",
                "",
                "",
                "",
                "🟩🟩⭐🟩🟩",
                "🟩⬜🟩⬜🟩",
                "🟩🟩⭐🟩🟩",
                "🟩⬜🟩⬜🟩",
                "🟩🟩⭐🟩🟩",
                "",
                "",
            ],
        );

        assert_eq!(outcomes.len(), 11);
        assert!(outcomes[..9].iter().all(|outcome| *outcome == LineOutcome::Pending));
        assert_eq!(outcomes.last(), Some(&LineOutcome::Finished));
    }

    #[test]
    fn single_blank_between_pastes_keeps_session_open() {
        let mut session = PasteSession::new();
        let outcomes = feed(
            &mut session,
            &["Framed #1427", "🎥 🟥", "https://framed.wtf", "", "Pips #173 Easy 🟢", "1:25"],
        );

        assert!(!outcomes.contains(&LineOutcome::Finished));
        assert_eq!(outcomes[2], LineOutcome::Captured(3));
    }
}
