//! Block segmentation: split pasted text into candidate puzzle blocks
//!
//! Puzzles have no enclosing delimiter and their bodies may contain blank
//! lines, so blank lines are never used as boundaries. Instead every known
//! header is a split point placed just before the header, and every web
//! address is a split point whose text is removed.

use regex::Regex;
use tracing::trace;

use super::{FormatRegistry, URL_PATTERN};

/// A position where the text is cut; `start..end` is discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Cut {
    start: usize,
    end: usize,
}

/// Splits raw text into trimmed, non-empty candidate blocks
#[derive(Debug, Clone, Default)]
pub struct BlockSegmenter {
    headers: Vec<Regex>,
}

impl BlockSegmenter {
    /// Create a segmenter that only splits on web addresses
    #[must_use]
    pub const fn new() -> Self {
        Self {
            headers: Vec::new(),
        }
    }

    /// Create a segmenter using every header pattern in the registry
    #[must_use]
    pub fn from_registry(registry: &FormatRegistry) -> Self {
        let mut segmenter = Self::new();
        for format in registry.iter() {
            if let Some(header) = format.header() {
                segmenter.add_header(header.clone());
            }
        }
        segmenter
    }

    /// Add a header pattern. Patterns shared by several formats are kept once.
    pub fn add_header(&mut self, header: Regex) {
        if !self.headers.iter().any(|h| h.as_str() == header.as_str()) {
            self.headers.push(header);
        }
    }

    /// Split text into candidate blocks, in input order
    #[must_use]
    pub fn segment(&self, text: &str) -> Vec<String> {
        let mut cuts: Vec<Cut> = self
            .headers
            .iter()
            .flat_map(|header| header.find_iter(text))
            .map(|m| Cut {
                start: m.start(),
                end: m.start(),
            })
            .chain(URL_PATTERN.find_iter(text).map(|m| Cut {
                start: m.start(),
                end: m.end(),
            }))
            .collect();
        cuts.sort_unstable();
        cuts.dedup();

        let mut segments = Vec::new();
        let mut cursor = 0;

        for cut in cuts {
            if cut.start < cursor {
                // header match swallowed by a removed address
                continue;
            }
            segments.push(&text[cursor..cut.start]);
            cursor = cut.end;
        }
        segments.push(&text[cursor..]);

        let blocks: Vec<String> = segments
            .into_iter()
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(String::from)
            .collect();

        trace!(count = blocks.len(), "segmented input");
        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segmenter() -> BlockSegmenter {
        BlockSegmenter::from_registry(&FormatRegistry::builtin())
    }

    #[test]
    fn no_split_points_yields_whole_input() {
        let blocks = segmenter().segment("  just some text\n\nmore text  ");
        assert_eq!(blocks, vec!["just some text\n\nmore text"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(segmenter().segment("").is_empty());
        assert!(segmenter().segment(" \n\n \t").is_empty());
    }

    #[test]
    fn addresses_split_and_vanish() {
        let text = "Framed #1427\n🎥 🟥\n\nhttps://framed.wtf\n\"Quolture\"  1447  ⭐️3\nhttps://www.quolture.com";
        let blocks = segmenter().segment(text);

        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| !b.contains("https")));
    }

    #[test]
    fn headers_split_without_addresses() {
        let text = "Pips #173 Easy 🟢\n1:25\n\nPips #171 Medium 🟡\n5:52";
        let blocks = segmenter().segment(text);

        assert_eq!(blocks, vec!["Pips #173 Easy 🟢\n1:25", "Pips #171 Medium 🟡\n5:52"]);
    }

    #[test]
    fn blank_lines_inside_a_puzzle_do_not_split() {
        let text = "Wordle 1,692 4/6\n\n🟩⬛🟩⬛⬛\n\n🟩🟩🟩🟩🟩";
        assert_eq!(segmenter().segment(text).len(), 1);
    }

    #[test]
    fn two_different_puzzles() {
        let text = "Wordle 1,692 2/6\n\n🟩⬛🟩⬛⬛\n🟩🟩🟩🟩🟩\nConnections\nPuzzle #970\n🟦🟦🟦🟦";
        let blocks = segmenter().segment(text);

        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("Wordle"));
        assert!(blocks[1].starts_with("Connections"));
    }

    #[test]
    fn adjacent_header_and_address_leave_no_empty_block() {
        let text = "https://framed.wtf\nFramed #1\n🎥 🟩\nhttps://framed.wtf\nFramed #2\n🎥 🟥";
        let blocks = segmenter().segment(text);

        assert_eq!(blocks, vec!["Framed #1\n🎥 🟩", "Framed #2\n🎥 🟥"]);
    }

    #[test]
    fn shared_header_is_stored_once() {
        let registry = FormatRegistry::builtin();
        let segmenter = BlockSegmenter::from_registry(&registry);
        let with_header = registry.iter().filter(|f| f.header().is_some()).count();

        // both Framed variants start with the same header
        assert_eq!(segmenter.headers.len(), with_header - 1);
    }
}
