//! Puzzle manager: the full collation pipeline
//!
//! `process` runs segmentation, detection, ordering, deduplication,
//! aggregation and rendering in that order. Each stage is public so callers
//! can stop early and inspect intermediate results.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use super::{BlockSegmenter, FormatRegistry, completion};
use crate::config::Config;
use crate::models::{ParsedPuzzle, PuzzleKind};

/// Output when the input held text but no recognizable puzzle
pub const NO_PUZZLES_FOUND: &str = "No recognized puzzles found in input.";

/// Collates puzzle share text into one normalized block
pub struct PuzzleManager {
    registry: FormatRegistry,
    segmenter: BlockSegmenter,
    puzzle_order: Vec<String>,
}

impl PuzzleManager {
    /// Create a manager over a registry with the given type order
    #[must_use]
    pub fn new(registry: FormatRegistry, puzzle_order: Vec<String>) -> Self {
        let segmenter = BlockSegmenter::from_registry(&registry);
        Self {
            registry,
            segmenter,
            puzzle_order,
        }
    }

    /// Create a manager over the built-in formats, logging config oddities
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let registry = FormatRegistry::builtin();
        config.validate(&registry);
        Self::new(registry, config.puzzle_order.clone())
    }

    #[must_use]
    pub const fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    #[must_use]
    pub fn puzzle_order(&self) -> &[String] {
        &self.puzzle_order
    }

    /// Collate raw pasted text into the final output.
    ///
    /// Empty or whitespace-only input means nothing was pasted and yields an
    /// empty string; only text without any recognizable puzzle yields
    /// [`NO_PUZZLES_FOUND`].
    #[must_use]
    pub fn process(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let puzzles = self.collate(text);
        self.format_output(&puzzles)
    }

    /// Recognized puzzles in final output order, before rendering
    #[must_use]
    pub fn collate(&self, text: &str) -> Vec<ParsedPuzzle> {
        let puzzles = self.detect_and_parse(text);
        let puzzles = self.sort_by_config(puzzles);
        let puzzles = self.deduplicate(puzzles);
        let puzzles = self.aggregate(puzzles);

        info!(count = puzzles.len(), "collated puzzles");
        puzzles
    }

    /// Check whether accumulated paste lines hold a finished puzzle
    #[must_use]
    pub fn is_complete<S: AsRef<str>>(&self, lines: &[S]) -> bool {
        completion::is_complete(&self.registry, lines)
    }

    /// Split text into blocks and parse every block a format recognizes.
    ///
    /// Unrecognized and malformed blocks are dropped.
    #[must_use]
    pub fn detect_and_parse(&self, text: &str) -> Vec<ParsedPuzzle> {
        let mut puzzles = Vec::new();

        for block in self.segmenter.segment(text) {
            let Some(format) = self.registry.find_for_text(&block) else {
                debug!(block = %block, "no format recognizes block");
                continue;
            };

            match format.parse(&block) {
                Some(record) => {
                    debug!(kind = %format.kind(), "parsed block");
                    puzzles.push(ParsedPuzzle::new(format.kind(), record, block));
                }
                None => debug!(kind = %format.kind(), "block failed to parse"),
            }
        }

        puzzles
    }

    /// Position of a kind in the configured order; unlisted kinds sort last
    fn priority(&self, kind: PuzzleKind) -> usize {
        self.puzzle_order
            .iter()
            .position(|id| id == kind.id())
            .unwrap_or(self.puzzle_order.len())
    }

    /// Stable sort by configured type order
    #[must_use]
    pub fn sort_by_config(&self, mut puzzles: Vec<ParsedPuzzle>) -> Vec<ParsedPuzzle> {
        puzzles.sort_by_key(|puzzle| self.priority(puzzle.kind));
        puzzles
    }

    /// Keep the first occurrence of every identity key
    #[must_use]
    pub fn deduplicate(&self, puzzles: Vec<ParsedPuzzle>) -> Vec<ParsedPuzzle> {
        let mut seen = HashSet::new();

        puzzles
            .into_iter()
            .filter(|puzzle| {
                let Some(format) = self.registry.get(puzzle.kind) else {
                    return true;
                };
                let key = format.identity(&puzzle.record);
                let fresh = seen.insert(key);
                if !fresh {
                    debug!(kind = %puzzle.kind, "dropping duplicate");
                }
                fresh
            })
            .collect()
    }

    /// Combine records that share an aggregation group.
    ///
    /// The combined entry takes the place of the group's first member.
    #[must_use]
    pub fn aggregate(&self, puzzles: Vec<ParsedPuzzle>) -> Vec<ParsedPuzzle> {
        let mut groups: Vec<(PuzzleKind, String, Vec<usize>)> = Vec::new();

        for (index, puzzle) in puzzles.iter().enumerate() {
            if puzzle.is_aggregate() {
                continue;
            }
            let Some(group) = self
                .registry
                .get(puzzle.kind)
                .and_then(|format| format.aggregation_group(&puzzle.record))
            else {
                continue;
            };

            match groups
                .iter_mut()
                .find(|(kind, key, _)| *kind == puzzle.kind && *key == group)
            {
                Some((_, _, members)) => members.push(index),
                None => groups.push((puzzle.kind, group, vec![index])),
            }
        }

        if groups.is_empty() {
            return puzzles;
        }

        let mut combined: HashMap<usize, ParsedPuzzle> = HashMap::new();
        let mut absorbed: HashSet<usize> = HashSet::new();

        for (kind, group, members) in &groups {
            let Some(format) = self.registry.get(*kind) else {
                continue;
            };
            let member_refs: Vec<&ParsedPuzzle> = members.iter().map(|&i| &puzzles[i]).collect();
            let Some(text) = format.combine(&member_refs) else {
                continue;
            };

            debug!(kind = %kind, group = %group, members = members.len(), "aggregated group");
            combined.insert(members[0], ParsedPuzzle::aggregate(member_refs[0], text));
            absorbed.extend(members.iter().skip(1));
        }

        puzzles
            .into_iter()
            .enumerate()
            .filter(|(index, _)| !absorbed.contains(index))
            .map(|(index, puzzle)| combined.remove(&index).unwrap_or(puzzle))
            .collect()
    }

    /// Render one puzzle, using the pre-rendered text of aggregates
    #[must_use]
    pub fn render_puzzle(&self, puzzle: &ParsedPuzzle) -> String {
        if let Some(rendered) = &puzzle.rendered {
            return rendered.clone();
        }
        self.registry
            .get(puzzle.kind)
            .map(|format| format.render(&puzzle.record))
            .unwrap_or_default()
    }

    /// Join rendered puzzles into the final text.
    ///
    /// Multi-line and aggregated entries are set off from what precedes them
    /// by one blank line.
    #[must_use]
    pub fn format_output(&self, puzzles: &[ParsedPuzzle]) -> String {
        if puzzles.is_empty() {
            return NO_PUZZLES_FOUND.to_string();
        }

        let mut output: Vec<String> = Vec::with_capacity(puzzles.len() * 2);

        for puzzle in puzzles {
            let text = self.render_puzzle(puzzle);
            if !output.is_empty() && (text.contains('\n') || puzzle.is_aggregate()) {
                output.push(String::new());
            }
            output.push(text);
        }

        output.join("\n")
    }
}

impl Default for PuzzleManager {
    fn default() -> Self {
        Self::new(FormatRegistry::builtin(), Config::default().puzzle_order)
    }
}
