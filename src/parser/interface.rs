//! Puzzle format interface and the ordered registry of formats

use regex::Regex;

use crate::models::{IdentityKey, ParsedPuzzle, PuzzleKind, PuzzleRecord};

use super::parsers::{
    ConnectionsFormat, FramedFormat, FramedOneFrameFormat, PipsFormat, QuoltureFormat,
    StrandsFormat, WaffleFormat, WordleFormat,
};

/// Trait implemented once per supported puzzle type
pub trait PuzzleFormat: Send + Sync {
    /// Get the puzzle kind this format handles
    fn kind(&self) -> PuzzleKind;

    /// Pattern anchored at start of line that marks where this puzzle begins.
    /// Used by the segmenter as a split point.
    fn header(&self) -> Option<&Regex> {
        None
    }

    /// Line pattern signalling that a paste of this puzzle is finished
    fn end_marker(&self) -> Option<&Regex> {
        None
    }

    /// Check if this format recognizes the given text
    fn can_parse(&self, text: &str) -> bool;

    /// Extract structured fields, or `None` if the block is malformed
    fn parse(&self, text: &str) -> Option<PuzzleRecord>;

    /// Render a record to its output layout
    fn render(&self, record: &PuzzleRecord) -> String;

    /// Key under which two records count as the same puzzle
    fn identity(&self, record: &PuzzleRecord) -> IdentityKey {
        IdentityKey::new(self.kind(), self.render(record))
    }

    /// Group key for records that should be combined into one entry
    fn aggregation_group(&self, _record: &PuzzleRecord) -> Option<String> {
        None
    }

    /// Render a group of records as one combined entry
    fn combine(&self, _members: &[&ParsedPuzzle]) -> Option<String> {
        None
    }

    /// Parse and render in one step
    fn process(&self, text: &str) -> Option<String> {
        self.parse(text).map(|record| self.render(&record))
    }
}

/// Ordered, read-only collection of puzzle formats.
///
/// Order matters: `find_for_text` returns the first format whose detector
/// accepts the text.
pub struct FormatRegistry {
    formats: Vec<Box<dyn PuzzleFormat>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            formats: Vec::new(),
        }
    }

    /// Registry with every built-in format, in detection order
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.register(Box::new(ConnectionsFormat));
        registry.register(Box::new(FramedFormat));
        registry.register(Box::new(FramedOneFrameFormat));
        registry.register(Box::new(QuoltureFormat));
        registry.register(Box::new(StrandsFormat));
        registry.register(Box::new(WordleFormat));
        registry.register(Box::new(PipsFormat));
        registry.register(Box::new(WaffleFormat));

        registry
    }

    /// Register a format. A later format for an already registered kind
    /// replaces the earlier one in place.
    pub fn register(&mut self, format: Box<dyn PuzzleFormat>) {
        if let Some(slot) = self.formats.iter_mut().find(|f| f.kind() == format.kind()) {
            *slot = format;
        } else {
            self.formats.push(format);
        }
    }

    /// Find the first format that recognizes the text
    #[must_use]
    pub fn find_for_text(&self, text: &str) -> Option<&dyn PuzzleFormat> {
        self.formats
            .iter()
            .find(|format| format.can_parse(text))
            .map(AsRef::as_ref)
    }

    /// Get the format for a puzzle kind
    #[must_use]
    pub fn get(&self, kind: PuzzleKind) -> Option<&dyn PuzzleFormat> {
        self.formats
            .iter()
            .find(|format| format.kind() == kind)
            .map(AsRef::as_ref)
    }

    /// Get a format by its configuration identifier
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&dyn PuzzleFormat> {
        PuzzleKind::from_id(id).and_then(|kind| self.get(kind))
    }

    /// Iterate over formats in registration order
    pub fn iter(&self) -> impl Iterator<Item = &(dyn PuzzleFormat + 'static)> {
        self.formats.iter().map(AsRef::as_ref)
    }

    /// List all registered kinds in registration order
    #[must_use]
    pub fn available_kinds(&self) -> Vec<PuzzleKind> {
        self.formats.iter().map(|format| format.kind()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}
