use core::fmt;

use serde::{Deserialize, Serialize};

/// Every puzzle type the collator knows how to read and write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleKind {
    Connections,
    FramedRegular,
    FramedOneFrame,
    Quolture,
    Strands,
    Wordle,
    Pips,
    Waffle,
}

impl PuzzleKind {
    pub const ALL: [Self; 8] = [
        Self::Connections,
        Self::FramedRegular,
        Self::FramedOneFrame,
        Self::Quolture,
        Self::Strands,
        Self::Wordle,
        Self::Pips,
        Self::Waffle,
    ];

    /// Stable identifier used in configuration files
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Connections => "connections",
            Self::FramedRegular => "framed_regular",
            Self::FramedOneFrame => "framed_oneframe",
            Self::Quolture => "quolture",
            Self::Strands => "strands",
            Self::Wordle => "wordle",
            Self::Pips => "pips",
            Self::Waffle => "waffle",
        }
    }

    /// Human-readable game name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Connections => "Connections",
            Self::FramedRegular => "Framed",
            Self::FramedOneFrame => "Framed - One Frame Challenge",
            Self::Quolture => "Quolture",
            Self::Strands => "Strands",
            Self::Wordle => "Wordle",
            Self::Pips => "Pips",
            Self::Waffle => "Waffle",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

impl fmt::Display for PuzzleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Pips difficulty levels, declared in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Easy" => Some(Self::Easy),
            "Medium" => Some(Self::Medium),
            "Hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Title line plus a single emoji row, shared by both Framed variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FramedRecord {
    pub title: String,
    pub emoji_grid: String,
    pub puzzle_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoltureRecord {
    /// Every non-address line, in paste order
    pub lines: Vec<String>,
    pub puzzle_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordleRecord {
    pub title: String,
    pub grid_lines: Vec<String>,
    pub puzzle_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionsRecord {
    pub puzzle_number: String,
    pub grid_lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrandsRecord {
    pub puzzle_number: String,
    /// Quoted theme line, quotes included
    pub theme: Option<String>,
    pub emoji_lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipsRecord {
    pub puzzle_number: String,
    pub difficulty: Difficulty,
    pub emoji: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaffleRecord {
    pub title: String,
    pub puzzle_number: String,
    pub grid_lines: Vec<String>,
    pub streak_info: Option<String>,
}

/// Structured fields extracted from one puzzle block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PuzzleRecord {
    Framed(FramedRecord),
    Quolture(QuoltureRecord),
    Wordle(WordleRecord),
    Connections(ConnectionsRecord),
    Strands(StrandsRecord),
    Pips(PipsRecord),
    Waffle(WaffleRecord),
}

macro_rules! impl_record_accessors {
    ($($variant:ident => $record:ty),*) => {
        $(
            impl PuzzleRecord {
                paste::paste! {
                    #[must_use]
                    pub const fn [<as_ $variant:snake>](&self) -> Option<&$record> {
                        if let Self::$variant(record) = self {
                            Some(record)
                        } else {
                            None
                        }
                    }

                    #[must_use]
                    pub const fn [<is_ $variant:snake>](&self) -> bool {
                        self.[<as_ $variant:snake>]().is_some()
                    }
                }
            }
        )*
    };
}

impl_record_accessors!(
    Framed => FramedRecord,
    Quolture => QuoltureRecord,
    Wordle => WordleRecord,
    Connections => ConnectionsRecord,
    Strands => StrandsRecord,
    Pips => PipsRecord,
    Waffle => WaffleRecord
);

/// What makes two parsed puzzles the same real-world instance
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityKey {
    pub kind: PuzzleKind,
    pub number: String,
    pub variant: Option<String>,
}

impl IdentityKey {
    #[must_use]
    pub fn new(kind: PuzzleKind, number: impl Into<String>) -> Self {
        Self {
            kind,
            number: number.into(),
            variant: None,
        }
    }

    #[must_use]
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }
}

/// A recognized puzzle tagged with the kind that parsed it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPuzzle {
    pub kind: PuzzleKind,
    pub record: PuzzleRecord,
    /// The block this puzzle was parsed from
    pub raw_text: String,
    /// Pre-rendered text, present only on aggregated entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered: Option<String>,
}

impl ParsedPuzzle {
    #[must_use]
    pub fn new(kind: PuzzleKind, record: PuzzleRecord, raw_text: impl Into<String>) -> Self {
        Self {
            kind,
            record,
            raw_text: raw_text.into(),
            rendered: None,
        }
    }

    /// Build an aggregate entry that replaces a group of records
    #[must_use]
    pub fn aggregate(first: &Self, rendered: String) -> Self {
        Self {
            kind: first.kind,
            record: first.record.clone(),
            raw_text: first.raw_text.clone(),
            rendered: Some(rendered),
        }
    }

    #[must_use]
    pub const fn is_aggregate(&self) -> bool {
        self.rendered.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_ids_round_trip() {
        for kind in PuzzleKind::ALL {
            assert_eq!(PuzzleKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(PuzzleKind::from_id("crossword"), None);
    }

    #[test]
    fn difficulty_orders_easy_to_hard() {
        let mut levels = vec![Difficulty::Hard, Difficulty::Easy, Difficulty::Medium];
        levels.sort();
        assert_eq!(
            levels,
            vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        );
        assert_eq!(Difficulty::parse("Medium"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse("medium"), None);
    }

    #[test]
    fn record_accessors() {
        let record = PuzzleRecord::Pips(PipsRecord {
            puzzle_number: "173".into(),
            difficulty: Difficulty::Easy,
            emoji: "🟢".into(),
            time: "1:25".into(),
        });

        assert!(record.is_pips());
        assert!(!record.is_wordle());
        assert_eq!(record.as_pips().map(|p| p.time.as_str()), Some("1:25"));
    }

    #[test]
    fn identity_key_variant_distinguishes() {
        let easy = IdentityKey::new(PuzzleKind::Pips, "171").with_variant("Easy");
        let hard = IdentityKey::new(PuzzleKind::Pips, "171").with_variant("Hard");
        assert_ne!(easy, hard);
        assert_eq!(easy, IdentityKey::new(PuzzleKind::Pips, "171").with_variant("Easy"));
    }
}
