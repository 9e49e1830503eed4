//! Puzzle data as supplied by the host.
//!
//! The wire shape is two maps, `across` and `down`, from clue number to clue
//! entry:
//!
//! ```json
//! {
//!   "across": { "1": { "clue": "apple", "answer": "りんご", "row": 0, "col": 0 } },
//!   "down": { "2": { "clue": "gorilla", "answer": "ごりら", "row": 0, "col": 2 } }
//! }
//! ```
//!
//! Entries are kept as ordered lists rather than maps so that a clue number
//! repeated within one direction survives deserialization and can be reported
//! by the layout builder instead of silently replacing the earlier entry.

use serde::{Deserialize, Serialize};

use crate::{ClueDefinition, Direction};

/// One clue of the puzzle data, without its direction and number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueEntry {
    /// Clue text shown to the player.
    pub clue: String,
    /// Answer, one grid cell per character.
    pub answer: String,
    /// Row of the first answer character.
    pub row: usize,
    /// Column of the first answer character.
    pub col: usize,
}

impl ClueEntry {
    /// Creates a clue entry.
    #[must_use]
    pub fn new(clue: impl Into<String>, answer: impl Into<String>, row: usize, col: usize) -> Self {
        Self {
            clue: clue.into(),
            answer: answer.into(),
            row,
            col,
        }
    }
}

/// Declarative puzzle data: clue entries keyed by number, per direction.
///
/// # Example
///
/// ```
/// use crossword_core::{ClueEntry, PuzzleData};
///
/// let data = PuzzleData::default()
///     .with_across(1, ClueEntry::new("apple", "AB", 0, 0))
///     .with_down(2, ClueEntry::new("gorilla", "BC", 0, 1));
/// assert_eq!(data.len(), 2);
///
/// let json = r#"{"across": {"1": {"clue": "apple", "answer": "AB", "row": 0, "col": 0}},
///                "down": {"2": {"clue": "gorilla", "answer": "BC", "row": 0, "col": 1}}}"#;
/// let parsed: PuzzleData = serde_json::from_str(json).unwrap();
/// assert_eq!(parsed, data);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleData {
    /// Across clues in authored order.
    #[serde(default, with = "entries")]
    pub across: Vec<(u32, ClueEntry)>,
    /// Down clues in authored order.
    #[serde(default, with = "entries")]
    pub down: Vec<(u32, ClueEntry)>,
}

impl PuzzleData {
    /// Appends an across clue.
    #[must_use]
    pub fn with_across(mut self, number: u32, entry: ClueEntry) -> Self {
        self.across.push((number, entry));
        self
    }

    /// Appends a down clue.
    #[must_use]
    pub fn with_down(mut self, number: u32, entry: ClueEntry) -> Self {
        self.down.push((number, entry));
        self
    }

    /// Returns the total number of clue entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.across.len() + self.down.len()
    }

    /// Returns `true` if there are no clue entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.across.is_empty() && self.down.is_empty()
    }

    /// Converts the data into clue definitions, across entries first.
    #[must_use]
    pub fn into_definitions(self) -> Vec<ClueDefinition> {
        let across = self
            .across
            .into_iter()
            .map(|entry| (Direction::Across, entry));
        let down = self.down.into_iter().map(|entry| (Direction::Down, entry));
        across
            .chain(down)
            .map(|(direction, (number, entry))| {
                ClueDefinition::new(
                    direction,
                    number,
                    entry.clue,
                    entry.answer,
                    entry.row,
                    entry.col,
                )
            })
            .collect()
    }
}

mod entries {
    use std::fmt;

    use serde::{
        Deserializer, Serializer,
        de::{MapAccess, Visitor},
        ser::SerializeMap as _,
    };

    use super::ClueEntry;

    pub(super) fn serialize<S>(entries: &[(u32, ClueEntry)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (number, entry) in entries {
            map.serialize_entry(number, entry)?;
        }
        map.end()
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(u32, ClueEntry)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(EntriesVisitor)
    }

    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(u32, ClueEntry)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map from clue number to clue entry")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }
}
