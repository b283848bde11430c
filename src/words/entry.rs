//! Word entries - the static card data of the puzzle.
//!
//! A `WordEntry` holds the immutable properties of one card: the word
//! itself, a short definition shown under it, and the name of the semantic
//! group it belongs to. Session-specific data (selected, still in play)
//! is tracked separately by the engine, keyed by `WordId`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a word in the bank.
///
/// Assigned by the bank in declaration order at construction time.
/// Stable for the lifetime of the bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordId(pub u32);

impl WordId {
    /// Create a new word ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for WordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Word({})", self.0)
    }
}

/// Identifier for one of the four semantic groups.
///
/// Groups are numbered in order of first appearance in the bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub u8);

impl GroupId {
    /// Create a new group ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Group({})", self.0)
    }
}

/// One word card: text, definition, and the group it belongs to.
///
/// Identity is the `text` field - the bank rejects duplicates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// The word shown on the card. Unique across the bank.
    pub text: String,

    /// Short definition shown under the word.
    pub definition: String,

    /// Name of the semantic group this word belongs to.
    pub group: String,
}

impl WordEntry {
    /// Create a new word entry.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        definition: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            definition: definition.into(),
            group: group.into(),
        }
    }
}
