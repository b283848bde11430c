//! The word bank: a fixed, validated catalog of 16 words in 4 groups.
//!
//! `WordBank` is the read-only input to a game session. All cardinality
//! invariants are checked once at construction; after that the bank never
//! changes, so the engine can index into it freely.
//!
//! ## Example
//!
//! ```
//! use word_connections::words::WordBank;
//!
//! let bank = WordBank::builtin();
//! assert_eq!(bank.len(), 16);
//! assert_eq!(bank.group_count(), 4);
//!
//! let id = bank.id_of("Carrot").unwrap();
//! assert_eq!(bank.get(id).unwrap().group, "Vegetable");
//! ```

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::entry::{GroupId, WordEntry, WordId};

/// Total number of words in a bank.
pub const BANK_SIZE: usize = 16;

/// Number of semantic groups.
pub const GROUP_COUNT: usize = 4;

/// Number of words per group.
pub const GROUP_SIZE: usize = 4;

/// Validation failure while constructing a [`WordBank`].
///
/// A malformed bank is a fatal startup condition: no session is ever
/// created from one, so none of these occur at play time.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BankError {
    /// The bank must contain exactly [`BANK_SIZE`] entries.
    #[error("expected {BANK_SIZE} entries, got {0}")]
    WrongEntryCount(usize),

    /// Two entries share the same `text`.
    #[error("duplicate word {0:?}")]
    DuplicateWord(String),

    /// The bank must contain exactly [`GROUP_COUNT`] distinct groups.
    #[error("expected {GROUP_COUNT} groups, got {0}")]
    WrongGroupCount(usize),

    /// Every group must contain exactly [`GROUP_SIZE`] entries.
    #[error("group {name:?} has {count} members, expected {GROUP_SIZE}")]
    UnevenGroup { name: String, count: usize },
}

/// Immutable catalog of the 16 puzzle words.
///
/// Construction validates all cardinality invariants and builds the
/// text and group indexes. There is no mutation API.
#[derive(Clone, Debug, PartialEq)]
pub struct WordBank {
    entries: Vec<WordEntry>,
    by_text: FxHashMap<String, WordId>,
    /// Group names in order of first appearance.
    group_names: Vec<String>,
    /// Group of each entry, parallel to `entries`.
    entry_groups: Vec<GroupId>,
    /// Member ids per group, in declaration order.
    group_members: Vec<Vec<WordId>>,
}

impl WordBank {
    /// Build a bank from an entry list, validating all invariants.
    ///
    /// ## Errors
    ///
    /// - [`BankError::WrongEntryCount`] if there are not exactly 16 entries
    /// - [`BankError::DuplicateWord`] if two entries share a `text`
    /// - [`BankError::WrongGroupCount`] if there are not exactly 4 groups
    /// - [`BankError::UnevenGroup`] if any group does not have 4 members
    pub fn new(entries: Vec<WordEntry>) -> Result<Self, BankError> {
        if entries.len() != BANK_SIZE {
            return Err(BankError::WrongEntryCount(entries.len()));
        }

        let mut by_text = FxHashMap::default();
        let mut group_names: Vec<String> = Vec::new();
        let mut entry_groups = Vec::with_capacity(BANK_SIZE);
        let mut group_members: Vec<Vec<WordId>> = Vec::new();

        for (index, entry) in entries.iter().enumerate() {
            let id = WordId::new(index as u32);

            if by_text.insert(entry.text.clone(), id).is_some() {
                return Err(BankError::DuplicateWord(entry.text.clone()));
            }

            let group = match group_names.iter().position(|name| *name == entry.group) {
                Some(position) => GroupId::new(position as u8),
                None => {
                    group_names.push(entry.group.clone());
                    group_members.push(Vec::new());
                    GroupId::new((group_names.len() - 1) as u8)
                }
            };

            entry_groups.push(group);
            group_members[group.raw() as usize].push(id);
        }

        if group_names.len() != GROUP_COUNT {
            return Err(BankError::WrongGroupCount(group_names.len()));
        }

        for (name, members) in group_names.iter().zip(&group_members) {
            if members.len() != GROUP_SIZE {
                return Err(BankError::UnevenGroup {
                    name: name.clone(),
                    count: members.len(),
                });
            }
        }

        Ok(Self {
            entries,
            by_text,
            group_names,
            entry_groups,
            group_members,
        })
    }

    /// The canonical catalog from the original puzzle:
    /// Vegetable, Animal, Color, Vehicle.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = vec![
            WordEntry::new("Carrot", "A vegetable", "Vegetable"),
            WordEntry::new("Potato", "A vegetable", "Vegetable"),
            WordEntry::new("Tomato", "A vegetable", "Vegetable"),
            WordEntry::new("Onion", "A vegetable", "Vegetable"),
            WordEntry::new("Dog", "An animal", "Animal"),
            WordEntry::new("Cat", "An animal", "Animal"),
            WordEntry::new("Elephant", "An animal", "Animal"),
            WordEntry::new("Lion", "An animal", "Animal"),
            WordEntry::new("Red", "A color", "Color"),
            WordEntry::new("Blue", "A color", "Color"),
            WordEntry::new("Green", "A color", "Color"),
            WordEntry::new("Yellow", "A color", "Color"),
            WordEntry::new("Bus", "A vehicle", "Vehicle"),
            WordEntry::new("Car", "A vehicle", "Vehicle"),
            WordEntry::new("Bicycle", "A vehicle", "Vehicle"),
            WordEntry::new("Motorcycle", "A vehicle", "Vehicle"),
        ];

        // Startup assertion: the built-in catalog satisfies every invariant.
        Self::new(entries).expect("built-in catalog is valid")
    }

    /// Number of entries (always [`BANK_SIZE`]).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A validated bank is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// All word ids in declaration order.
    pub fn word_ids(&self) -> impl Iterator<Item = WordId> {
        (0..self.entries.len() as u32).map(WordId::new)
    }

    /// Get an entry by id.
    #[must_use]
    pub fn get(&self, id: WordId) -> Option<&WordEntry> {
        self.entries.get(id.raw() as usize)
    }

    /// Get an entry by id, panicking if not found.
    ///
    /// Use for ids that came from this bank.
    #[must_use]
    pub fn get_unchecked(&self, id: WordId) -> &WordEntry {
        self.entries
            .get(id.raw() as usize)
            .expect("word id not in bank")
    }

    /// Look up a word id by its text.
    #[must_use]
    pub fn id_of(&self, text: &str) -> Option<WordId> {
        self.by_text.get(text).copied()
    }

    /// Number of groups (always [`GROUP_COUNT`]).
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.group_names.len()
    }

    /// All group ids in declaration order.
    pub fn group_ids(&self) -> impl Iterator<Item = GroupId> {
        (0..self.group_names.len() as u8).map(GroupId::new)
    }

    /// Name of a group.
    ///
    /// Panics if the id did not come from this bank.
    #[must_use]
    pub fn group_name(&self, group: GroupId) -> &str {
        &self.group_names[group.raw() as usize]
    }

    /// Look up a group id by name.
    #[must_use]
    pub fn group_id(&self, name: &str) -> Option<GroupId> {
        self.group_names
            .iter()
            .position(|n| n == name)
            .map(|position| GroupId::new(position as u8))
    }

    /// Group a word belongs to.
    ///
    /// Panics if the id did not come from this bank.
    #[must_use]
    pub fn group_of(&self, id: WordId) -> GroupId {
        self.entry_groups[id.raw() as usize]
    }

    /// Member ids of a group, in declaration order.
    ///
    /// Panics if the id did not come from this bank.
    #[must_use]
    pub fn members(&self, group: GroupId) -> &[WordId] {
        &self.group_members[group.raw() as usize]
    }

    /// Entries of a group by name, for rendering a solved panel.
    ///
    /// Returns an empty vec for an unknown name.
    #[must_use]
    pub fn by_group(&self, name: &str) -> Vec<&WordEntry> {
        match self.group_id(name) {
            Some(group) => self
                .members(group)
                .iter()
                .map(|&id| self.get_unchecked(id))
                .collect(),
            None => Vec::new(),
        }
    }
}
