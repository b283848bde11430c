//! The game engine: one mutable session and its command set.
//!
//! ## Command set
//!
//! - `select` / `select_text`: toggle a card in the selection (capped at 4)
//! - `deselect_all`: clear the selection
//! - `check`: validate the 4-card selection against the bank
//! - `shuffle`: uniformly reorder the cards still in play
//! - `reset`: start a fresh session from the full bank
//!
//! All commands run synchronously to completion. The engine holds no
//! timers: the presentation layer may delay its *visual* reaction to an
//! incorrect guess, but the authoritative `lives`/`remaining` update has
//! already happened by the time `check` returns. `GuessOutcome::Miss`
//! carries the session generation so a delayed callback can detect that a
//! `reset` superseded it.

use log::{debug, info};
use smallvec::SmallVec;

use crate::core::GameRng;
use crate::words::{GroupId, WordBank, WordEntry, WordId, GROUP_SIZE};

use super::event::SessionEvent;
use super::phase::{Outcome, Phase};

/// Lives granted at the start of a session unless configured otherwise.
pub const DEFAULT_LIVES: u8 = 4;

/// Session parameters.
///
/// ## Example
///
/// ```
/// use word_connections::session::{GameEngine, SessionConfig};
/// use word_connections::words::WordBank;
///
/// let engine = GameEngine::with_config(
///     WordBank::builtin(),
///     SessionConfig::new().lives(3).seed(42),
/// );
/// assert_eq!(engine.lives(), 3);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    lives: u8,
    seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            lives: DEFAULT_LIVES,
            seed: None,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Permitted wrong guesses before loss. Must be at least 1.
    #[must_use]
    pub fn lives(mut self, lives: u8) -> Self {
        assert!(lives >= 1, "a session needs at least one life");
        self.lives = lives;
        self
    }

    /// Fix the RNG seed for reproducible shuffles.
    ///
    /// Without a seed the engine draws one from OS entropy.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// What a `check` command found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// All four selected words share this group; it is now solved.
    Solved(GroupId),
    /// The selection spanned more than one group; one life spent.
    Miss {
        /// Lives remaining after the penalty.
        lives: u8,
        /// Session generation at the time of the miss. A delayed visual
        /// reversion must compare this against the current generation and
        /// drop itself if a `reset` happened in between.
        generation: u64,
    },
}

/// A single-player word-grouping session.
///
/// Owns all mutable state: phase, lives, selection, the cards still in
/// play, and the groups solved so far. The [`WordBank`] it was built from
/// is read-only input, re-consulted on every `reset`.
///
/// Stray commands on a terminal session are no-ops; only `reset` acts.
pub struct GameEngine {
    bank: WordBank,
    rng: GameRng,
    phase: Phase,
    initial_lives: u8,
    lives: u8,
    /// Current unconfirmed picks, insertion-ordered, at most 4.
    selection: SmallVec<[WordId; GROUP_SIZE]>,
    /// Cards still in play, in display order.
    remaining: Vec<WordId>,
    /// Groups solved so far, in the order they were solved.
    solved: Vec<GroupId>,
    /// Bumped on every `reset`; stamps `GuessOutcome::Miss`.
    generation: u64,
    /// Pending edge-triggered notifications.
    events: Vec<SessionEvent>,
}

impl GameEngine {
    /// Start a session with default lives and an entropy seed.
    #[must_use]
    pub fn new(bank: WordBank) -> Self {
        Self::with_config(bank, SessionConfig::default())
    }

    /// Start a session with explicit configuration.
    #[must_use]
    pub fn with_config(bank: WordBank, config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut engine = Self {
            bank,
            rng,
            phase: Phase::Playing,
            initial_lives: config.lives,
            lives: config.lives,
            selection: SmallVec::new(),
            remaining: Vec::new(),
            solved: Vec::new(),
            generation: 0,
            events: Vec::new(),
        };
        engine.deal();
        engine
    }

    /// Fresh session state: full bank, newly shuffled.
    fn deal(&mut self) {
        self.phase = Phase::Playing;
        self.lives = self.initial_lives;
        self.selection.clear();
        self.solved.clear();
        self.remaining = self.bank.word_ids().collect();
        self.rng.shuffle(&mut self.remaining);
    }

    // === Commands ===

    /// Toggle a card in the selection.
    ///
    /// - already selected: deselect it
    /// - not selected, fewer than 4 picked, still in play: select it
    /// - otherwise (5th distinct pick, stale id, terminal session): no-op
    ///
    /// Returns the selection after the command.
    pub fn select(&mut self, id: WordId) -> &[WordId] {
        if self.phase != Phase::Playing {
            return &self.selection;
        }

        if let Some(position) = self.selection.iter().position(|&picked| picked == id) {
            self.selection.remove(position);
            debug!("deselected {id}");
        } else if self.selection.len() < GROUP_SIZE && self.remaining.contains(&id) {
            self.selection.push(id);
            debug!("selected {id}");
        }

        &self.selection
    }

    /// Toggle a card by its text. Unknown text is a no-op.
    pub fn select_text(&mut self, text: &str) -> &[WordId] {
        match self.bank.id_of(text) {
            Some(id) => self.select(id),
            None => &self.selection,
        }
    }

    /// Clear the selection. Idempotent.
    pub fn deselect_all(&mut self) {
        self.selection.clear();
    }

    /// Whether `check` would act: exactly 4 picks on a live session.
    #[must_use]
    pub fn can_check(&self) -> bool {
        self.phase == Phase::Playing && self.selection.len() == GROUP_SIZE
    }

    /// Validate the current 4-card selection.
    ///
    /// Returns `None` when the guard fails (fewer than 4 picks, or the
    /// session is terminal) - the engine tolerates misuse rather than
    /// trusting the caller to honor [`can_check`](Self::can_check).
    ///
    /// A correct guess removes the four cards from play, records the
    /// solved group, and clears the selection at no life cost. An
    /// incorrect guess spends one life and leaves the selection and card
    /// order untouched.
    ///
    /// Terminal conditions are evaluated win-first: a correct final guess
    /// on the last life is a win, not a loss.
    pub fn check(&mut self) -> Option<GuessOutcome> {
        if !self.can_check() {
            return None;
        }

        let group = self.bank.group_of(self.selection[0]);
        let unanimous = self
            .selection
            .iter()
            .all(|&id| self.bank.group_of(id) == group);

        let outcome = if unanimous {
            self.remaining.retain(|&id| self.bank.group_of(id) != group);
            self.solved.push(group);
            self.selection.clear();
            self.events.push(SessionEvent::GroupSolved(group));
            debug!("solved group {:?}", self.bank.group_name(group));
            GuessOutcome::Solved(group)
        } else {
            self.lives -= 1;
            debug!("incorrect guess, {} lives left", self.lives);
            GuessOutcome::Miss {
                lives: self.lives,
                generation: self.generation,
            }
        };

        // Win before loss: both can hold after the same guess.
        if self.solved.len() == self.bank.group_count() {
            self.phase = Phase::Won;
            self.events.push(SessionEvent::Won);
            info!("session won after {} groups", self.solved.len());
        } else if self.lives == 0 {
            self.phase = Phase::Lost;
            self.events.push(SessionEvent::Lost);
            info!("session lost with {} groups solved", self.solved.len());
        }

        Some(outcome)
    }

    /// Uniformly reorder the cards still in play.
    ///
    /// Membership, selection, lives, and solved groups are untouched;
    /// selection is by identity, so picked cards stay picked wherever
    /// they land. No-op on a terminal session.
    pub fn shuffle(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.rng.shuffle(&mut self.remaining);
    }

    /// Discard the session and start a new one from the full bank.
    ///
    /// Always enters `Playing`, regardless of prior phase. Bumps the
    /// generation so pending delayed callbacks stamped by an earlier miss
    /// recognize themselves as stale. Undrained events are dropped: they
    /// belonged to the superseded session.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.events.clear();
        self.deal();
        debug!("session reset, generation {}", self.generation);
    }

    // === Read surface ===

    /// Current phase of the state machine.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Terminal result, if the session has ended.
    #[must_use]
    pub fn is_terminal(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Playing => None,
            Phase::Won => Some(Outcome::Won),
            Phase::Lost => Some(Outcome::Lost),
        }
    }

    /// Lives left.
    #[must_use]
    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// Lives a fresh session starts with.
    #[must_use]
    pub fn initial_lives(&self) -> u8 {
        self.initial_lives
    }

    /// Cards still in play, in display order.
    #[must_use]
    pub fn remaining(&self) -> &[WordId] {
        &self.remaining
    }

    /// Entries of the cards still in play, in display order.
    pub fn remaining_entries(&self) -> impl Iterator<Item = &WordEntry> {
        self.remaining.iter().map(|&id| self.bank.get_unchecked(id))
    }

    /// Current picks, in the order they were made.
    #[must_use]
    pub fn selection(&self) -> &[WordId] {
        &self.selection
    }

    /// Whether a card is currently picked.
    #[must_use]
    pub fn is_selected(&self, id: WordId) -> bool {
        self.selection.contains(&id)
    }

    /// Groups solved so far, in the order they were solved.
    #[must_use]
    pub fn solved(&self) -> &[GroupId] {
        &self.solved
    }

    /// Session generation. Bumped on every `reset`.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The read-only catalog this session plays over.
    #[must_use]
    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// Hand pending transition events to the presentation layer.
    ///
    /// Draining is destructive: each event is observed exactly once.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}
