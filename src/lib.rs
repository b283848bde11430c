//! # word-connections
//!
//! A "connections"-style word-grouping puzzle engine. Sixteen words in four
//! semantic categories are dealt as shuffled cards; the player picks four
//! cards believed to share a category and checks the guess. A correct guess
//! reveals a solved group; an incorrect one costs a life. The session ends
//! when all four groups are found or lives run out.
//!
//! ## Design Principles
//!
//! 1. **Pure rule core**: No I/O, no timers, no rendering. The engine
//!    exposes state and accepts commands; a presentation layer renders the
//!    state and forwards user input.
//!
//! 2. **Synchronous authority**: Every command runs to completion. Visual
//!    delays (e.g. pausing before reverting an incorrect guess) live
//!    entirely in the presentation layer, guarded by a generation stamp so
//!    stale callbacks never touch a newer session.
//!
//! 3. **Edge-triggered events**: Win/loss notifications are emitted once,
//!    inside the transition, and drained by the collaborator - never
//!    recomputed per render.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG with a uniform Fisher-Yates shuffle
//! - `words`: word entries, ids, and the validated 16-word bank
//! - `session`: the game engine, its command set, phases, and events
//!
//! ## Example
//!
//! ```
//! use word_connections::{GameEngine, Phase, SessionConfig, WordBank};
//!
//! let mut engine = GameEngine::with_config(
//!     WordBank::builtin(),
//!     SessionConfig::new().seed(42),
//! );
//!
//! for text in ["Carrot", "Potato", "Tomato", "Onion"] {
//!     engine.select_text(text);
//! }
//! assert!(engine.can_check());
//!
//! engine.check();
//! assert_eq!(engine.solved().len(), 1);
//! assert_eq!(engine.remaining().len(), 12);
//! assert_eq!(engine.phase(), Phase::Playing);
//! ```

pub mod core;
pub mod session;
pub mod words;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState};

pub use crate::words::{
    BankError, GroupId, WordBank, WordEntry, WordId, BANK_SIZE, GROUP_COUNT, GROUP_SIZE,
};

pub use crate::session::{
    GameEngine, GuessOutcome, Outcome, Phase, SessionConfig, SessionEvent, DEFAULT_LIVES,
};
