//! The mutable game session: state machine, commands, and events.

pub mod engine;
pub mod event;
pub mod phase;

pub use engine::{GameEngine, GuessOutcome, SessionConfig, DEFAULT_LIVES};
pub use event::SessionEvent;
pub use phase::{Outcome, Phase};
