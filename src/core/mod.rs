//! Core engine plumbing: deterministic RNG.
//!
//! Everything game-specific lives in `words` and `session`; this module
//! holds the pieces that would survive a different puzzle on top.

pub mod rng;

pub use rng::{GameRng, GameRngState};
