//! Session events - edge-triggered transition notifications.
//!
//! Events are pushed exactly once, inside the state transition that causes
//! them, and handed to the presentation layer via
//! [`GameEngine::drain_events`](super::GameEngine::drain_events). They are
//! never recomputed from state, so a collaborator that reacts to a drained
//! event (say, by showing a toast) reacts exactly once per transition, not
//! once per render.

use serde::{Deserialize, Serialize};

use crate::words::GroupId;

/// A notification emitted by a state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A correct guess revealed this group.
    GroupSolved(GroupId),
    /// The fourth group was solved; the session is over.
    Won,
    /// The last life was spent; the session is over.
    Lost,
}
