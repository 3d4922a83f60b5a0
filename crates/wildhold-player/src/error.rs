//! Player profile error types.

use crate::{CreatureId, PlayerId};

/// Errors reported by the checked profile operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProfileError {
    /// The creature is not in the player's collection.
    #[error("player {player} does not own creature {creature}")]
    CreatureNotFound {
        player: PlayerId,
        creature: CreatureId,
    },
}
