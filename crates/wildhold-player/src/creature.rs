//! Creature handle stored in a player's collection.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Stable identifier of a creature instance, assigned by the creature service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CreatureId(pub u64);

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A creature owned by a player.
///
/// Creature stats and behavior live in the creature service; the profile only
/// needs enough to store and identify instances. Two values are equal when
/// their [`CreatureId`]s match, regardless of the other fields, so a creature
/// that leveled up since it was added still matches on removal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Creature {
    pub id: CreatureId,
    /// Species key, e.g. `"emberfox"`.
    pub species: String,
    pub level: u32,
}

impl Creature {
    pub fn new(id: CreatureId, species: impl Into<String>) -> Self {
        Self {
            id,
            species: species.into(),
            level: 1,
        }
    }
}

impl PartialEq for Creature {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Creature {}

impl Hash for Creature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
