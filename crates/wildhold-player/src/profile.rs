//! [`PlayerProfile`]: the aggregate record of a player's identity, resources,
//! and creature ownership.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{Creature, CreatureId, ProfileError, Resources};

/// Stable unique player identifier, assigned by the account system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player's persistent game state.
///
/// The creature list keeps insertion order and may contain the same creature
/// more than once; only [`add_creature`](Self::add_creature) and the remove
/// operations change it. `id` is fixed at construction.
///
/// Everything else is plain data. Resource balances and timestamps are written
/// directly and never validated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    id: PlayerId,
    pub username: String,
    creatures: Vec<Creature>,
    pub resources: Resources,
    /// Opaque timestamp text, not interpreted here.
    pub last_played: String,
    /// Opaque timestamp text, not interpreted here.
    pub created_at: String,
    /// Whether the one-time starter creature reward is still claimable.
    pub can_claim_start_creature: bool,
}

impl PlayerProfile {
    /// Create a fresh profile: no creatures, zeroed resources, starter reward
    /// claimable. `last_played` starts equal to `created_at`.
    pub fn new(id: PlayerId, username: impl Into<String>, created_at: impl Into<String>) -> Self {
        let created_at = created_at.into();
        Self {
            id,
            username: username.into(),
            creatures: Vec::new(),
            resources: Resources::default(),
            last_played: created_at.clone(),
            created_at,
            can_claim_start_creature: true,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Owned creatures in insertion order.
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn creature_count(&self) -> usize {
        self.creatures.len()
    }

    /// Whether any owned creature has this id.
    pub fn owns(&self, id: CreatureId) -> bool {
        self.creatures.iter().any(|c| c.id == id)
    }

    /// Append a creature to the end of the collection.
    ///
    /// Duplicates are allowed; this never fails.
    pub fn add_creature(&mut self, creature: Creature) {
        trace!(player = %self.id, creature = %creature.id, "adding creature");
        self.creatures.push(creature);
    }

    /// Remove the first creature equal to `creature` and return it.
    ///
    /// Returns `None` and leaves the collection untouched when no match exists.
    /// Remaining creatures keep their relative order.
    pub fn remove_creature(&mut self, creature: &Creature) -> Option<Creature> {
        match self.creatures.iter().position(|c| c == creature) {
            Some(index) => {
                trace!(player = %self.id, creature = %creature.id, "removing creature");
                Some(self.creatures.remove(index))
            }
            None => {
                debug!(player = %self.id, creature = %creature.id, "creature not owned, nothing removed");
                None
            }
        }
    }

    /// Like [`remove_creature`](Self::remove_creature), but a missing creature
    /// is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::CreatureNotFound`] if no owned creature matches.
    pub fn try_remove_creature(&mut self, creature: &Creature) -> Result<Creature, ProfileError> {
        self.remove_creature(creature)
            .ok_or(ProfileError::CreatureNotFound {
                player: self.id,
                creature: creature.id,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creature(id: u64) -> Creature {
        Creature::new(CreatureId(id), format!("species_{id}"))
    }

    fn ids(profile: &PlayerProfile) -> Vec<u64> {
        profile.creatures().iter().map(|c| c.id.0).collect()
    }

    fn fresh() -> PlayerProfile {
        PlayerProfile::new(PlayerId(42), "rowan", "2026-10-17T09:00:00Z")
    }

    #[test]
    fn test_new_profile_is_empty_and_zeroed() {
        let profile = fresh();
        assert_eq!(profile.id(), PlayerId(42));
        assert_eq!(profile.username, "rowan");
        assert!(profile.creatures().is_empty());
        assert!(profile.resources.is_zero());
        assert_eq!(profile.last_played, profile.created_at);
        assert!(profile.can_claim_start_creature);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut profile = fresh();
        for id in [5, 1, 9, 3] {
            profile.add_creature(creature(id));
        }
        assert_eq!(ids(&profile), vec![5, 1, 9, 3]);
        assert_eq!(profile.creature_count(), 4);
    }

    #[test]
    fn test_add_allows_duplicates() {
        let mut profile = fresh();
        profile.add_creature(creature(1));
        profile.add_creature(creature(1));
        assert_eq!(ids(&profile), vec![1, 1]);
    }

    #[test]
    fn test_remove_absent_leaves_collection_unchanged() {
        let mut profile = fresh();
        profile.add_creature(creature(1));
        profile.add_creature(creature(2));
        let before = profile.clone();

        assert!(profile.remove_creature(&creature(99)).is_none());
        assert_eq!(profile, before);
    }

    #[test]
    fn test_remove_from_empty_is_noop() {
        let mut profile = fresh();
        assert!(profile.remove_creature(&creature(1)).is_none());
        assert!(profile.creatures().is_empty());
    }

    #[test]
    fn test_remove_single_occurrence_keeps_order() {
        let mut profile = fresh();
        for id in [1, 2, 3, 4] {
            profile.add_creature(creature(id));
        }
        let removed = profile.remove_creature(&creature(3)).unwrap();
        assert_eq!(removed.id, CreatureId(3));
        assert_eq!(ids(&profile), vec![1, 2, 4]);
    }

    #[test]
    fn test_remove_only_first_of_duplicates() {
        let mut profile = fresh();
        for id in [7, 1, 7, 2, 7] {
            profile.add_creature(creature(id));
        }
        profile.remove_creature(&creature(7));
        assert_eq!(ids(&profile), vec![1, 7, 2, 7]);
    }

    #[test]
    fn test_add_add_add_remove_scenario() {
        let mut profile = fresh();
        assert_eq!(profile.resources.gold, 0);
        let a = creature(1);
        let b = creature(2);

        profile.add_creature(a.clone());
        profile.add_creature(b.clone());
        profile.add_creature(a.clone());
        assert_eq!(profile.creatures(), &[a.clone(), b.clone(), a.clone()]);

        profile.remove_creature(&a);
        assert_eq!(profile.creatures(), &[b, a]);
    }

    #[test]
    fn test_remove_matches_by_id_not_fields() {
        let mut profile = fresh();
        profile.add_creature(creature(4));

        let mut stale = creature(4);
        stale.level = 30;
        let removed = profile.remove_creature(&stale).unwrap();
        // The stored value is returned, not the argument.
        assert_eq!(removed.level, 1);
        assert!(!profile.owns(CreatureId(4)));
    }

    #[test]
    fn test_try_remove_reports_missing() {
        let mut profile = fresh();
        profile.add_creature(creature(1));

        assert!(profile.try_remove_creature(&creature(1)).is_ok());
        assert_eq!(
            profile.try_remove_creature(&creature(1)),
            Err(ProfileError::CreatureNotFound {
                player: PlayerId(42),
                creature: CreatureId(1),
            })
        );
    }

    #[test]
    fn test_negative_gold_is_accepted() {
        let mut profile = fresh();
        profile.resources.gold = -5;
        assert_eq!(profile.resources.gold, -5);
    }

    #[test]
    fn test_profile_serializes_with_creatures() {
        let mut profile = fresh();
        profile.add_creature(creature(3));
        profile.resources.gems = 12;

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["id"], 42);
        assert_eq!(json["creatures"][0]["species"], "species_3");
        assert_eq!(json["resources"]["gems"], 12);
    }
}
