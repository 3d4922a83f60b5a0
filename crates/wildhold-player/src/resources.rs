//! Resource balances held by a player.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four currencies a player accumulates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Gold,
    Wood,
    Stone,
    Gems,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [Self::Gold, Self::Wood, Self::Stone, Self::Gems];

    pub fn name(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Wood => "wood",
            Self::Stone => "stone",
            Self::Gems => "gems",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resource balances.
///
/// Balances are expected to stay non-negative, but nothing here enforces it:
/// fields are written directly and never clamped. Callers that spend resources
/// must check balances themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub gold: i64,
    pub wood: i64,
    pub stone: i64,
    pub gems: i64,
}

impl Resources {
    /// Balance of a single resource.
    pub fn get(&self, kind: ResourceKind) -> i64 {
        match kind {
            ResourceKind::Gold => self.gold,
            ResourceKind::Wood => self.wood,
            ResourceKind::Stone => self.stone,
            ResourceKind::Gems => self.gems,
        }
    }

    /// `(kind, balance)` pairs in [`ResourceKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, i64)> + '_ {
        ResourceKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
