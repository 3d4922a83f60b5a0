//! Player profile record: identity, resource balances, and owned creatures.
//!
//! The profile is a plain data aggregate mutated in place for the lifetime of a
//! session. It performs no synchronization; share it across threads only behind
//! a lock chosen by the caller.

mod creature;
mod error;
mod profile;
mod resources;

pub use creature::{Creature, CreatureId};
pub use error::ProfileError;
pub use profile::{PlayerId, PlayerProfile};
pub use resources::{ResourceKind, Resources};
