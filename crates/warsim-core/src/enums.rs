//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Concrete unit class, mirrored from the sim crate's `UnitKind` for snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitClass {
    Aircraft,
    Pac3Missile,
}

/// Allegiance of a unit. Only two sides exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[default]
    Blue,
    Red,
}

/// Which proximity rule destroyed a missile and its victim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Reached lethal proximity of its designated target.
    TargetKilled,
    /// Reached lethal proximity of the friendly unit of the two-party pair.
    FratricideKilled,
}
