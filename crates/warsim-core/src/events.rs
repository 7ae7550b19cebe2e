//! Events emitted by unit updates.

use serde::{Deserialize, Serialize};

use crate::types::UnitId;

/// Simulation event produced by a unit update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// `aggressor` destroyed `victim`. `source` is the unit that launched
    /// the aggressor and may no longer exist.
    UnitDestroyed {
        aggressor: UnitId,
        source: UnitId,
        victim: UnitId,
    },
}
