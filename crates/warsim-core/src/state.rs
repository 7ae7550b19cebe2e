//! World snapshot: the complete visible state after a tick.

use serde::{Deserialize, Serialize};

use crate::enums::{Side, UnitClass};
use crate::types::{Position, SimTime, UnitId};

/// All live units at one point in simulated time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub units: Vec<UnitView>,
}

/// A single unit as seen from outside the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitView {
    pub id: UnitId,
    pub name: String,
    pub class: UnitClass,
    pub side: Side,
    pub position: Position,
    /// Heading (degrees, 0 = North).
    pub heading: f64,
    /// Speed (knots).
    pub speed: f64,
    /// Target being homed on (missiles only).
    pub target: Option<UnitId>,
}

impl WorldSnapshot {
    /// Look up a unit by id.
    pub fn unit(&self, id: UnitId) -> Option<&UnitView> {
        self.units.iter().find(|u| u.id == id)
    }
}
