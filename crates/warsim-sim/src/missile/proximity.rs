//! Proximity kill detection.
//!
//! Read-only: the detector only looks positions up. Removing units and
//! emitting events is left to the missile update.

use warsim_core::config::FratricideConfig;
use warsim_core::enums::Termination;
use warsim_core::types::{Position, UnitId};

use crate::world::SimWorld;

/// Result of one proximity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    None,
    TargetKilled(UnitId),
    FratricideKilled(UnitId),
}

impl Outcome {
    pub fn termination(&self) -> Option<Termination> {
        match self {
            Outcome::None => None,
            Outcome::TargetKilled(_) => Some(Termination::TargetKilled),
            Outcome::FratricideKilled(_) => Some(Termination::FratricideKilled),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityDetector {
    pub intercept_radius_km: f64,
    pub fratricide: FratricideConfig,
}

impl ProximityDetector {
    pub fn new(intercept_radius_km: f64, fratricide: FratricideConfig) -> Self {
        Self {
            intercept_radius_km,
            fratricide,
        }
    }

    /// Intercept is checked first and short-circuits. The fratricide check
    /// only runs when enabled, against the other unit of the two-party pair;
    /// a missile is never its own fratricide victim. Units that no longer
    /// exist cannot be hit.
    pub fn check(
        &self,
        missile_id: UnitId,
        missile: &Position,
        target: UnitId,
        source: UnitId,
        world: &SimWorld,
    ) -> Outcome {
        if let Some(target_pos) = world.position_of(target) {
            if missile.distance_km(&target_pos) < self.intercept_radius_km {
                return Outcome::TargetKilled(target);
            }
        }

        if self.fratricide.enabled {
            let friendly = self.fratricide.pair.other(source);
            if friendly == missile_id {
                return Outcome::None;
            }
            if let Some(friendly_pos) = world.position_of(friendly) {
                if missile.distance_km(&friendly_pos) < self.fratricide.radius_km {
                    return Outcome::FratricideKilled(friendly);
                }
            }
        }

        Outcome::None
    }
}
