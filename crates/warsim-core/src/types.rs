//! Fundamental geometric and simulation types.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::METERS_PER_KM;

/// Engine-assigned unit identifier. Ids start at 1 and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 3D position in simulation space (meters, Cartesian).
/// x = East, y = North, z = Up (altitude).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Horizontal components as a vector (East, North).
    pub fn planar(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Horizontal range (ignoring altitude).
    pub fn horizontal_range_to(&self, other: &Position) -> f64 {
        self.planar().distance(other.planar())
    }

    /// Horizontal range in kilometres. This is the distance used for
    /// all proximity checks.
    pub fn distance_km(&self, other: &Position) -> f64 {
        self.horizontal_range_to(other) / METERS_PER_KM
    }

    /// Position displaced horizontally by `distance_m` along `heading_deg`
    /// (0 = North, clockwise). Altitude is unchanged.
    pub fn offset(&self, heading_deg: f64, distance_m: f64) -> Position {
        let (sin, cos) = heading_deg.to_radians().sin_cos();
        let moved = self.planar() + DVec2::new(sin, cos) * distance_m;
        Position::new(moved.x, moved.y, self.z)
    }
}

impl SimTime {
    /// Advance by one tick of `dt_secs`.
    pub fn advance(&mut self, dt_secs: f64) {
        self.tick += 1;
        self.elapsed_secs += dt_secs;
    }
}
