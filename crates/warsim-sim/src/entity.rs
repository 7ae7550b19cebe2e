//! Simulated units and the base motion model.
//!
//! A `Unit` is a plain record checked out of the registry for the duration
//! of its update. Behavior is selected by the closed `UnitKind` enum.

use warsim_core::angles::{is_valid_heading, normalize_heading};
use warsim_core::constants::KNOTS_TO_MPS;
use warsim_core::enums::{Side, UnitClass};
use warsim_core::errors::SimError;
use warsim_core::events::Event;
use warsim_core::types::{Position, UnitId};

use crate::missile::Pac3Missile;
use crate::world::SimWorld;

/// Anything the engine can tick.
pub trait SimulatedEntity {
    fn update(&mut self, dt_secs: f64, world: &mut SimWorld) -> Vec<Event>;
}

/// Kinematic state shared by all units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Position,
    /// Degrees, 0 = North, clockwise. Always in `[0, 360)`.
    pub heading: f64,
    /// Knots.
    pub speed: f64,
}

impl Body {
    pub fn new(position: Position, heading: f64, speed: f64) -> Self {
        Self {
            position,
            heading: normalize_heading(heading),
            speed,
        }
    }

    /// Straight-line motion along the current heading for `dt_secs`.
    /// Produces no events.
    pub fn integrate(&mut self, dt_secs: f64) -> Vec<Event> {
        self.heading = normalize_heading(self.heading);
        self.position = self
            .position
            .offset(self.heading, self.speed * KNOTS_TO_MPS * dt_secs);
        Vec::new()
    }
}

/// Display name of a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitName(pub String);

/// Closed set of unit behaviors.
#[derive(Debug, Clone)]
pub enum UnitKind {
    /// Flies straight at constant speed; heading set directly.
    Aircraft,
    Pac3Missile(Pac3Missile),
}

impl UnitKind {
    pub fn class(&self) -> UnitClass {
        match self {
            UnitKind::Aircraft => UnitClass::Aircraft,
            UnitKind::Pac3Missile(_) => UnitClass::Pac3Missile,
        }
    }
}

/// A unit as stored in the registry.
#[derive(Debug, Clone)]
pub struct Unit {
    pub id: UnitId,
    pub name: UnitName,
    pub side: Side,
    pub body: Body,
    pub kind: UnitKind,
}

impl Unit {
    /// Apply an external heading command. Missiles record a setpoint and
    /// turn under their rate limit; aircraft turn immediately.
    pub fn command_heading(&mut self, heading: f64) -> Result<(), SimError> {
        match &mut self.kind {
            UnitKind::Pac3Missile(missile) => missile.set_commanded_heading(heading),
            UnitKind::Aircraft => {
                if !is_valid_heading(heading) {
                    return Err(SimError::InvalidHeading(heading));
                }
                self.body.heading = heading;
                Ok(())
            }
        }
    }

    pub fn as_missile(&self) -> Option<&Pac3Missile> {
        match &self.kind {
            UnitKind::Pac3Missile(missile) => Some(missile),
            UnitKind::Aircraft => None,
        }
    }
}

impl SimulatedEntity for Unit {
    fn update(&mut self, dt_secs: f64, world: &mut SimWorld) -> Vec<Event> {
        match &mut self.kind {
            UnitKind::Aircraft => self.body.integrate(dt_secs),
            UnitKind::Pac3Missile(missile) => {
                missile.update(self.id, &mut self.body, dt_secs, world)
            }
        }
    }
}
