//! Unit registry and simulation clock.
//!
//! `SimWorld` owns the hecs ECS world and an id index. Units are addressed
//! by engine-assigned `UnitId`s; the hecs entity handle never leaves this
//! module. Units are checked out as owned `Unit` values for their update
//! and committed back afterwards.

use std::collections::HashMap;

use hecs::{Entity, World};

use warsim_core::enums::Side;
use warsim_core::types::{Position, SimTime, UnitId};

use crate::entity::{Body, Unit, UnitKind, UnitName};

#[derive(Default)]
pub struct SimWorld {
    units: World,
    index: HashMap<UnitId, Entity>,
    next_id: u32,
    time: SimTime,
}

impl SimWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Elapsed simulation time in seconds.
    pub fn clock(&self) -> f64 {
        self.time.elapsed_secs
    }

    pub(crate) fn advance_clock(&mut self, dt_secs: f64) {
        self.time.advance(dt_secs);
    }

    /// Register a new unit and return its id. Ids start at 1.
    pub fn spawn(&mut self, name: &str, side: Side, body: Body, kind: UnitKind) -> UnitId {
        self.next_id += 1;
        let id = UnitId(self.next_id);
        let entity = self
            .units
            .spawn((id, UnitName(name.to_string()), side, body, kind));
        self.index.insert(id, entity);
        id
    }

    pub fn unit_exists(&self, id: UnitId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn unit_count(&self) -> usize {
        self.index.len()
    }

    /// Live ids in ascending order.
    pub fn unit_ids(&self) -> Vec<UnitId> {
        let mut ids: Vec<UnitId> = self.index.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Owned copy of a unit, or `None` if it does not exist.
    pub fn get_unit(&self, id: UnitId) -> Option<Unit> {
        let entity = *self.index.get(&id)?;
        let name = (*self.units.get::<&UnitName>(entity).ok()?).clone();
        let side = *self.units.get::<&Side>(entity).ok()?;
        let body = *self.units.get::<&Body>(entity).ok()?;
        let kind = (*self.units.get::<&UnitKind>(entity).ok()?).clone();
        Some(Unit {
            id,
            name,
            side,
            body,
            kind,
        })
    }

    pub fn position_of(&self, id: UnitId) -> Option<Position> {
        let entity = *self.index.get(&id)?;
        self.units.get::<&Body>(entity).ok().map(|b| b.position)
    }

    /// Horizontal distance between two units in kilometres, `None` if
    /// either is absent.
    pub fn distance_km(&self, a: UnitId, b: UnitId) -> Option<f64> {
        Some(self.position_of(a)?.distance_km(&self.position_of(b)?))
    }

    /// Remove a unit. Removing an absent id is a no-op. Returns whether a
    /// unit was actually removed.
    pub fn remove_unit(&mut self, id: UnitId) -> bool {
        match self.index.remove(&id) {
            Some(entity) => {
                let _ = self.units.despawn(entity);
                true
            }
            None => false,
        }
    }

    /// Write a checked-out unit back. Ignored if the unit was removed in
    /// the meantime, so removal stays terminal.
    pub fn commit(&mut self, unit: Unit) {
        let Some(&entity) = self.index.get(&unit.id) else {
            return;
        };
        if let Ok(mut body) = self.units.get::<&mut Body>(entity) {
            *body = unit.body;
        }
        if let Ok(mut kind) = self.units.get::<&mut UnitKind>(entity) {
            *kind = unit.kind;
        }
    }

    /// Underlying ECS world, for systems that query components directly.
    pub(crate) fn ecs(&self) -> &World {
        &self.units
    }

    pub(crate) fn entity(&self, id: UnitId) -> Option<Entity> {
        self.index.get(&id).copied()
    }

    pub(crate) fn ecs_mut(&mut self) -> &mut World {
        &mut self.units
    }
}
