//! Snapshot system: queries the ECS world and builds a `WorldSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use warsim_core::enums::Side;
use warsim_core::state::{UnitView, WorldSnapshot};
use warsim_core::types::UnitId;

use crate::entity::{Body, UnitKind, UnitName};
use crate::world::SimWorld;

/// Build a snapshot of every live unit, ordered by id.
pub fn build_snapshot(world: &SimWorld) -> WorldSnapshot {
    let mut units: Vec<UnitView> = world
        .ecs()
        .query::<(&UnitId, &UnitName, &Side, &Body, &UnitKind)>()
        .iter()
        .map(|(_, (id, name, side, body, kind))| UnitView {
            id: *id,
            name: name.0.clone(),
            class: kind.class(),
            side: *side,
            position: body.position,
            heading: body.heading,
            speed: body.speed,
            target: match kind {
                UnitKind::Pac3Missile(missile) => Some(missile.target),
                UnitKind::Aircraft => None,
            },
        })
        .collect();
    units.sort_by_key(|u| u.id);

    WorldSnapshot {
        time: world.time(),
        units,
    }
}
