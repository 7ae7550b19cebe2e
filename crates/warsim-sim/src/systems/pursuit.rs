//! Pursuit guidance system: commands every missile toward its target.

use warsim_core::types::UnitId;

use crate::entity::{Body, UnitKind};
use crate::guidance::pursuit_heading;
use crate::world::SimWorld;

/// Command each missile whose target still exists to the target's bearing.
/// Missiles whose target is gone keep their last commanded heading, and
/// manually guided missiles are skipped.
pub fn run(world: &mut SimWorld) {
    // Collect commands first (avoid borrow conflicts with hecs)
    let mut commands: Vec<(UnitId, f64)> = Vec::new();
    {
        let mut query = world.ecs().query::<(&UnitId, &Body, &UnitKind)>();
        for (_entity, (id, body, kind)) in query.iter() {
            let UnitKind::Pac3Missile(missile) = kind else {
                continue;
            };
            if missile.is_manually_guided() {
                continue;
            }
            if let Some(target_pos) = world.position_of(missile.target) {
                commands.push((*id, pursuit_heading(&body.position, &target_pos)));
            }
        }
    }

    for (id, heading) in commands {
        let Some(entity) = world.entity(id) else {
            continue;
        };
        if let Ok(mut kind) = world.ecs_mut().get::<&mut UnitKind>(entity) {
            if let UnitKind::Pac3Missile(missile) = &mut *kind {
                // bearing_deg always yields [0, 360)
                if let Err(e) = missile.pursue(heading) {
                    log::warn!("pursuit command for {} rejected: {}", id, e);
                }
            }
        }
    }
}
