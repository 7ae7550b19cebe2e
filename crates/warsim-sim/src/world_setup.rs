//! Unit spawn factories for setting up scenarios.
//!
//! The two-ship setup must run on an empty world so that the wingmen
//! receive ids 1 and 2, matching the default two-party mapping.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use warsim_core::angles::bearing_deg;
use warsim_core::constants::*;
use warsim_core::enums::Side;
use warsim_core::types::{Position, UnitId};

use crate::entity::{Body, UnitKind};
use crate::world::SimWorld;

/// Spawn a blue two-ship flight near the origin heading north.
/// Returns `[lead, wingman]`.
pub fn spawn_two_ship(world: &mut SimWorld, rng: &mut ChaCha8Rng) -> [UnitId; 2] {
    let lead = spawn_fighter(world, rng, "Viper 1", -WINGMAN_SPACING_M / 2.0);
    let wingman = spawn_fighter(world, rng, "Viper 2", WINGMAN_SPACING_M / 2.0);
    [lead, wingman]
}

fn spawn_fighter(world: &mut SimWorld, rng: &mut ChaCha8Rng, name: &str, x: f64) -> UnitId {
    let position = Position::new(
        x + rng.gen_range(-SPAWN_JITTER_M..SPAWN_JITTER_M),
        rng.gen_range(-SPAWN_JITTER_M..SPAWN_JITTER_M),
        FIGHTER_ALTITUDE_M,
    );
    world.spawn(
        name,
        Side::Blue,
        Body::new(position, 0.0, FIGHTER_CRUISE_SPEED_KTS),
        UnitKind::Aircraft,
    )
}

/// Spawn `count` red bombers at random bearings, `range_km` from the
/// origin, each heading toward the origin.
pub fn spawn_hostile_wave(
    world: &mut SimWorld,
    rng: &mut ChaCha8Rng,
    count: usize,
    range_km: f64,
) -> Vec<UnitId> {
    let origin = Position::new(0.0, 0.0, 0.0);
    (0..count)
        .map(|i| {
            let bearing = rng.gen_range(0.0..360.0);
            let altitude = rng.gen_range(3_000.0..9_000.0);
            let mut position = origin.offset(bearing, range_km * METERS_PER_KM);
            position.z = altitude;
            let heading = bearing_deg(&position, &origin);
            world.spawn(
                &format!("Bandit {}", i + 1),
                Side::Red,
                Body::new(position, heading, HOSTILE_SPEED_KTS),
                UnitKind::Aircraft,
            )
        })
        .collect()
}
