//! Simulation engine.
//!
//! `SimulationEngine` owns the unit registry and clock, applies guidance,
//! ticks every live unit once per tick, and produces `WorldSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use warsim_core::angles::bearing_deg;
use warsim_core::config::ScenarioConfig;
use warsim_core::constants::HOSTILE_SPAWN_RANGE_KM;
use warsim_core::enums::Side;
use warsim_core::errors::SimError;
use warsim_core::events::Event;
use warsim_core::state::WorldSnapshot;
use warsim_core::types::{Position, SimTime, UnitId};

use crate::entity::{Body, SimulatedEntity, UnitKind};
use crate::missile::speed_profile::SpeedProfile;
use crate::missile::Pac3Missile;
use crate::systems;
use crate::world::SimWorld;
use crate::world_setup;

/// The simulation engine. Owns the world and all sim state.
pub struct SimulationEngine {
    world: SimWorld,
    config: ScenarioConfig,
    profile: Arc<SpeedProfile>,
    rng: ChaCha8Rng,
}

impl SimulationEngine {
    /// Validate `config` and build the shared speed profile.
    pub fn new(config: ScenarioConfig) -> Result<Self, SimError> {
        config.validate()?;
        let profile = Arc::new(SpeedProfile::new(&config.missile.speed_profile)?);
        log::info!(
            "engine seed {} tick {}s fratricide {}",
            config.seed,
            config.tick_secs,
            config.fratricide.enabled
        );
        Ok(Self {
            world: SimWorld::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            profile,
        })
    }

    /// Get a read-only reference to the world.
    pub fn world(&self) -> &SimWorld {
        &self.world
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.world.time()
    }

    /// Set up the two-ship scenario: wingmen 1 and 2 plus `hostiles`
    /// bombers inbound from random bearings. Call on an empty engine.
    pub fn setup_two_ship(&mut self, hostiles: usize) -> Vec<UnitId> {
        let mut ids = world_setup::spawn_two_ship(&mut self.world, &mut self.rng).to_vec();
        ids.extend(world_setup::spawn_hostile_wave(
            &mut self.world,
            &mut self.rng,
            hostiles,
            HOSTILE_SPAWN_RANGE_KM,
        ));
        ids
    }

    pub fn spawn_aircraft(
        &mut self,
        name: &str,
        side: Side,
        position: Position,
        heading: f64,
        speed: f64,
    ) -> UnitId {
        self.world.spawn(
            name,
            side,
            Body::new(position, heading, speed),
            UnitKind::Aircraft,
        )
    }

    /// Launch a missile from `source` at `target`. The missile starts at the
    /// launcher's position, pointed at the target, at profile speed for t=0.
    pub fn launch_missile(&mut self, source: UnitId, target: UnitId) -> Result<UnitId, SimError> {
        let launcher = self
            .world
            .get_unit(source)
            .ok_or(SimError::UnknownUnit(source))?;
        let target_pos = self
            .world
            .position_of(target)
            .ok_or(SimError::UnknownUnit(target))?;

        let heading = bearing_deg(&launcher.body.position, &target_pos);
        let missile = Pac3Missile::new(
            target,
            source,
            self.world.clock(),
            heading,
            Arc::clone(&self.profile),
            &self.config.missile,
            self.config.fratricide,
        );
        let body = Body::new(launcher.body.position, heading, missile.launch_speed());
        let name = format!("PAC-3 ({})", launcher.name.0);
        let id = self.world.spawn(
            &name,
            launcher.side,
            body,
            UnitKind::Pac3Missile(missile),
        );
        log::debug!("{} launched {} at {}", source, id, target);
        Ok(id)
    }

    /// Command a unit's heading. Missiles turn toward it under their rate
    /// limit and are released from pursuit guidance; aircraft take it
    /// immediately.
    pub fn set_commanded_heading(&mut self, id: UnitId, heading: f64) -> Result<(), SimError> {
        let mut unit = self.world.get_unit(id).ok_or(SimError::UnknownUnit(id))?;
        if let Err(e) = unit.command_heading(heading) {
            log::warn!("heading command for {} rejected: {}", id, e);
            return Err(e);
        }
        self.world.commit(unit);
        Ok(())
    }

    /// Remove a unit from the registry. Idempotent.
    pub fn remove_unit(&mut self, id: UnitId) -> bool {
        self.world.remove_unit(id)
    }

    /// Advance the simulation by one tick and return the events it produced.
    ///
    /// Ids are snapshotted up front; a unit removed earlier in the tick is
    /// skipped.
    pub fn tick(&mut self) -> Vec<Event> {
        let dt = self.config.tick_secs;

        if self.config.missile.pursuit_guidance {
            systems::pursuit::run(&mut self.world);
        }

        let mut events = Vec::new();
        for id in self.world.unit_ids() {
            let Some(mut unit) = self.world.get_unit(id) else {
                continue;
            };
            events.extend(unit.update(dt, &mut self.world));
            self.world.commit(unit);
        }

        self.world.advance_clock(dt);
        events
    }

    /// Run `ticks` ticks and return all events in order.
    pub fn run(&mut self, ticks: u64) -> Vec<Event> {
        let mut events = Vec::new();
        for _ in 0..ticks {
            events.extend(self.tick());
        }
        events
    }

    /// Snapshot of all live units.
    pub fn snapshot(&self) -> WorldSnapshot {
        systems::snapshot::build_snapshot(&self.world)
    }
}
