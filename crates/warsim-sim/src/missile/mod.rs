//! PAC-3 interceptor behavior.
//!
//! Each tick the missile runs, in order and stopping at the first terminal
//! result: proximity kill check, flight-time expiry, heading convergence,
//! speed from the profile, and finally base motion integration.

pub mod heading;
pub mod lifetime;
pub mod proximity;
pub mod speed_profile;

use std::sync::Arc;

use warsim_core::config::{FratricideConfig, MissileConfig};
use warsim_core::errors::SimError;
use warsim_core::events::Event;
use warsim_core::types::UnitId;

use crate::entity::Body;
use crate::world::SimWorld;

use self::heading::HeadingController;
use self::lifetime::LifetimeGuard;
use self::proximity::{Outcome, ProximityDetector};
use self::speed_profile::SpeedProfile;

/// Interceptor state. Stored in the registry as `UnitKind::Pac3Missile`.
#[derive(Debug, Clone)]
pub struct Pac3Missile {
    /// Unit being homed on.
    pub target: UnitId,
    /// Unit that launched this missile.
    pub source: UnitId,
    /// Simulation time at launch (seconds).
    pub firing_time: f64,
    guidance: HeadingController,
    proximity: ProximityDetector,
    lifetime: LifetimeGuard,
    profile: Arc<SpeedProfile>,
    /// Set once an external heading command arrives; pursuit guidance
    /// leaves the setpoint alone from then on.
    manual_heading: bool,
}

impl Pac3Missile {
    pub fn new(
        target: UnitId,
        source: UnitId,
        firing_time: f64,
        heading: f64,
        profile: Arc<SpeedProfile>,
        missile: &MissileConfig,
        fratricide: FratricideConfig,
    ) -> Self {
        Self {
            target,
            source,
            firing_time,
            guidance: HeadingController::new(heading, missile.max_turn_rate_deg_s),
            proximity: ProximityDetector::new(missile.intercept_radius_km, fratricide),
            lifetime: LifetimeGuard::from_profile(&profile),
            profile,
            manual_heading: false,
        }
    }

    /// Speed at launch.
    pub fn launch_speed(&self) -> f64 {
        self.profile.speed_at(0.0)
    }

    pub fn commanded_heading(&self) -> f64 {
        self.guidance.commanded()
    }

    /// Set the heading the missile turns toward and take it off pursuit
    /// guidance. Fails for headings outside `[0, 360)`.
    pub fn set_commanded_heading(&mut self, heading: f64) -> Result<(), SimError> {
        self.guidance.set_commanded(heading)?;
        self.manual_heading = true;
        Ok(())
    }

    /// Whether an external command owns the setpoint.
    pub fn is_manually_guided(&self) -> bool {
        self.manual_heading
    }

    /// Pursuit setpoint update. Ignored once the missile is manually guided.
    pub(crate) fn pursue(&mut self, heading: f64) -> Result<(), SimError> {
        if self.manual_heading {
            return Ok(());
        }
        self.guidance.set_commanded(heading)
    }

    pub fn life_time(&self, clock: f64) -> f64 {
        clock - self.firing_time
    }

    /// Run one tick for missile `id` with kinematic state `body`.
    pub fn update(
        &mut self,
        id: UnitId,
        body: &mut Body,
        dt_secs: f64,
        world: &mut SimWorld,
    ) -> Vec<Event> {
        let outcome = self
            .proximity
            .check(id, &body.position, self.target, self.source, world);
        match outcome {
            Outcome::TargetKilled(victim) | Outcome::FratricideKilled(victim) => {
                world.remove_unit(id);
                world.remove_unit(victim);
                log::info!(
                    "missile {} from {} destroyed {} ({:?})",
                    id,
                    self.source,
                    victim,
                    outcome.termination()
                );
                return vec![Event::UnitDestroyed {
                    aggressor: id,
                    source: self.source,
                    victim,
                }];
            }
            Outcome::None => {}
        }

        let life_time = self.life_time(world.clock());
        if self.lifetime.expired(life_time) {
            world.remove_unit(id);
            log::debug!("missile {} expired after {:.1}s", id, life_time);
            return Vec::new();
        }

        if body.heading != self.guidance.commanded() {
            body.heading = self.guidance.steer(body.heading, dt_secs);
        }

        body.speed = self.profile.speed_at(life_time);

        body.integrate(dt_secs)
    }
}
