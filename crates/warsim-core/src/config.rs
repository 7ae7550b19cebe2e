//! Scenario configuration.
//!
//! Everything a scenario can tune is supplied here at engine construction.
//! There is no global state: the fratricide toggle and the two-party id
//! mapping travel with the config into every missile that is launched.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::errors::ConfigError;
use crate::types::UnitId;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// RNG seed for scenario setup. Same seed = same simulation.
    pub seed: u64,
    /// Duration of one tick in seconds.
    pub tick_secs: f64,
    pub fratricide: FratricideConfig,
    pub missile: MissileConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            tick_secs: DEFAULT_TICK_SECS,
            fratricide: FratricideConfig::default(),
            missile: MissileConfig::default(),
        }
    }
}

impl ScenarioConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ScenarioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check numeric fields. The speed profile itself is validated when
    /// it is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_secs.is_finite() && self.tick_secs > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "tick_secs must be positive, got {}",
                self.tick_secs
            )));
        }
        if !(self.missile.max_turn_rate_deg_s.is_finite() && self.missile.max_turn_rate_deg_s > 0.0)
        {
            return Err(ConfigError::Invalid(format!(
                "max_turn_rate_deg_s must be positive, got {}",
                self.missile.max_turn_rate_deg_s
            )));
        }
        if !(self.missile.intercept_radius_km.is_finite() && self.missile.intercept_radius_km > 0.0)
        {
            return Err(ConfigError::Invalid(format!(
                "intercept_radius_km must be positive, got {}",
                self.missile.intercept_radius_km
            )));
        }
        if !(self.fratricide.radius_km.is_finite() && self.fratricide.radius_km > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "fratricide radius_km must be positive, got {}",
                self.fratricide.radius_km
            )));
        }
        if self.fratricide.pair.first == self.fratricide.pair.second {
            return Err(ConfigError::Invalid(
                "two-party pair needs two distinct ids".to_string(),
            ));
        }
        Ok(())
    }
}

/// Fratricide check settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FratricideConfig {
    /// When false the fratricide check never runs.
    pub enabled: bool,
    pub pair: TwoPartyMapping,
    /// Lethal radius against the friendly unit (km).
    pub radius_km: f64,
}

impl Default for FratricideConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pair: TwoPartyMapping::default(),
            radius_km: FRATRICIDE_RADIUS_KM,
        }
    }
}

/// Fixed mapping between exactly two unit ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoPartyMapping {
    pub first: UnitId,
    pub second: UnitId,
}

impl Default for TwoPartyMapping {
    fn default() -> Self {
        Self {
            first: UnitId(TWO_PARTY_FIRST_ID),
            second: UnitId(TWO_PARTY_SECOND_ID),
        }
    }
}

impl TwoPartyMapping {
    /// The friendly unit of a missile launched by `source`: `first` when
    /// `source` is `second`, otherwise `second`.
    pub fn other(&self, source: UnitId) -> UnitId {
        if source == self.second {
            self.first
        } else {
            self.second
        }
    }
}

/// Interceptor performance parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissileConfig {
    /// Maximum turn rate (degrees per second).
    pub max_turn_rate_deg_s: f64,
    /// Lethal radius against the designated target (km).
    pub intercept_radius_km: f64,
    /// Speed vs. time-since-launch control points.
    pub speed_profile: Vec<ProfilePoint>,
    /// Command every missile toward its target's bearing each tick.
    pub pursuit_guidance: bool,
}

impl Default for MissileConfig {
    fn default() -> Self {
        Self {
            max_turn_rate_deg_s: PAC3_MAX_TURN_RATE_DEG_S,
            intercept_radius_km: INTERCEPT_RADIUS_KM,
            speed_profile: pac3_speed_profile(),
            pursuit_guidance: true,
        }
    }
}

/// One speed profile control point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    pub time_secs: f64,
    pub speed_kts: f64,
}

/// PAC-3 speed profile control points.
pub fn pac3_speed_profile() -> Vec<ProfilePoint> {
    PAC3_PROFILE_TIMES
        .iter()
        .zip(PAC3_PROFILE_SPEEDS_KTS.iter())
        .map(|(&time_secs, &speed_kts)| ProfilePoint {
            time_secs,
            speed_kts,
        })
        .collect()
}
