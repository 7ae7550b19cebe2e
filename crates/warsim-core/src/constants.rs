//! Simulation constants and tuning parameters.

/// Default tick duration in seconds.
pub const DEFAULT_TICK_SECS: f64 = 1.0;

/// Default RNG seed for scenario setup.
pub const DEFAULT_SEED: u64 = 42;

/// Knots to metres per second.
pub const KNOTS_TO_MPS: f64 = 1852.0 / 3600.0;

/// Metres per kilometre.
pub const METERS_PER_KM: f64 = 1000.0;

// --- PAC-3 interceptor ---

/// Maximum turn rate (degrees per second).
pub const PAC3_MAX_TURN_RATE_DEG_S: f64 = 10.0;

/// Speed profile control times (seconds since launch).
pub const PAC3_PROFILE_TIMES: [f64; 8] = [0.0, 20.0, 36.0, 96.0, 156.0, 216.0, 276.0, 336.0];

/// Speed profile control speeds (knots). Peak was 2650 in early trials.
pub const PAC3_PROFILE_SPEEDS_KTS: [f64; 8] =
    [150.0, 2300.0, 2300.0, 1238.0, 724.0, 510.0, 383.0, 350.0];

/// Distance below which the missile destroys its target (km).
pub const INTERCEPT_RADIUS_KM: f64 = 1.0;

/// Distance below which the missile destroys the friendly unit of the pair (km).
pub const FRATRICIDE_RADIUS_KM: f64 = 1.5;

// --- Two-party scenario ---

/// First unit id of the two-party pair.
pub const TWO_PARTY_FIRST_ID: u32 = 1;

/// Second unit id of the two-party pair.
pub const TWO_PARTY_SECOND_ID: u32 = 2;

// --- Scenario setup ---

/// Cruise speed of fighters spawned by the two-ship setup (knots).
pub const FIGHTER_CRUISE_SPEED_KTS: f64 = 450.0;

/// Lateral spacing between the two wingmen (metres).
pub const WINGMAN_SPACING_M: f64 = 3_000.0;

/// Maximum random offset applied to spawn positions (metres).
pub const SPAWN_JITTER_M: f64 = 500.0;

/// Cruise altitude of fighters (metres).
pub const FIGHTER_ALTITUDE_M: f64 = 6_000.0;

/// Cruise speed of hostile bombers (knots).
pub const HOSTILE_SPEED_KTS: f64 = 400.0;

/// Default spawn range of hostile waves (km).
pub const HOSTILE_SPAWN_RANGE_KM: f64 = 60.0;
