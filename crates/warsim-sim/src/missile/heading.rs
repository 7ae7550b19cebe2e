//! Turn-rate-limited heading convergence.

use warsim_core::angles::{is_valid_heading, normalize_heading, signed_heading_diff};
use warsim_core::errors::SimError;

/// Holds the commanded heading and the turn-rate limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingController {
    commanded: f64,
    max_turn_rate_deg_s: f64,
}

impl HeadingController {
    /// `initial` is not validated beyond normalization; it is the launch
    /// heading, not an external command.
    pub fn new(initial: f64, max_turn_rate_deg_s: f64) -> Self {
        Self {
            commanded: normalize_heading(initial),
            max_turn_rate_deg_s,
        }
    }

    /// Record a new setpoint. The current heading is not touched.
    pub fn set_commanded(&mut self, heading: f64) -> Result<(), SimError> {
        if !is_valid_heading(heading) {
            return Err(SimError::InvalidHeading(heading));
        }
        self.commanded = heading;
        Ok(())
    }

    pub fn commanded(&self) -> f64 {
        self.commanded
    }

    /// Next heading from `current` after `dt_secs` of turning.
    pub fn steer(&self, current: f64, dt_secs: f64) -> f64 {
        advance(current, self.commanded, self.max_turn_rate_deg_s, dt_secs)
    }
}

/// Rotate `current` toward `commanded` along the shortest path by at most
/// `max_turn_rate_deg_s * dt_secs` degrees. Snaps to `commanded` when it is
/// within reach, so the result never overshoots.
pub fn advance(current: f64, commanded: f64, max_turn_rate_deg_s: f64, dt_secs: f64) -> f64 {
    let delta = signed_heading_diff(current, commanded);
    let max_step = max_turn_rate_deg_s * dt_secs;
    if delta.abs() <= max_step {
        commanded
    } else {
        normalize_heading(current + delta.signum() * max_step)
    }
}
