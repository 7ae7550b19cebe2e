//! Flight-time budget.

use super::speed_profile::SpeedProfile;

/// Expires a missile once its life time passes the guidance window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifetimeGuard {
    window_secs: f64,
}

impl LifetimeGuard {
    pub fn new(window_secs: f64) -> Self {
        Self { window_secs }
    }

    /// The window ends at the profile's first breakpoint after launch
    /// (end of motor burn).
    pub fn from_profile(profile: &SpeedProfile) -> Self {
        Self::new(profile.first_breakpoint())
    }

    pub fn window_secs(&self) -> f64 {
        self.window_secs
    }

    /// Strictly greater: a missile exactly at the window is still alive.
    pub fn expired(&self, life_time_secs: f64) -> bool {
        life_time_secs > self.window_secs
    }
}
