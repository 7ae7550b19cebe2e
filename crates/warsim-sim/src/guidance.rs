//! Guidance laws that produce commanded headings for interceptors.
//!
//! These stand in for external fire-control logic: they only ever call
//! `set_commanded_heading`, never touch the current heading.

use warsim_core::angles::bearing_deg;
use warsim_core::types::Position;

/// Pure pursuit: point straight at the target's current position.
/// Result is in `[0, 360)`.
pub fn pursuit_heading(missile: &Position, target: &Position) -> f64 {
    bearing_deg(missile, target)
}
