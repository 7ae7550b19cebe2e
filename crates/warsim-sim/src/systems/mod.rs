//! Systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `SimWorld`. They do not own state;
//! all state lives in unit components.

pub mod pursuit;
pub mod snapshot;
