//! Simulation engine for WARSIM.
//!
//! Owns the unit registry (a hecs ECS world keyed by `UnitId`), ticks
//! units at a fixed step, and implements the PAC-3 interceptor behavior.

pub mod engine;
pub mod entity;
pub mod guidance;
pub mod missile;
pub mod systems;
pub mod world;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use warsim_core as core;
