//! Core types and definitions for the WARSIM tactical simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! unit ids, positions, headings, events, snapshots, scenario
//! configuration, errors, and constants. It has no runtime dependencies
//! beyond serialization.

pub mod angles;
pub mod config;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
