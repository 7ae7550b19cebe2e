//! Error types shared by the simulation crates.

use thiserror::Error;

use crate::types::UnitId;

/// Errors surfaced to callers of the simulation API.
#[derive(Debug, Error)]
pub enum SimError {
    /// A heading outside `[0, 360)` was commanded.
    #[error("heading must be in [0, 360), got {0}")]
    InvalidHeading(f64),
    /// The referenced unit is not in the registry.
    #[error("unit {0} does not exist")]
    UnknownUnit(UnitId),
    #[error("invalid speed profile: {0}")]
    Profile(#[from] ProfileError),
    #[error("invalid scenario config: {0}")]
    Config(#[from] ConfigError),
}

/// Speed profile construction failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("need at least 3 control points, got {0}")]
    TooFewPoints(usize),
    #[error("control times must be strictly increasing (index {0})")]
    NotIncreasing(usize),
    #[error("non-finite control point at index {0}")]
    NonFinite(usize),
}

/// Scenario configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0}")]
    Invalid(String),
}
