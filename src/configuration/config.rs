//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – driver options (trail recording, batch size)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`PresetConfig`]     – optional named initial configuration
//! - [`BodyConfig`]       – initial state for each body (when no preset)
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A scenario YAML matching these types, using a named preset:
//!
//! ```yaml
//! engine:
//!   record_trail: true
//!   steps_per_frame: 10
//!
//! parameters:
//!   t_end: 6.3259           # total simulation time
//!   h0: 0.001               # fixed step size
//!   eps2: 0.01              # softening epsilon^2
//!   G: 1.0                  # gravitational constant
//!
//! preset: figure8           # or: lagrange
//! ```
//!
//! or spelling out the bodies instead of a preset:
//!
//! ```yaml
//! bodies:
//!   - x: [ -0.5, 0.0 ]
//!     v: [  0.0, 1.0 ]
//!     m: 1.0
//!   - x: [  0.5, 0.0 ]
//!     v: [  0.0, -1.0 ]
//!     m: 1.0
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation (`Scenario`).

use serde::Deserialize;

/// Named initial configuration requested instead of explicit bodies
/// `preset: "figure8"` or `preset: "lagrange"`
#[derive(Deserialize, Debug, Clone)]
pub enum PresetConfig {
    #[serde(rename = "figure8")] // three-equal-mass figure-eight periodic orbit
    Figure8,

    #[serde(rename = "lagrange")] // three-equal-mass rotating equilateral triangle
    Lagrange,
}

/// Driver-level configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub record_trail: bool, // record every intermediate state for trail display
    pub steps_per_frame: usize, // integrator steps applied per external tick
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[allow(non_snake_case)]
pub struct ParametersConfig {
    pub t_end: f64, // time end
    pub h0: f64,    // time step size
    pub eps2: f64,  // softening - prevent singular forces at very small separations
    pub G: f64,     // gravitational constant
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position vector `x` in simulation units
    pub v: Vec<f64>, // Initial velocity vector `v` in simulation units per time unit
    pub m: f64,      // Mass of the body
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // Driver-level configuration
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    #[serde(default)]
    pub preset: Option<PresetConfig>, // Named initial configuration; wins over `bodies`
    #[serde(default)]
    pub bodies: Vec<BodyConfig>, // Explicit initial state when no preset is given
}
