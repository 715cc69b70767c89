//! Core state types for the N-body simulation.
//!
//! Defines the body/system structs:
//! - `Body` is a point mass with 2D position and velocity
//! - `System` is the full state of all bodies at one instant
//!
//! Bodies carry no identity beyond their array index. Momentum and energy
//! calculations pair bodies by index, so body order must be preserved for
//! the whole simulation run.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
}

/// Complete simulation state at time `t`.
///
/// A `System` is a plain value: the integrator consumes one and produces a
/// new one, never updating in place. Intermediate RK4 stage states are
/// therefore independent values with no aliasing between them.
#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection of bodies
    pub t: f64, // time
}

impl System {
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }
}
