//! Invariant diagnostics for a system snapshot
//!
//! Computes the three conserved quantities of an isolated Newtonian N-body
//! system: total energy (kinetic + potential), total momentum, and center
//! of mass. Any drift beyond integration tolerance indicates an integrator
//! bug or a step size too large for the configuration, which makes these
//! the primary correctness oracle for the stepper.
//!
//! Diagnostics are derived read-only values; nothing here feeds back into
//! the integration loop.

use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, System};

/// Read-only summary of a `System` at one instant. Recomputed from a
/// system whenever needed, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub kinetic: f64, // sum of (1/2) m |v|^2
    pub potential: f64, // pairwise -G mi mj / r_soft
    pub total: f64, // kinetic + potential; negative for a bound system
    pub momentum: NVec2, // sum of m v
    pub com: NVec2, // mass-weighted mean position
}

impl Snapshot {
    /// Measure a system. The potential uses the same softened distance
    /// `sqrt(|r|^2 + eps2)` as the force law, so the energy being checked
    /// is the one the integrator actually conserves.
    pub fn measure(sys: &System, params: &Parameters) -> Self {
        let mut kinetic = 0.0;
        let mut momentum = NVec2::zeros();
        let mut weighted_x = NVec2::zeros();
        let mut mass = 0.0;

        for b in &sys.bodies {
            kinetic += 0.5 * b.m * b.v.dot(&b.v);
            momentum += b.m * b.v;
            weighted_x += b.m * b.x;
            mass += b.m;
        }

        // Potential over unique unordered pairs (i, j), i < j
        let mut potential = 0.0;
        let n = sys.bodies.len();
        for i in 0..n {
            let bi = &sys.bodies[i];
            for j in (i + 1)..n {
                let bj = &sys.bodies[j];
                let r = bj.x - bi.x;
                let d = (r.dot(&r) + params.eps2).sqrt();
                potential -= params.G * bi.m * bj.m / d;
            }
        }

        Self {
            kinetic,
            potential,
            total: kinetic + potential,
            momentum,
            com: weighted_x / mass,
        }
    }
}
