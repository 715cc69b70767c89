//! State derivative for the equations of motion
//!
//! Maps a full `System` to its time-derivative: the position derivative is
//! the current velocity, the velocity derivative is the total acceleration
//! accumulated from the active force set.

use crate::simulation::forces::AccelSet;
use crate::simulation::states::{NVec2, System};

/// Time-derivative of a single body's state. Ephemeral, computed fresh for
/// every RK4 stage.
#[derive(Debug, Clone, Copy)]
pub struct Derivative {
    pub dx: NVec2, // d(position)/dt = velocity
    pub dv: NVec2, // d(velocity)/dt = acceleration
}

/// Compute the derivative of every body in `sys`.
///
/// Pure function: accelerations are accumulated into a fresh buffer on each
/// call, so no state leaks between RK4 stages.
pub fn system_derivative(sys: &System, forces: &AccelSet) -> Vec<Derivative> {
    let n = sys.bodies.len();
    let mut accels = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, sys, &mut accels);

    sys.bodies
        .iter()
        .zip(accels)
        .map(|(b, a)| Derivative { dx: b.v, dv: a })
        .collect()
}
