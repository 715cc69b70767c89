//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and end time,
//! - softening and gravitational constant (`eps2`, `G`)
//!
//! Softening and G are explicit per-simulation parameters rather than
//! global constants, so two simulations with different constants can
//! coexist in one process.

#[derive(Debug, Clone)]
#[allow(non_snake_case)]
pub struct Parameters {
    pub t_end: f64, // time end
    pub h0: f64, // step size
    pub eps2: f64, // softening epsilon^2
    pub G: f64, // gravitational constant
}

impl Default for Parameters {
    /// Design defaults: G = 1, epsilon = 0.1, dt = 0.001.
    fn default() -> Self {
        Self {
            t_end: 10.0,
            h0: 0.001,
            eps2: 0.01,
            G: 1.0,
        }
    }
}
