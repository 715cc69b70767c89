//! Fixed-step time integrator for the N-body system
//!
//! Classical 4th-order Runge-Kutta with step size `params.h0`, driven by
//! `AccelSet` and `Parameters`. The stepper is a pure transform: it takes
//! a `System` by reference and returns the advanced `System` as a new
//! value, leaving its input untouched.

use super::derivative::{system_derivative, Derivative};
use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{Body, System};

/// Build the stage state `sys + k * scale`: every body's position advances
/// by its velocity-derivative and its velocity by its acceleration, masses
/// carried through unchanged.
fn offset(sys: &System, k: &[Derivative], scale: f64) -> System {
    let bodies = sys
        .bodies
        .iter()
        .zip(k)
        .map(|(b, d)| Body {
            x: b.x + scale * d.dx,
            v: b.v + scale * d.dv,
            m: b.m,
        })
        .collect();

    System {
        bodies,
        t: sys.t + scale,
    }
}

/// Advance the system by one step of size `params.h0` using classical RK4.
///
/// Four derivative evaluations per step give O(dt^5) local truncation
/// error, which keeps long-run energy drift acceptable at fixed step sizes
/// practical for animation (design default dt = 0.001) without adaptive
/// step control.
///
/// All arithmetic is plain f64: degenerate input (zero masses, overlapping
/// bodies without softening) propagates as NaN/Inf rather than being
/// rejected, and bodies escaping to infinity are a valid outcome.
pub fn rk4_step(sys: &System, forces: &AccelSet, params: &Parameters) -> System {
    let dt = params.h0; // time step dt

    // k1 = f(y_n)
    let k1 = system_derivative(sys, forces);
    // k2 = f(y_n + k1 * dt/2)
    let k2 = system_derivative(&offset(sys, &k1, 0.5 * dt), forces);
    // k3 = f(y_n + k2 * dt/2)
    let k3 = system_derivative(&offset(sys, &k2, 0.5 * dt), forces);
    // k4 = f(y_n + k3 * dt)
    let k4 = system_derivative(&offset(sys, &k3, dt), forces);

    // y_n+1 = y_n + (k1 + 2 k2 + 2 k3 + k4) * dt/6
    let sixth = dt / 6.0;
    let bodies = sys
        .bodies
        .iter()
        .enumerate()
        .map(|(i, b)| Body {
            x: b.x + sixth * (k1[i].dx + 2.0 * k2[i].dx + 2.0 * k3[i].dx + k4[i].dx),
            v: b.v + sixth * (k1[i].dv + 2.0 * k2[i].dv + 2.0 * k3[i].dv + k4[i].dv),
            m: b.m,
        })
        .collect();

    System {
        bodies,
        t: sys.t + dt,
    }
}
