//! Timing harness for the force evaluation and the RK4 stepper.
//!
//! Deterministic body placement, no rand needed; results go to stdout.

use std::time::Instant;

use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
use crate::simulation::integrator::rk4_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Build a deterministic N-body system spread over a disc.
fn synthetic_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new((i_f * 0.37).sin() * 5.0, (i_f * 0.13).cos() * 5.0);

        bodies.push(Body {
            x,
            v: NVec2::zeros(),
            m: 1.0,
        });
    }

    System { bodies, t: 0.0 }
}

/// Time a single direct pairwise gravity evaluation at increasing N to see
/// the O(N^2) cost curve.
pub fn bench_gravity() {
    let ns = [3, 10, 50, 200, 800, 3200];

    let params = Parameters::default();
    let gravity = NewtonianGravity {
        G: params.G,
        eps2: params.eps2,
    };

    for n in ns {
        let sys = synthetic_system(n);
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        gravity.acceleration(0.0, &sys, &mut out);

        let t0 = Instant::now();
        gravity.acceleration(0.0, &sys, &mut out);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, gravity eval = {dt:10.8} s");
    }
}

/// Time full RK4 steps (four force evaluations each) on a three-body
/// system, reporting steps per second.
pub fn bench_rk4() {
    let steps = 100_000;
    let params = Parameters::default();
    let forces = AccelSet::new().with(NewtonianGravity {
        G: params.G,
        eps2: params.eps2,
    });

    let mut sys = synthetic_system(3);

    let t0 = Instant::now();
    for _ in 0..steps {
        sys = rk4_step(&sys, &forces, &params);
    }
    let elapsed = t0.elapsed().as_secs_f64();

    println!(
        "rk4: {steps} steps in {elapsed:8.4} s ({:10.0} steps/s), t = {:.3}",
        steps as f64 / elapsed,
        sys.t
    );
}
