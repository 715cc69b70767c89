use tbsim::simulation::states::{Body, System, NVec2};
use tbsim::simulation::params::Parameters;
use tbsim::simulation::forces::{NewtonianGravity, AccelSet};
use tbsim::simulation::integrator::rk4_step;
use tbsim::simulation::diagnostics::Snapshot;
use tbsim::simulation::driver::Driver;
use tbsim::simulation::scenario::{figure_eight, lagrange_triangle, Preset, Scenario, FIGURE_EIGHT_PERIOD};
use tbsim::simulation::engine::Engine;

/// Build a simple 2-body System separated along the x-axis
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> System {
    let b1 = Body {
        x: [-dist / 2.0, 0.0].into(),
        v: [0.0, 0.0].into(),
        m: m1,
    };
    let b2 = Body {
        x: [dist / 2.0, 0.0].into(),
        v: [0.0, 0.0].into(),
        m: m2,
    };
    System {
        bodies: vec![b1, b2],
        t: 0.0,
    }
}

/// Default physics parameters for tests: near-zero softening so the
/// dynamics are clean Kepler gravity unless a test opts in to softening
pub fn test_params() -> Parameters {
    Parameters {
        t_end: 1.0,
        h0: 0.001,
        eps2: 1e-6,
        G: 1.0,
    }
}

/// Build a gravity term + AccelSet
pub fn gravity_set(p: &Parameters) -> AccelSet {
    AccelSet::new().with(NewtonianGravity {
        G: p.G,
        eps2: p.eps2,
    })
}

/// Largest per-body position difference between two systems
fn max_separation(a: &System, b: &System) -> f64 {
    a.bodies
        .iter()
        .zip(&b.bodies)
        .map(|(ba, bb)| (ba.x - bb.x).norm())
        .fold(0.0, f64::max)
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let sys = two_body_system(1.0, 2.0, 3.0);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc = vec![Default::default(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    let a1: NVec2 = acc[0];
    let a2: NVec2 = acc[1];

    let net = a1 * sys.bodies[0].m + a2 * sys.bodies[1].m;

    assert!(net.norm() < 1e-10, "Net momentum not zero: {:?}", net);
}

#[test]
fn gravity_points_toward_other_body() {
    let sys = two_body_system(2.0, 1.0, 1.0);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc = vec![Default::default(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    let dx = sys.bodies[1].x - sys.bodies[0].x;
    let a1: NVec2 = acc[0];

    // Should point in same direction as +dx (attraction)
    assert!(dx.norm() > 0.0);
    assert!(a1.dot(&dx) > 0.0, "Acceleration is not toward second body");
}

#[test]
fn gravity_inverse_square_law() {
    let sys_r = two_body_system(1.0, 1.0, 1.0);
    let sys_2r = two_body_system(2.0, 1.0, 1.0);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc_r = vec![Default::default(); 2];
    let mut acc_2r = vec![Default::default(); 2];

    forces.accumulate_accels(sys_r.t, &sys_r, &mut acc_r);
    forces.accumulate_accels(sys_2r.t, &sys_2r, &mut acc_2r);

    let ratio = acc_r[0].norm() / acc_2r[0].norm();

    // 15% slack covers the residual softening contribution
    assert!((ratio - 4.0).abs() < 0.6, "Expected ~4x, got {}", ratio);
}

#[test]
fn gravity_softening_prevents_blowup() {
    let mut p = test_params();
    p.eps2 = 0.01;

    let sys = two_body_system(1e-9, 1.0, 1.0);
    let forces = gravity_set(&p);

    let mut acc = vec![Default::default(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    let a: NVec2 = acc[0];
    assert!(a.norm() < 1e9, "Softening failed; acceleration too large");
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn rk4_does_not_mutate_input() {
    let sys = figure_eight();
    let p = test_params();
    let forces = gravity_set(&p);

    let before = sys.clone();
    let next = rk4_step(&sys, &forces, &p);

    assert_eq!(sys.t, before.t);
    for (a, b) in sys.bodies.iter().zip(&before.bodies) {
        assert_eq!(a.x, b.x);
        assert_eq!(a.v, b.v);
    }
    assert!(next.t > sys.t);
}

#[test]
fn rk4_carries_mass_and_time() {
    let sys = two_body_system(1.0, 2.0, 3.0);
    let p = test_params();
    let forces = gravity_set(&p);

    let next = rk4_step(&sys, &forces, &p);

    assert_eq!(next.bodies.len(), 2);
    assert_eq!(next.bodies[0].m, 2.0);
    assert_eq!(next.bodies[1].m, 3.0);
    assert!((next.t - p.h0).abs() < 1e-15);
}

#[test]
fn rk4_energy_conservation_figure_eight() {
    let p = test_params();
    let forces = gravity_set(&p);
    let mut sys = figure_eight();

    let e0 = Snapshot::measure(&sys, &p).total;
    for _ in 0..10_000 {
        sys = rk4_step(&sys, &forces, &p);
    }
    let e1 = Snapshot::measure(&sys, &p).total;

    let drift = (e1 - e0).abs() / e0.abs();
    assert!(drift < 0.01, "Relative energy drift too large: {}", drift);
}

#[test]
fn rk4_momentum_conservation_figure_eight() {
    let p = test_params();
    let forces = gravity_set(&p);
    let mut sys = figure_eight();

    let p0 = Snapshot::measure(&sys, &p).momentum;
    for _ in 0..10_000 {
        sys = rk4_step(&sys, &forces, &p);
    }
    let p1 = Snapshot::measure(&sys, &p).momentum;

    let drift = (p1 - p0).norm();
    assert!(drift < 1e-10, "Momentum drift too large: {}", drift);
}

#[test]
fn rk4_center_of_mass_stationary() {
    let p = test_params();
    let forces = gravity_set(&p);
    let mut sys = figure_eight();

    let c0 = Snapshot::measure(&sys, &p).com;
    for _ in 0..5_000 {
        sys = rk4_step(&sys, &forces, &p);
    }
    let c1 = Snapshot::measure(&sys, &p).com;

    let drift = (c1 - c0).norm();
    assert!(drift < 1e-10, "Center of mass drifted: {}", drift);
}

#[test]
fn figure_eight_is_periodic() {
    let p = test_params();
    let forces = gravity_set(&p);
    let initial = figure_eight();

    // One full period at the default step size
    let steps = (FIGURE_EIGHT_PERIOD / p.h0).round() as usize;
    let mut sys = initial.clone();
    for _ in 0..steps {
        sys = rk4_step(&sys, &forces, &p);
    }

    let miss = max_separation(&initial, &sys);
    assert!(miss < 0.1, "Bodies did not return after one period: {}", miss);
}

#[test]
fn rk4_step_size_convergence() {
    // Same total simulated time at h0 = 0.01 vs 0.001
    let forces_params = test_params();
    let forces = gravity_set(&forces_params);

    let mut coarse_p = test_params();
    coarse_p.h0 = 0.01;
    let mut fine_p = test_params();
    fine_p.h0 = 0.001;

    let t_total = 2.0;

    let mut coarse = figure_eight();
    for _ in 0..(t_total / coarse_p.h0).round() as usize {
        coarse = rk4_step(&coarse, &forces, &coarse_p);
    }

    let mut fine = figure_eight();
    for _ in 0..(t_total / fine_p.h0).round() as usize {
        fine = rk4_step(&fine, &forces, &fine_p);
    }

    let diff = max_separation(&coarse, &fine);
    assert!(diff < 0.1, "Step sizes disagree too much: {}", diff);
}

#[test]
fn perturbed_lagrange_diverges() {
    let p = test_params();
    let forces = gravity_set(&p);

    let reference = lagrange_triangle();
    let mut perturbed = reference.clone();
    perturbed.bodies[0].x.x += 1e-4;

    let mut a = reference;
    let mut b = perturbed;
    for _ in 0..50_000 {
        a = rk4_step(&a, &forces, &p);
        b = rk4_step(&b, &forces, &p);
    }

    let sep = max_separation(&a, &b);
    assert!(
        sep > 0.1,
        "Perturbed Lagrange systems failed to diverge: {}",
        sep
    );
}

// ==================================================================================
// Diagnostics tests
// ==================================================================================

#[test]
fn snapshot_total_is_kinetic_plus_potential() {
    let p = test_params();
    let snap = Snapshot::measure(&figure_eight(), &p);

    assert!((snap.total - (snap.kinetic + snap.potential)).abs() < 1e-12);
    // Gravitationally bound system
    assert!(snap.total < 0.0, "Figure-eight should be bound: {}", snap.total);
}

#[test]
fn snapshot_two_body_values() {
    let mut p = test_params();
    p.eps2 = 0.0;
    p.G = 1.0;

    // Two unit masses at rest, 2.0 apart: K = 0, U = -1/2
    let sys = two_body_system(2.0, 1.0, 1.0);
    let snap = Snapshot::measure(&sys, &p);

    assert!(snap.kinetic.abs() < 1e-12);
    assert!((snap.potential + 0.5).abs() < 1e-12);
    assert!(snap.momentum.norm() < 1e-12);
    assert!(snap.com.norm() < 1e-12);
}

// ==================================================================================
// Preset tests
// ==================================================================================

#[test]
fn figure_eight_has_zero_net_momentum() {
    let p = test_params();
    let snap = Snapshot::measure(&Preset::FigureEight.system(), &p);

    assert!(snap.momentum.norm() < 1e-10, "Nonzero momentum: {:?}", snap.momentum);
}

#[test]
fn lagrange_triangle_is_equilateral() {
    let sys = Preset::Lagrange.system();
    assert_eq!(sys.bodies.len(), 3);

    let d01 = (sys.bodies[0].x - sys.bodies[1].x).norm();
    let d12 = (sys.bodies[1].x - sys.bodies[2].x).norm();
    let d20 = (sys.bodies[2].x - sys.bodies[0].x).norm();

    assert!((d01 - d12).abs() < 0.1, "{} vs {}", d01, d12);
    assert!((d12 - d20).abs() < 0.1, "{} vs {}", d12, d20);
    assert!((d20 - d01).abs() < 0.1, "{} vs {}", d20, d01);
}

#[test]
fn lagrange_triangle_has_zero_net_momentum() {
    let p = test_params();
    let snap = Snapshot::measure(&Preset::Lagrange.system(), &p);

    assert!(snap.momentum.norm() < 1e-10, "Nonzero momentum: {:?}", snap.momentum);
}

// ==================================================================================
// Driver tests
// ==================================================================================

fn test_scenario(record_trail: bool) -> Scenario {
    let parameters = test_params();
    let forces = gravity_set(&parameters);
    Scenario {
        engine: Engine {
            record_trail,
            steps_per_frame: 10,
        },
        parameters,
        system: figure_eight(),
        forces,
    }
}

#[test]
fn driver_advances_time() {
    let mut driver = Driver::new(test_scenario(false));

    driver.advance(100);

    let sys = driver.current_state();
    assert!((sys.t - 0.1).abs() < 1e-12, "Unexpected time: {}", sys.t);
    assert!(driver.trajectory().is_empty());
}

#[test]
fn driver_records_trajectory_when_enabled() {
    let mut driver = Driver::new(test_scenario(true));

    driver.advance(50);

    // Initial state plus one per step
    assert_eq!(driver.trajectory().len(), 51);
    let last = driver.trajectory().last().unwrap();
    assert_eq!(last.t, driver.current_state().t);
}

#[test]
fn driver_reset_discards_trajectory() {
    let mut driver = Driver::new(test_scenario(true));
    driver.advance(20);
    assert!(driver.trajectory().len() > 1);

    driver.reset(Preset::Lagrange.system());

    assert_eq!(driver.trajectory().len(), 1);
    assert_eq!(driver.current_state().t, 0.0);
    assert_eq!(driver.current_state().bodies.len(), 3);
}

#[test]
fn driver_snapshot_tracks_current_state() {
    let mut driver = Driver::new(test_scenario(false));

    let before = driver.snapshot();
    driver.advance(1_000);
    let after = driver.snapshot();

    // Energy conserved across the advance
    let drift = (after.total - before.total).abs() / before.total.abs();
    assert!(drift < 1e-6, "Energy drifted across driver.advance: {}", drift);
}
