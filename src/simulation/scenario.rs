//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! Also defines the two built-in three-body presets: the figure-eight
//! periodic orbit and the Lagrange equilateral triangle.

use crate::configuration::config::{BodyConfig, PresetConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Orbital period of the figure-eight solution in simulation time units.
/// External callers and tests assume this exact figure.
pub const FIGURE_EIGHT_PERIOD: f64 = 6.3259;

/// Named initial configurations with known analytic properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Chenciner-Montgomery figure-eight: three equal masses chasing each
    /// other along a shared figure-eight path. Zero net momentum, period
    /// [`FIGURE_EIGHT_PERIOD`].
    FigureEight,
    /// Lagrange equilateral triangle: three equal masses at the vertices of
    /// an equilateral triangle, each moving tangentially so the triangle
    /// rotates uniformly. Unstable for equal masses, so small perturbations
    /// grow; useful as a chaos reference.
    Lagrange,
}

impl Preset {
    /// Initial system for this preset, bodies at t = 0.
    pub fn system(&self) -> System {
        match self {
            Preset::FigureEight => figure_eight(),
            Preset::Lagrange => lagrange_triangle(),
        }
    }
}

/// Figure-eight initial conditions (Simo / Moore / Montgomery values).
/// Bodies 1 and 2 start mirrored through the origin with equal velocities;
/// body 3 starts at the origin with twice the opposite velocity, so net
/// momentum is exactly zero.
pub fn figure_eight() -> System {
    let x1 = NVec2::new(0.97000436, -0.24308753);
    let v3 = NVec2::new(-0.93240737, -0.86473146);
    let v1 = -0.5 * v3;

    let bodies = vec![
        Body { x: x1, v: v1, m: 1.0 },
        Body { x: -x1, v: v1, m: 1.0 },
        Body { x: NVec2::zeros(), v: v3, m: 1.0 },
    ];

    System { bodies, t: 0.0 }
}

/// Lagrange triangle initial conditions: unit circumradius, equal unit
/// masses, G = 1. The tangential speed for uniform rotation solves
/// m v^2 / R = sqrt(3) G m^2 / s^2 with side s = sqrt(3) R, giving
/// v = 3^(-1/4).
pub fn lagrange_triangle() -> System {
    let v = 3.0_f64.powf(-0.25);
    // Vertices at 90, 210, 330 degrees on the unit circle
    let angles = [
        std::f64::consts::FRAC_PI_2,
        std::f64::consts::FRAC_PI_2 + 2.0 * std::f64::consts::FRAC_PI_3,
        std::f64::consts::FRAC_PI_2 + 4.0 * std::f64::consts::FRAC_PI_3,
    ];

    let bodies = angles
        .iter()
        .map(|&a| Body {
            x: NVec2::new(a.cos(), a.sin()),
            // tangent direction for counterclockwise rotation
            v: v * NVec2::new(-a.sin(), a.cos()),
            m: 1.0,
        })
        .collect();

    System { bodies, t: 0.0 }
}

/// Fully-initialized runtime scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, parameters, current system state, and
/// the set of active force laws (accelerations). The driver consumes it to
/// run the simulation; the (out-of-scope) rendering layer reads states back.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            eps2: p_cfg.eps2,
            G: p_cfg.G,
        };

        // Initial system: a named preset wins over an explicit body list
        let system = match cfg.preset {
            Some(PresetConfig::Figure8) => Preset::FigureEight.system(),
            Some(PresetConfig::Lagrange) => Preset::Lagrange.system(),
            None => {
                // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
                let bodies: Vec<Body> = cfg
                    .bodies
                    .iter()
                    .map(|bc: &BodyConfig| Body {
                        x: NVec2::new(bc.x[0], bc.x[1]),
                        v: NVec2::new(bc.v[0], bc.v[1]),
                        m: bc.m,
                    })
                    .collect();
                System { bodies, t: 0.0 }
            }
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            record_trail: e_cfg.record_trail,
            steps_per_frame: e_cfg.steps_per_frame,
        };

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            eps2: parameters.eps2,
        });

        Self {
            engine,
            parameters,
            system,
            forces,
        }
    }
}
