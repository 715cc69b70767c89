pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::derivative::{Derivative, system_derivative};
pub use simulation::integrator::rk4_step;
pub use simulation::diagnostics::Snapshot;
pub use simulation::driver::Driver;
pub use simulation::scenario::{Scenario, Preset, figure_eight, lagrange_triangle, FIGURE_EIGHT_PERIOD};

pub use configuration::config::{EngineConfig, ParametersConfig, PresetConfig, BodyConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_gravity, bench_rk4};
