//! Simulation driver: owns the current system and the recorded trajectory
//!
//! The driver is the single entry point an external animation loop calls:
//! one `advance()` per tick, `current_state()` to read back for display.
//! Everything is synchronous and single-threaded; the system produced by
//! one step is the sole input to the next, so nothing is shared and nothing
//! needs locking. Cancellation is simply "stop calling advance()".

use crate::simulation::diagnostics::Snapshot;
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator::rk4_step;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::System;

pub struct Driver {
    pub parameters: Parameters,
    pub forces: AccelSet,
    pub record_trail: bool,
    system: System,
    trajectory: Vec<System>,
}

impl Driver {
    /// Consume a built scenario and stand up a driver at its initial state.
    pub fn new(scenario: Scenario) -> Self {
        let mut driver = Self {
            parameters: scenario.parameters,
            forces: scenario.forces,
            record_trail: scenario.engine.record_trail,
            system: System { bodies: Vec::new(), t: 0.0 },
            trajectory: Vec::new(),
        };
        driver.reset(scenario.system);
        driver
    }

    /// Install a new initial system, discarding the current trajectory.
    /// Use `Preset::system()` to reset to one of the built-in presets.
    pub fn reset(&mut self, system: System) {
        self.trajectory.clear();
        if self.record_trail {
            self.trajectory.push(system.clone());
        }
        self.system = system;
    }

    /// Apply the RK4 stepper `n_steps` times, replacing the current system
    /// with the result each time. Intermediate systems are recorded when
    /// trail recording is enabled.
    pub fn advance(&mut self, n_steps: usize) {
        for _ in 0..n_steps {
            let next = rk4_step(&self.system, &self.forces, &self.parameters);
            if self.record_trail {
                self.trajectory.push(next.clone());
            }
            self.system = next;
        }
    }

    /// Latest system state, for the rendering layer to consume.
    pub fn current_state(&self) -> &System {
        &self.system
    }

    /// Recorded states since the last reset (empty unless trail recording
    /// is enabled).
    pub fn trajectory(&self) -> &[System] {
        &self.trajectory
    }

    /// Measure the invariants of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::measure(&self.system, &self.parameters)
    }
}
