//! High-level runtime engine settings
//!
//! Options for how a `Scenario` is driven: whether intermediate states are
//! recorded for trail rendering, and how many integrator steps are applied
//! per external tick.

#[derive(Debug, Clone)]
pub struct Engine {
    pub record_trail: bool, // keep every intermediate System in the trajectory
    pub steps_per_frame: usize, // integrator steps applied per advance() batch
}
