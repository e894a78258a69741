pub mod physics;
pub mod dynamics;
pub mod scenario;
pub mod sim;
pub mod io;
pub mod orbital;

// Convenience re-exports
pub mod atmosphere {
    pub use crate::physics::atmosphere::*;
}

pub mod propagator {
    pub use crate::sim::integrator::semi_implicit_step;
    pub use crate::sim::runner::{propagate, propagate_with};
}

pub mod types {
    pub use crate::dynamics::state::{SimConfig, State};
    pub use crate::physics::atmosphere::Atmosphere;
    pub use crate::scenario::{CentralBody, Projectile, Scenario, ScenarioBuilder};
}
