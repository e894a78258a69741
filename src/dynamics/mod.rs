pub mod state;

use nalgebra::Vector2;

use crate::physics::{aerodynamics, gravity};
use crate::scenario::Scenario;
use state::State;

// ---------------------------------------------------------------------------
// Force model (point mass, planar)
// ---------------------------------------------------------------------------

/// Total acceleration at a state.
///
/// Forces modeled:
///   1. Gravity — inverse-square law toward the body center
///   2. Drag    — quadratic, opposing velocity, exponential atmosphere
///               (only when the scenario carries atmosphere + projectile)
pub fn acceleration(state: &State, scenario: &Scenario) -> Vector2<f64> {
    // --- Gravity ---
    let a_gravity = gravity::pointmass_accel(&state.pos, scenario.body.mu());

    // --- Aerodynamic drag ---
    let a_drag = match scenario.drag_model() {
        Some((atmosphere, projectile)) => {
            let altitude = state.altitude(scenario.body.radius);
            let density = atmosphere.density(altitude);
            aerodynamics::drag_accel(
                &state.vel,
                density,
                projectile.cd,
                projectile.area,
                projectile.mass,
            )
        }
        None => Vector2::zeros(),
    };

    a_gravity + a_drag
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
