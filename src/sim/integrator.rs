use nalgebra::Vector2;

use crate::dynamics::state::State;

// ---------------------------------------------------------------------------
// Semi-implicit (symplectic) Euler integrator
// ---------------------------------------------------------------------------

/// Single semi-implicit Euler step.
///
/// Velocity is updated first from the acceleration at the start of the step;
/// the position update then uses the already-updated velocity. That ordering
/// is what distinguishes the scheme from plain forward Euler and gives it
/// bounded long-term energy error on orbits.
pub fn semi_implicit_step(state: &State, accel: &Vector2<f64>, dt: f64) -> State {
    let vel = state.vel + accel * dt;
    State {
        time: state.time + dt,
        pos: state.pos + vel * dt,
        vel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn position_uses_updated_velocity() {
        let s = State::new(Vector2::zeros(), Vector2::new(1.0, 0.0));
        let accel = Vector2::new(0.0, 1.0);
        let next = semi_implicit_step(&s, &accel, 2.0);
        assert_relative_eq!(next.vel.x, 1.0, max_relative = 1e-12);
        assert_relative_eq!(next.vel.y, 2.0, max_relative = 1e-12);
        // Forward Euler would leave pos.y at 0; the updated velocity moves it
        assert_relative_eq!(next.pos.x, 2.0, max_relative = 1e-12);
        assert_relative_eq!(next.pos.y, 4.0, max_relative = 1e-12);
    }

    #[test]
    fn time_advances_by_dt() {
        let s = State::new(Vector2::zeros(), Vector2::zeros());
        let next = semi_implicit_step(&s, &Vector2::zeros(), 0.5);
        assert_relative_eq!(next.time, 0.5, max_relative = 1e-12);
    }

    #[test]
    fn zero_accel_is_uniform_motion() {
        let s = State::new(Vector2::new(10.0, 20.0), Vector2::new(3.0, -4.0));
        let next = semi_implicit_step(&s, &Vector2::zeros(), 2.0);
        assert_relative_eq!(next.pos.x, 16.0, max_relative = 1e-12);
        assert_relative_eq!(next.pos.y, 12.0, max_relative = 1e-12);
        assert_eq!(next.vel, s.vel);
    }
}
