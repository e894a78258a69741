use crate::dynamics;
use crate::dynamics::state::{SimConfig, State};
use crate::scenario::Scenario;

use super::event::{EventDetector, EventKind, SimEvent};
use super::integrator::semi_implicit_step;

// ---------------------------------------------------------------------------
// Fixed-step propagation loop
// ---------------------------------------------------------------------------

/// Propagate an initial state through a scenario, recording every step.
///
/// Each iteration first checks the current radius against the body surface
/// and stops on collision without recording anything; otherwise it evaluates
/// the force model, takes one semi-implicit Euler step, and appends the
/// result. The returned trajectory has at most `max_steps` samples and is
/// shorter exactly when a collision terminated the run.
///
/// Starting below the surface is a precondition violation; the loop then
/// terminates immediately and the trajectory is empty.
pub fn propagate(initial: &State, scenario: &Scenario, config: &SimConfig) -> Vec<State> {
    propagate_with(initial, scenario, config, &mut []).0
}

/// Propagate while feeding consecutive state pairs to passive event
/// detectors. Collision termination is reported as an `Impact` event
/// carrying the sub-surface state that triggered it.
pub fn propagate_with(
    initial: &State,
    scenario: &Scenario,
    config: &SimConfig,
    detectors: &mut [Box<dyn EventDetector>],
) -> (Vec<State>, Vec<SimEvent>) {
    let cap = config.max_steps.min(200_000);
    let mut trajectory = Vec::with_capacity(cap);
    let mut events = Vec::new();
    let mut state = *initial;

    for _ in 0..config.max_steps {
        if state.radius() < scenario.body.radius {
            events.push(SimEvent {
                time: state.time,
                kind: EventKind::Impact,
                state,
            });
            break;
        }

        let accel = dynamics::acceleration(&state, scenario);
        let next = semi_implicit_step(&state, &accel, config.dt);

        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(&state, &next) {
                events.push(SimEvent {
                    time: next.time,
                    kind,
                    state: next,
                });
            }
        }

        state = next;
        trajectory.push(state);
    }

    (trajectory, events)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::presets;
    use crate::sim::event::ApsisDetector;
    use nalgebra::Vector2;

    fn leo_state(body_radius: f64, vy: f64) -> State {
        State::new(Vector2::new(body_radius + 500_000.0, 0.0), Vector2::new(0.0, vy))
    }

    #[test]
    fn circular_orbit_radius_stays_closed() {
        let scenario = presets::earth_vacuum();
        let r0 = scenario.body.radius + 500_000.0;
        let v = scenario.body.circular_speed(r0);
        let initial = leo_state(scenario.body.radius, v);

        let period = 2.0 * std::f64::consts::PI * (r0.powi(3) / scenario.body.mu()).sqrt();
        let config = SimConfig {
            dt: 1.0,
            max_steps: period.ceil() as usize,
        };
        let traj = propagate(&initial, &scenario, &config);
        assert_eq!(traj.len(), config.max_steps);

        for s in &traj {
            let rel = (s.radius() - r0).abs() / r0;
            assert!(rel < 0.01, "radius drifted {:.3}% at t={:.0}", rel * 100.0, s.time);
        }
    }

    #[test]
    fn suborbital_speed_terminates_by_collision() {
        let scenario = presets::earth_vacuum();
        let initial = leo_state(scenario.body.radius, 1_000.0);
        let config = SimConfig {
            dt: 1.0,
            max_steps: 10_000,
        };
        let traj = propagate(&initial, &scenario, &config);
        assert!(!traj.is_empty());
        assert!(traj.len() < config.max_steps, "should impact before budget");
        // Every recorded sample passed the surface check except the last,
        // whose sub-surface radius is what terminated the run.
        for s in &traj[..traj.len() - 1] {
            assert!(s.radius() >= scenario.body.radius);
        }
        assert!(traj.last().unwrap().radius() < scenario.body.radius);
    }

    #[test]
    fn hyperbolic_speed_escapes_without_collision() {
        let scenario = presets::earth_vacuum();
        let r0 = scenario.body.radius + 500_000.0;
        let v_esc = scenario.body.escape_speed(r0);
        let initial = leo_state(scenario.body.radius, v_esc + 400.0);
        let config = SimConfig {
            dt: 1.0,
            max_steps: 3_000,
        };
        let traj = propagate(&initial, &scenario, &config);
        assert_eq!(traj.len(), config.max_steps);
        // Launched at periapsis, so radius grows monotonically
        for w in traj.windows(2) {
            assert!(w[1].radius() >= w[0].radius() - 1e-6);
        }
        assert!(traj.last().unwrap().radius() > r0);
    }

    #[test]
    fn drag_never_increases_speed_vs_vacuum_twin() {
        let vacuum = presets::earth_vacuum();
        let drag = presets::earth_drag();
        let initial = State::new(
            Vector2::new(vacuum.body.radius + 10_000.0, 0.0),
            Vector2::new(0.0, 2_000.0),
        );
        let config = SimConfig {
            dt: 0.1,
            max_steps: 100,
        };
        let traj_vac = propagate(&initial, &vacuum, &config);
        let traj_drag = propagate(&initial, &drag, &config);
        assert_eq!(traj_vac.len(), traj_drag.len());
        for (v, d) in traj_vac.iter().zip(&traj_drag) {
            assert!(
                d.speed() <= v.speed() + 1e-9,
                "drag run faster at t={:.1}: {} > {}",
                d.time,
                d.speed(),
                v.speed()
            );
        }
    }

    #[test]
    fn orbit_insertion_stays_bound_for_full_window() {
        // 7600 m/s at 500 km: below escape speed, near circular. Must stay
        // inside 2R and never collide across 6000 one-second steps.
        let scenario = presets::earth_vacuum();
        let initial = leo_state(scenario.body.radius, 7_600.0);
        let config = SimConfig {
            dt: 1.0,
            max_steps: 6_000,
        };
        let traj = propagate(&initial, &scenario, &config);
        assert_eq!(traj.len(), 6_000, "must not collide inside the window");
        for s in &traj {
            assert!(s.radius() < 2.0 * scenario.body.radius);
            assert!(s.radius() >= scenario.body.radius);
        }
    }

    #[test]
    fn zero_step_budget_yields_empty_trajectory() {
        let scenario = presets::earth_vacuum();
        let initial = leo_state(scenario.body.radius, 7_600.0);
        let config = SimConfig {
            dt: 1.0,
            max_steps: 0,
        };
        assert!(propagate(&initial, &scenario, &config).is_empty());
    }

    #[test]
    fn starting_below_surface_terminates_immediately() {
        let scenario = presets::earth_vacuum();
        let initial = State::new(
            Vector2::new(scenario.body.radius * 0.5, 0.0),
            Vector2::new(0.0, 7_600.0),
        );
        let config = SimConfig {
            dt: 1.0,
            max_steps: 100,
        };
        let (traj, events) = propagate_with(&initial, &scenario, &config, &mut []);
        assert!(traj.is_empty());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::Impact);
    }

    #[test]
    fn elliptical_orbit_reports_apsis_passages() {
        let scenario = presets::earth_vacuum();
        let initial = leo_state(scenario.body.radius, 7_600.0);
        let config = SimConfig {
            dt: 1.0,
            max_steps: 6_000,
        };
        let mut detectors: Vec<Box<dyn EventDetector>> = vec![Box::new(ApsisDetector)];
        let (_, events) = propagate_with(&initial, &scenario, &config, &mut detectors);
        // ~5660 s period starting at apoapsis: at least one periapsis and
        // one apoapsis passage inside the window
        assert!(events.iter().any(|e| e.kind == EventKind::Periapsis));
        assert!(events.iter().any(|e| e.kind == EventKind::Apoapsis));
    }
}
