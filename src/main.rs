use nalgebra::Vector2;

use orbit_sim::orbital::OrbitalElements;
use orbit_sim::scenario::presets;
use orbit_sim::sim::event::{ApsisDetector, EventDetector, EventKind};
use orbit_sim::sim::{propagate, propagate_with};
use orbit_sim::types::{SimConfig, State};

fn main() {
    let vacuum = presets::earth_vacuum();
    let drag = presets::earth_drag();
    let r0 = vacuum.body.radius + 500_000.0;

    println!();
    println!("====================================================================");
    println!("  PLANAR ORBIT SIMULATION — Earth point mass");
    println!("====================================================================");
    println!();
    println!(
        "  Body: R = {:.0} km, mu = {:.4e} m^3/s^2",
        vacuum.body.radius / 1000.0,
        vacuum.body.mu()
    );
    println!(
        "  At 500 km altitude: circular {:.0} m/s, escape {:.0} m/s",
        vacuum.body.circular_speed(r0),
        vacuum.body.escape_speed(r0)
    );
    println!();

    // -----------------------------------------------------------------------
    // Launch-speed sweep: tangential release at 500 km, gravity only
    // -----------------------------------------------------------------------
    println!("  Launch-Speed Sweep (500 km, gravity only)");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>8}  {:>10}  {:>9}  {:>9}  {:>12}",
        "v0 m/s", "orbit", "samples", "max alt", "outcome"
    );

    let config = SimConfig {
        dt: 1.0,
        max_steps: 100_000,
    };
    for v0 in [1_000.0, 3_000.0, 7_500.0, 10_000.0] {
        let initial = State::new(Vector2::new(r0, 0.0), Vector2::new(0.0, v0));
        let traj = propagate(&initial, &vacuum, &config);
        let elements = OrbitalElements::from_state(&initial.pos, &initial.vel, vacuum.body.mu());

        let orbit = if elements.is_bound() { "bound" } else { "unbound" };
        let max_alt = traj
            .iter()
            .map(|s| s.altitude(vacuum.body.radius))
            .fold(0.0_f64, f64::max);
        let outcome = if traj.len() < config.max_steps {
            format!("impact {:>6.0}s", traj.last().map_or(0.0, |s| s.time))
        } else {
            "window end".to_string()
        };
        println!(
            "  {:>8.0}  {:>10}  {:>9}  {:>6.0} km  {:>12}",
            v0,
            orbit,
            traj.len(),
            max_alt / 1000.0,
            outcome
        );
    }
    println!();

    // -----------------------------------------------------------------------
    // Orbit insertion: 7600 m/s at 500 km, apsis events
    // -----------------------------------------------------------------------
    println!("  Orbit Insertion (7600 m/s at 500 km)");
    println!("  ──────────────────────────────────────────────────────────────────");

    let initial = State::new(Vector2::new(r0, 0.0), Vector2::new(0.0, 7_600.0));
    let config = SimConfig {
        dt: 1.0,
        max_steps: 6_000,
    };
    let mut detectors: Vec<Box<dyn EventDetector>> = vec![Box::new(ApsisDetector)];
    let (traj, events) = propagate_with(&initial, &vacuum, &config, &mut detectors);

    let elements = OrbitalElements::from_state(&initial.pos, &initial.vel, vacuum.body.mu());
    println!(
        "  ecc = {:.4}, period = {:.0} s, periapsis alt = {:.0} km",
        elements.ecc,
        elements.period(vacuum.body.mu()).unwrap_or(f64::NAN),
        (elements.periapsis(vacuum.body.mu()) - vacuum.body.radius) / 1000.0
    );
    for e in &events {
        let label = match &e.kind {
            EventKind::Apoapsis => "APOAPSIS ",
            EventKind::Periapsis => "PERIAPSIS",
            EventKind::Impact => "IMPACT   ",
            EventKind::Custom(_) => "EVENT    ",
        };
        println!(
            "  {}  t={:>6.0}s   alt={:>7.0} km   speed={:>6.0} m/s",
            label,
            e.time,
            e.state.altitude(vacuum.body.radius) / 1000.0,
            e.state.speed()
        );
    }
    println!(
        "  {} samples, final speed {:.0} m/s",
        traj.len(),
        traj.last().map_or(0.0, |s| s.speed())
    );
    println!();

    // -----------------------------------------------------------------------
    // Drag comparison: hypersonic cannonball at 80 km, drag on/off
    // -----------------------------------------------------------------------
    println!("  Drag Comparison (cannonball, 80 km, 10 km/s tangential)");
    println!("  ──────────────────────────────────────────────────────────────────");

    let initial = State::new(
        Vector2::new(vacuum.body.radius + 80_000.0, 0.0),
        Vector2::new(0.0, 10_000.0),
    );
    let config = SimConfig {
        dt: 1.0,
        max_steps: 20_000,
    };
    for scenario in [&vacuum, &drag] {
        let traj = propagate(&initial, scenario, &config);
        let final_speed = traj.last().map_or(0.0, |s| s.speed());
        let outcome = if traj.len() < config.max_steps {
            format!("impact at t={:.0}s", traj.last().map_or(0.0, |s| s.time))
        } else {
            "survived window".to_string()
        };
        println!(
            "  {:<16}  {:>7} samples   final speed {:>6.0} m/s   {}",
            scenario.name,
            traj.len(),
            final_speed,
            outcome
        );
    }
    println!();
}
