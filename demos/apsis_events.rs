use nalgebra::Vector2;

use orbit_sim::scenario::presets;
use orbit_sim::sim::event::{AltitudeDetector, ApsisDetector, EventDetector};
use orbit_sim::sim::propagate_with;
use orbit_sim::types::{SimConfig, State};

fn main() {
    println!("=== Apsis Events: 7600 m/s release at 500 km ===\n");

    let scenario = presets::earth_vacuum();
    let r0 = scenario.body.radius + 500_000.0;
    let initial = State::new(Vector2::new(r0, 0.0), Vector2::new(0.0, 7_600.0));
    let config = SimConfig {
        dt: 1.0,
        max_steps: 12_000,
    };

    let mut detectors: Vec<Box<dyn EventDetector>> = vec![
        Box::new(ApsisDetector),
        Box::new(AltitudeDetector::new(450_000.0, scenario.body.radius, false)),
    ];
    let (trajectory, events) = propagate_with(&initial, &scenario, &config, &mut detectors);

    println!("{} samples, {} events\n", trajectory.len(), events.len());
    for e in &events {
        println!(
            "t={:>6.0}s   {:?}   alt={:.1} km",
            e.time,
            e.kind,
            e.state.altitude(scenario.body.radius) / 1000.0
        );
    }
}
