use nalgebra::Vector2;

use orbit_sim::io::csv;
use orbit_sim::io::json::{self, RunSummary};
use orbit_sim::scenario::presets;
use orbit_sim::sim;
use orbit_sim::types::{SimConfig, State};

fn main() -> std::io::Result<()> {
    println!("=== Atmospheric Entry: cannonball at 80 km, 10 km/s ===\n");

    let scenario = presets::earth_drag();
    let initial = State::new(
        Vector2::new(scenario.body.radius + 80_000.0, 0.0),
        Vector2::new(0.0, 10_000.0),
    );
    let config = SimConfig {
        dt: 1.0,
        max_steps: 20_000,
    };

    let trajectory = sim::propagate(&initial, &scenario, &config);
    let summary = RunSummary::from_trajectory(&trajectory, &scenario, &config);

    println!("Samples:      {}", summary.samples);
    println!("Flight time:  {:.0} s", summary.flight_time);
    println!("Max altitude: {:.1} km", summary.max_altitude / 1000.0);
    println!("Max speed:    {:.0} m/s", summary.max_speed);
    println!("Final speed:  {:.0} m/s", summary.final_speed);
    println!("Impact:       {}", summary.impact);
    println!();

    csv::write_trajectory_file("drag_entry.csv", &trajectory)?;
    json::write_summary_file("drag_entry.json", &scenario, &summary)?;
    println!("Wrote drag_entry.csv and drag_entry.json");

    Ok(())
}
