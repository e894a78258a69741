use std::io::{self, Write};

use crate::dynamics::state::{SimConfig, State};
use crate::scenario::Scenario;

/// Summary statistics computed from a propagated trajectory.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub samples: usize,
    pub flight_time: f64,
    pub max_radius: f64,
    pub min_radius: f64,
    pub max_altitude: f64,
    pub max_speed: f64,
    pub final_speed: f64,
    pub impact: bool,
}

impl RunSummary {
    /// Compute summary from trajectory data. A trajectory shorter than the
    /// step budget terminated by collision.
    pub fn from_trajectory(trajectory: &[State], scenario: &Scenario, config: &SimConfig) -> Self {
        let max_radius = trajectory.iter().map(State::radius).fold(0.0_f64, f64::max);
        let min_radius = trajectory
            .iter()
            .map(State::radius)
            .fold(f64::INFINITY, f64::min);
        let max_speed = trajectory.iter().map(State::speed).fold(0.0_f64, f64::max);

        RunSummary {
            samples: trajectory.len(),
            flight_time: trajectory.last().map_or(0.0, |s| s.time),
            max_radius,
            min_radius: if min_radius.is_finite() { min_radius } else { 0.0 },
            max_altitude: max_radius - scenario.body.radius,
            max_speed,
            final_speed: trajectory.last().map_or(0.0, |s| s.speed()),
            impact: trajectory.len() < config.max_steps,
        }
    }
}

/// Write run summary as JSON to a writer.
pub fn write_summary<W: Write>(
    writer: &mut W,
    scenario: &Scenario,
    summary: &RunSummary,
) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"scenario\": {{")?;
    writeln!(writer, "    \"name\": \"{}\",", scenario.name)?;
    writeln!(writer, "    \"body_radius_m\": {:.1},", scenario.body.radius)?;
    writeln!(writer, "    \"drag\": {}", scenario.drag_model().is_some())?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"run\": {{")?;
    writeln!(writer, "    \"samples\": {},", summary.samples)?;
    writeln!(writer, "    \"flight_time_s\": {:.2},", summary.flight_time)?;
    writeln!(writer, "    \"max_radius_m\": {:.2},", summary.max_radius)?;
    writeln!(writer, "    \"min_radius_m\": {:.2},", summary.min_radius)?;
    writeln!(writer, "    \"max_altitude_m\": {:.2},", summary.max_altitude)?;
    writeln!(writer, "    \"max_speed_ms\": {:.2},", summary.max_speed)?;
    writeln!(writer, "    \"final_speed_ms\": {:.2},", summary.final_speed)?;
    writeln!(writer, "    \"impact\": {}", summary.impact)?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write run summary JSON to a file.
pub fn write_summary_file(
    path: &str,
    scenario: &Scenario,
    summary: &RunSummary,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, scenario, summary)
}
