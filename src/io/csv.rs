use std::io::{self, Write};

use crate::dynamics::state::State;

/// Write trajectory data to CSV format.
///
/// Columns: time, pos_x, pos_y, vel_x, vel_y, speed, radius
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &[State]) -> io::Result<()> {
    writeln!(writer, "time,pos_x,pos_y,vel_x,vel_y,speed,radius")?;

    for s in trajectory {
        writeln!(
            writer,
            "{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4}",
            s.time,
            s.pos.x,
            s.pos.y,
            s.vel.x,
            s.vel.y,
            s.speed(),
            s.radius(),
        )?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: &str, trajectory: &[State]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, trajectory)
}
