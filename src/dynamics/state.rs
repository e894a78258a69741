use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Planar state: position and velocity relative to the body center
// ---------------------------------------------------------------------------

/// State at a single point in time. The whole system is planar; the origin
/// is the central-body center.
#[derive(Debug, Clone, Copy)]
pub struct State {
    pub time: f64,         // s
    pub pos: Vector2<f64>, // m
    pub vel: Vector2<f64>, // m/s
}

impl State {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>) -> Self {
        Self {
            time: 0.0,
            pos,
            vel,
        }
    }

    /// Distance from the body center.
    pub fn radius(&self) -> f64 {
        self.pos.norm()
    }

    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }

    /// Height above a surface of the given radius.
    pub fn altitude(&self, surface_radius: f64) -> f64 {
        self.radius() - surface_radius
    }

    /// Velocity component along the position vector. Positive while climbing.
    pub fn radial_speed(&self) -> f64 {
        let r = self.radius();
        if r == 0.0 {
            0.0
        } else {
            self.pos.dot(&self.vel) / r
        }
    }
}

// ---------------------------------------------------------------------------
// Simulation configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub dt: f64,          // integration timestep, s
    pub max_steps: usize, // step budget
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 1.0,
            max_steps: 100_000,
        }
    }
}
