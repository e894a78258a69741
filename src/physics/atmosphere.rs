// ---------------------------------------------------------------------------
// Exponential atmosphere model
// ---------------------------------------------------------------------------

/// Exponential atmosphere: density falls by 1/e per scale height.
///
/// Clamps negative altitudes to the sea-level value.
#[derive(Debug, Clone, Copy)]
pub struct Atmosphere {
    pub sea_level_density: f64, // kg/m^3
    pub scale_height: f64,      // m
}

impl Atmosphere {
    pub fn new(sea_level_density: f64, scale_height: f64) -> Self {
        Self {
            sea_level_density,
            scale_height,
        }
    }

    /// Earth parameters used across the scenario suite.
    pub fn earth() -> Self {
        Self {
            sea_level_density: 1.225,
            scale_height: 8_500.0,
        }
    }

    /// Density at a geometric altitude above the surface (kg/m^3).
    pub fn density(&self, altitude: f64) -> f64 {
        let h = altitude.max(0.0);
        self.sea_level_density * (-h / self.scale_height).exp()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
