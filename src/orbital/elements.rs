use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Planar two-body orbit elements
// ---------------------------------------------------------------------------

/// Conic-section elements of a planar two-body orbit, derived from a single
/// state. Signed angular momentum is the scalar z-component of r x v.
#[derive(Debug, Clone, Copy)]
pub struct OrbitalElements {
    pub specific_energy: f64,   // J/kg
    pub angular_momentum: f64,  // m^2/s, signed
    pub sma: f64,               // semi-major axis, m (negative on hyperbolas)
    pub ecc: f64,               // eccentricity (0 = circular)
}

impl OrbitalElements {
    /// Compute elements from a position/velocity pair and gravitational
    /// parameter `mu`.
    pub fn from_state(pos: &Vector2<f64>, vel: &Vector2<f64>, mu: f64) -> Self {
        let r = pos.norm();
        let v2 = vel.norm_squared();

        let specific_energy = 0.5 * v2 - mu / r;
        let angular_momentum = pos.x * vel.y - pos.y * vel.x;

        // ecc^2 = 1 + 2*E*h^2/mu^2; rounding can push the radicand
        // fractionally below zero on circular orbits
        let radicand = 1.0
            + 2.0 * specific_energy * angular_momentum * angular_momentum / (mu * mu);
        let ecc = radicand.max(0.0).sqrt();

        let sma = -mu / (2.0 * specific_energy);

        Self {
            specific_energy,
            angular_momentum,
            sma,
            ecc,
        }
    }

    /// Negative specific energy means a closed (elliptical) orbit.
    pub fn is_bound(&self) -> bool {
        self.specific_energy < 0.0
    }

    /// Semi-latus rectum h^2/mu.
    fn semi_latus_rectum(&self, mu: f64) -> f64 {
        self.angular_momentum * self.angular_momentum / mu
    }

    /// Periapsis radius. Defined for every conic.
    pub fn periapsis(&self, mu: f64) -> f64 {
        self.semi_latus_rectum(mu) / (1.0 + self.ecc)
    }

    /// Apoapsis radius; `None` on unbound orbits.
    pub fn apoapsis(&self, mu: f64) -> Option<f64> {
        if self.is_bound() && self.ecc < 1.0 {
            Some(self.semi_latus_rectum(mu) / (1.0 - self.ecc))
        } else {
            None
        }
    }

    /// Orbital period; `None` on unbound orbits.
    pub fn period(&self, mu: f64) -> Option<f64> {
        if self.is_bound() {
            Some(2.0 * std::f64::consts::PI * (self.sma.powi(3) / mu).sqrt())
        } else {
            None
        }
    }
}
