use nalgebra::Vector2;

/// Universal gravitational constant, m^3 kg^-1 s^-2.
pub const G: f64 = 6.674_30e-11;

/// Point-mass gravity acceleration toward the origin.
///
/// `pos` is the position relative to the body center (m); `mu` is the
/// gravitational parameter G*M (m^3/s^2). The r^3 denominator folds the
/// unit-vector normalization into the inverse-square law.
pub fn pointmass_accel(pos: &Vector2<f64>, mu: f64) -> Vector2<f64> {
    let r = pos.norm();
    if r < 1.0 {
        return Vector2::zeros();
    }
    -mu / (r * r * r) * pos
}
