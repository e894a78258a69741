use nalgebra::Vector2;

/// Quadratic drag acceleration, opposing velocity.
///
/// `density` is the local air density (kg/m^3), `cd` the drag coefficient,
/// `area` the cross-sectional area (m^2), `mass` the projectile mass (kg).
/// Exactly zero speed yields the zero vector.
pub fn drag_accel(
    vel: &Vector2<f64>,
    density: f64,
    cd: f64,
    area: f64,
    mass: f64,
) -> Vector2<f64> {
    let speed = vel.norm();
    if speed == 0.0 {
        return Vector2::zeros();
    }
    let q_dyn = 0.5 * density * speed * speed;
    let drag_mag = q_dyn * cd * area;
    -vel / speed * (drag_mag / mass)
}
