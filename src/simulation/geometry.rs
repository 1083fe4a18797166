//! Geometric utility functions for distances, headings, radii, and light.

use ndarray::Array1;

/// Calculates the Euclidean distance between two points.
///
/// # Arguments
///
/// * `a` - First point
/// * `b` - Second point
///
/// # Returns
///
/// The Euclidean distance between the two points.
pub fn dist(a: &Array1<f64>, b: &Array1<f64>) -> f64 {
    (a - b).mapv(|x| x.powi(2)).sum().sqrt()
}

/// Builds a unit heading vector from an angle in radians.
pub fn heading(angle: f64) -> Array1<f64> {
    Array1::from_vec(vec![angle.cos(), angle.sin()])
}

/// Returns the bearing from `from` toward `to` in radians (`atan2(dy, dx)`).
pub fn bearing(from: &Array1<f64>, to: &Array1<f64>) -> f64 {
    (to[1] - from[1]).atan2(to[0] - from[0])
}

/// Derives a cell's body radius from its mass.
///
/// The base circle-area inversion `sqrt(mass / pi)` is scaled by a
/// species-specific multiplier: plants pack mass densely while mobile species
/// project a larger interaction range per unit of mass.
///
/// # Arguments
///
/// * `mass` - Current cell mass (positive)
/// * `factor` - Species-specific radius multiplier
pub fn radius_from_mass(mass: f64, factor: f64) -> f64 {
    (mass / std::f64::consts::PI).sqrt() * factor
}

/// Calculates light intensity at a point.
///
/// Models a stationary light source at the field center with inverse-linear
/// falloff: `1 / (1 + distance / falloff)`. Intensity is 1.0 at the center
/// and monotonically non-increasing with distance, which gives the dish a
/// spatial carrying-capacity gradient for plants.
///
/// # Arguments
///
/// * `pos` - Point to evaluate
/// * `field_size` - Side length of the square field
/// * `falloff` - Distance at which intensity halves
pub fn light_intensity(pos: &Array1<f64>, field_size: f64, falloff: f64) -> f64 {
    let center = Array1::from_vec(vec![field_size / 2., field_size / 2.]);
    1. / (1. + dist(pos, &center) / falloff)
}

/// Checks whether a position lies inside the square field `[0, field_size]`.
pub fn in_bounds(pos: &Array1<f64>, field_size: f64) -> bool {
    pos[0] >= 0. && pos[0] <= field_size && pos[1] >= 0. && pos[1] <= field_size
}
