//! Great-circle distance between two coordinates, and the geo-fence radius test.

use crate::features::coordinate::Coordinate;

/// Mean earth radius used by the haversine formula, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two coordinates, in meters.
///
/// Every trigonometric argument is in radians, including the `cos(φ1)·cos(φ2)` term.
/// The intermediate `a` is clamped to `[0, 1]` so that floating point overshoot near
/// antipodal points can't push `asin` outside its domain.
pub fn calculate_distance(point1: &Coordinate, point2: &Coordinate) -> f64 {
    let phi1 = point1.latitude.to_radians();
    let phi2 = point2.latitude.to_radians();
    let delta_phi = phi2 - phi1;
    let delta_lambda = point2.longitude.to_radians() - point1.longitude.to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_M * a.sqrt().asin()
}

pub fn to_kilometers(distance_m: f64) -> f64 {
    distance_m / 1000.0
}

/// Returns whether `point2` lies within `range_in_kilometers` of `point1` (inclusive),
/// together with the full-precision distance in kilometers. The distance is returned
/// even when the check fails so callers can report by how much the radius was exceeded.
pub fn is_within_range(
    point1: &Coordinate,
    point2: &Coordinate,
    range_in_kilometers: f64,
) -> (bool, f64) {
    let distance_km = to_kilometers(calculate_distance(point1, point2));
    (distance_km <= range_in_kilometers, distance_km)
}

/// Decimals beyond what an `f64` can carry.
const MAX_DISPLAY_DECIMALS: u32 = 15;

/// Rounds a distance for display. Never feed the result back into a range check.
/// Requests for more than 15 decimals are capped.
pub fn round_distance(distance: f64, num_of_decimals: u32) -> f64 {
    let factor = 10f64.powi(num_of_decimals.min(MAX_DISPLAY_DECIMALS) as i32);
    (distance * factor).round() / factor
}
