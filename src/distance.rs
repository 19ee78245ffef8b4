//! Squared distance and the radius membership test

use crate::error::{Result, SpaceError};

/// Squared Euclidean distance from `query` to `stored`, summed over the
/// query's dimensions.
///
/// Components of `stored` past `query.len()` are ignored. If `stored` is
/// shorter than `query` the point is missing a dimension being asked about
/// and the distance is `f64::INFINITY`.
pub fn squared_distance(query: &[f64], stored: &[f64]) -> f64 {
    if stored.len() < query.len() {
        return f64::INFINITY;
    }
    query
        .iter()
        .zip(stored.iter())
        .map(|(a, b)| (a - b).powi(2))
        .sum()
}

/// Radius membership: `squared_distance(query, stored) < radius`.
///
/// The squared distance is compared against the raw `radius`, not its
/// square, and the comparison is strict.
pub fn is_within_radius(query: &[f64], stored: &[f64], radius: f64) -> bool {
    squared_distance(query, stored) < radius
}

/// The radius that makes [`is_within_radius`] a plain Euclidean
/// `distance < d` test. Negative or NaN distances give a radius nothing
/// falls under.
pub fn radius_for_distance(distance: f64) -> f64 {
    if distance >= 0.0 {
        distance * distance
    } else {
        0.0
    }
}

/// Squared Euclidean distance between two vectors of equal dimension.
pub fn checked_squared_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(SpaceError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(squared_distance(a, b))
}
