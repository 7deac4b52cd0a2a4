//! Conversions between Cartesian points and geographic coordinates on the
//! unit sphere.
//!
//! The frame is right-handed: `+X` pierces (lon 0, lat 0), `+Y` pierces
//! (lon 90, lat 0) and `+Z` is the north pole. Angles at this API are in
//! degrees.

use crate::error::{GeometryError, Result};
use crate::geometry::GeoPoint;

use super::{Point3, POLE_EPSILON};

/// Euclidean norm that neither overflows nor underflows for finite input.
fn norm(point: &Point3) -> f64 {
    point.x.hypot(point.y).hypot(point.z)
}

/// Converts a Cartesian point to longitude/latitude.
///
/// The point need not be normalised; any point on the ray from the origin
/// yields the same result. Longitude is in `(-180, 180]`. At the poles the
/// longitude is undefined and reported as `0`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if the point is the origin.
pub fn cartesian_to_geographic(point: &Point3) -> Result<GeoPoint> {
    let r = norm(point);
    if r <= 0.0 {
        return Err(GeometryError::ZeroVector.into());
    }

    // Both atan2 forms are invariant under scaling, so no 1/r is needed.
    let equatorial = point.x.hypot(point.y);
    let lat = point.z.atan2(equatorial).to_degrees();

    if equatorial <= POLE_EPSILON * r {
        return Ok(GeoPoint::new(0.0, lat));
    }

    let mut lon = point.y.atan2(point.x).to_degrees();
    if lon <= -180.0 {
        lon += 360.0;
    }
    Ok(GeoPoint::new(lon, lat))
}

/// Converts longitude/latitude to a point on the unit sphere.
#[must_use]
pub fn geographic_to_cartesian(point: GeoPoint) -> Point3 {
    let (sin_lon, cos_lon) = point.lon.to_radians().sin_cos();
    let (sin_lat, cos_lat) = point.lat.to_radians().sin_cos();
    Point3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
}

/// Element-wise [`cartesian_to_geographic`].
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] for the first point at the origin.
pub fn cartesian_to_geographic_batch(points: &[Point3]) -> Result<Vec<GeoPoint>> {
    points.iter().map(cartesian_to_geographic).collect()
}

/// Element-wise [`geographic_to_cartesian`].
#[must_use]
pub fn geographic_to_cartesian_batch(points: &[GeoPoint]) -> Vec<Point3> {
    points.iter().copied().map(geographic_to_cartesian).collect()
}

/// Central angle in degrees between the directions of two points.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if either point is the origin.
pub fn angular_distance(a: &Point3, b: &Point3) -> Result<f64> {
    let na = norm(a);
    let nb = norm(b);
    if na <= 0.0 || nb <= 0.0 {
        return Err(GeometryError::ZeroVector.into());
    }
    let ua = a.coords / na;
    let ub = b.coords / nb;
    // atan2 of cross and dot stays accurate for nearly parallel directions
    let angle = ua.cross(&ub).norm().atan2(ua.dot(&ub));
    Ok(angle.to_degrees())
}
