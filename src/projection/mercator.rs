use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::error::{ProjectionError, Result};
use crate::geometry::GeoPoint;
use crate::math::Point2;

use super::Projection;

/// Spherical Mercator projection.
///
/// `x = R * lon`, `y = R * ln(tan(pi/4 + lat/2))`. The poles map to
/// infinity and are rejected.
#[derive(Debug, Clone, Copy)]
pub struct Mercator {
    radius: f64,
}

impl Mercator {
    /// Creates the projection for a sphere of the given radius.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Inverse transform from plane coordinates to longitude/latitude.
    #[must_use]
    pub fn unproject(&self, point: &Point2) -> GeoPoint {
        let lon = (point.x / self.radius).to_degrees();
        let lat = (2.0 * (point.y / self.radius).exp().atan() - FRAC_PI_2).to_degrees();
        GeoPoint::new(lon, lat)
    }
}

impl Default for Mercator {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl Projection for Mercator {
    fn name(&self) -> &'static str {
        "Mercator"
    }

    fn project(&self, point: GeoPoint) -> Result<Point2> {
        if point.lat.is_nan() || point.lat.abs() >= 90.0 {
            return Err(ProjectionError::OutOfDomain {
                projection: "Mercator",
                lon: point.lon,
                lat: point.lat,
            }
            .into());
        }
        let y = (FRAC_PI_4 + 0.5 * point.lat.to_radians()).tan().ln();
        Ok(Point2::new(
            self.radius * point.lon.to_radians(),
            self.radius * y,
        ))
    }
}
