use crate::error::Result;
use crate::geometry::GeoPoint;
use crate::math::Point2;

use super::Projection;

/// Equirectangular projection: `x = R * lon`, `y = R * lat` (radians).
#[derive(Debug, Clone, Copy)]
pub struct PlateCarree {
    radius: f64,
}

impl PlateCarree {
    /// Creates the projection for a sphere of the given radius.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Default for PlateCarree {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl Projection for PlateCarree {
    fn name(&self) -> &'static str {
        "Equirectangular (Plate-Carree)"
    }

    fn project(&self, point: GeoPoint) -> Result<Point2> {
        Ok(Point2::new(
            self.radius * point.lon.to_radians(),
            self.radius * point.lat.to_radians(),
        ))
    }
}
