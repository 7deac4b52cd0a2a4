mod mercator;
mod plate_carree;

pub use mercator::Mercator;
pub use plate_carree::PlateCarree;

use crate::error::Result;
use crate::geometry::GeoPoint;
use crate::math::Point2;

/// Forward transform of a named map projection.
///
/// Renderers plug their own projections in through this trait. The core only
/// calls it where it must interpolate inside a projection's plane.
pub trait Projection {
    /// Human-readable projection name, e.g. for figure titles.
    fn name(&self) -> &'static str;

    /// Maps a geographic point to plane coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if the point lies outside the projection's domain.
    fn project(&self, point: GeoPoint) -> Result<Point2>;
}
