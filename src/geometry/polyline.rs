use crate::error::Result;
use crate::math::Point2;
use crate::projection::Projection;

use super::GeoPoint;

/// An ordered sequence of geographic points.
///
/// Order is rendering order: consecutive points are joined by a straight
/// segment in whatever space the renderer draws in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<GeoPoint>,
}

impl Polyline {
    /// Creates a polyline from its vertices.
    #[must_use]
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the polyline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First vertex, if any.
    #[must_use]
    pub fn first(&self) -> Option<&GeoPoint> {
        self.points.first()
    }

    /// Last vertex, if any.
    #[must_use]
    pub fn last(&self) -> Option<&GeoPoint> {
        self.points.last()
    }

    /// Passes every vertex through a projection's forward transform.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the projection.
    pub fn project(&self, projection: &dyn Projection) -> Result<PlanePolyline> {
        let points = self
            .points
            .iter()
            .map(|p| projection.project(*p))
            .collect::<Result<Vec<_>>>()?;
        Ok(PlanePolyline { points })
    }
}

impl FromIterator<GeoPoint> for Polyline {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// An ordered sequence of points already in a projection's plane.
///
/// Renderers draw these as-is, without another forward transform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanePolyline {
    /// The ordered vertices, in projection plane units.
    pub points: Vec<Point2>,
}

impl PlanePolyline {
    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the polyline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::projection::{Mercator, PlateCarree};

    #[test]
    fn collect_preserves_order() {
        let line: Polyline = (0..4)
            .map(|i| GeoPoint::new(f64::from(i), 0.0))
            .collect();
        assert_eq!(line.len(), 4);
        assert!((line.first().unwrap().lon).abs() < f64::EPSILON);
        assert!((line.last().unwrap().lon - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn project_maps_every_vertex() {
        let line = Polyline::new(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(90.0, 45.0)]);
        let plane = line.project(&PlateCarree::default()).unwrap();
        assert_eq!(plane.len(), 2);
        assert!((plane.points[1].x - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((plane.points[1].y - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn project_propagates_projection_errors() {
        let line = Polyline::new(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 90.0)]);
        assert!(line.project(&Mercator::default()).is_err());
    }
}
