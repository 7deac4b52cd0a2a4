use tracing::trace;

use crate::error::Result;
use crate::geometry::{GeoPoint, PlanePolyline};
use crate::math::{linspace, Point2};
use crate::projection::Projection;

use super::validate_samples;

/// Samples a line that is straight in one projection's plane.
///
/// Only the two endpoints go through the projection's forward transform;
/// the samples between them are interpolated in plane coordinates. The
/// result is already projected and must not be projected again.
pub struct SampleProjectedLine<'a> {
    start: GeoPoint,
    end: GeoPoint,
    samples: usize,
    projection: &'a dyn Projection,
}

impl<'a> SampleProjectedLine<'a> {
    /// Creates a new `SampleProjectedLine` operation.
    #[must_use]
    pub fn new(
        start: GeoPoint,
        end: GeoPoint,
        samples: usize,
        projection: &'a dyn Projection,
    ) -> Self {
        Self {
            start,
            end,
            samples,
            projection,
        }
    }

    /// Executes the sampling.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two samples were requested or an
    /// endpoint is outside the projection's domain.
    pub fn execute(&self) -> Result<PlanePolyline> {
        validate_samples(self.samples)?;
        let a = self.projection.project(self.start)?;
        let b = self.projection.project(self.end)?;
        let xs = linspace(a.x, b.x, self.samples);
        let ys = linspace(a.y, b.y, self.samples);
        let points: Vec<Point2> = xs
            .into_iter()
            .zip(ys)
            .map(|(x, y)| Point2::new(x, y))
            .collect();
        trace!(
            projection = self.projection.name(),
            samples = points.len(),
            "sampled projected line"
        );
        Ok(PlanePolyline { points })
    }
}
