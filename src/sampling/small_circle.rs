use std::f64::consts::TAU;

use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::geometry::{GeoPoint, Polyline};
use crate::math::{cartesian_to_geographic, linspace, Point3, Rotation};

use super::validate_samples;

/// Samples a small circle of given angular radius on the sphere.
///
/// The template circle sits around `(1, 0, 0)` as the points
/// `(1, w * cos(a), w * sin(a))` with `w = tan(radius)` and `a` running over
/// `[0, 2*pi]`. Those points are off the unit sphere; the geographic
/// conversion normalises them, which puts them exactly `radius` degrees away
/// from the centre. The rotation then carries the template to its final
/// place, so the centre is `rotation.apply((1, 0, 0))`.
///
/// Both ends of the parameter range are sampled, so the first and last
/// points coincide and the polyline is closed.
pub struct SampleSmallCircle {
    radius_deg: f64,
    rotation: Rotation,
    samples: usize,
}

impl SampleSmallCircle {
    /// Creates a new `SampleSmallCircle` operation.
    ///
    /// * `radius_deg` - Angular radius in degrees, in `(0, 90)`.
    #[must_use]
    pub fn new(radius_deg: f64, rotation: Rotation, samples: usize) -> Self {
        Self {
            radius_deg,
            rotation,
            samples,
        }
    }

    /// Creates the operation from the template half-width `w = tan(radius)`.
    #[must_use]
    pub fn from_half_width(w: f64, rotation: Rotation, samples: usize) -> Self {
        Self::new(w.atan().to_degrees(), rotation, samples)
    }

    /// Angular radius in degrees.
    #[must_use]
    pub fn radius_deg(&self) -> f64 {
        self.radius_deg
    }

    /// Centre of the circle on the unit sphere.
    #[must_use]
    pub fn center(&self) -> Point3 {
        self.rotation.apply(&Point3::new(1.0, 0.0, 0.0))
    }

    /// Returns the rotated template points, before normalisation.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is outside `(0, 90)` or fewer than two
    /// samples were requested.
    pub fn execute_cartesian(&self) -> Result<Vec<Point3>> {
        validate_samples(self.samples)?;
        let in_range = self.radius_deg > 0.0 && self.radius_deg < 90.0;
        if !in_range {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "radius_deg",
                value: self.radius_deg,
                min: 0.0,
                max: 90.0,
            }
            .into());
        }

        let w = self.radius_deg.to_radians().tan();
        Ok(linspace(0.0, TAU, self.samples)
            .into_iter()
            .map(|a| {
                let (s, c) = a.sin_cos();
                self.rotation.apply(&Point3::new(1.0, w * c, w * s))
            })
            .collect())
    }

    /// Executes the sampling, returning the circle as a geographic polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is outside `(0, 90)` or fewer than two
    /// samples were requested.
    pub fn execute(&self) -> Result<Polyline> {
        let points = self
            .execute_cartesian()?
            .iter()
            .map(cartesian_to_geographic)
            .collect::<Result<Vec<GeoPoint>>>()?;
        trace!(
            radius_deg = self.radius_deg,
            samples = points.len(),
            "sampled small circle"
        );
        Ok(Polyline::new(points))
    }
}
