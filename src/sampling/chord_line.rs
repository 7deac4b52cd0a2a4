use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::geometry::{GeoPoint, Polyline};
use crate::math::{cartesian_to_geographic, geographic_to_cartesian, lerp, linspace, TOLERANCE};

use super::validate_samples;

/// Samples the straight 3D chord between two points, seen from the centre.
///
/// Both endpoints are placed on the unit sphere, the chord through the
/// interior is interpolated linearly, and each sample is projected back to
/// longitude/latitude. The samples lie on the great circle through the
/// endpoints but are not evenly spaced along it; this is a chord
/// interpolation, not slerp. A chord is a straight line under a gnomonic
/// (centre-perspective) view of the globe.
pub struct SampleChordLine {
    start: GeoPoint,
    end: GeoPoint,
    samples: usize,
}

impl SampleChordLine {
    /// Creates a new `SampleChordLine` operation.
    #[must_use]
    pub fn new(start: GeoPoint, end: GeoPoint, samples: usize) -> Self {
        Self {
            start,
            end,
            samples,
        }
    }

    /// Executes the sampling.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two samples were requested, or if the
    /// endpoints are antipodal so the chord passes through the origin.
    pub fn execute(&self) -> Result<Polyline> {
        validate_samples(self.samples)?;
        let a = geographic_to_cartesian(self.start);
        let b = geographic_to_cartesian(self.end);
        if (a.coords + b.coords).norm() < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let points = linspace(0.0, 1.0, self.samples)
            .into_iter()
            .map(|t| cartesian_to_geographic(&lerp(&a, &b, t)))
            .collect::<Result<Vec<_>>>()?;
        trace!(samples = points.len(), "sampled chord line");
        Ok(Polyline::new(points))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::angular_distance;

    #[test]
    fn endpoints_roundtrip() {
        let start = GeoPoint::new(-70.0, -70.0);
        let line = SampleChordLine::new(start, GeoPoint::new(70.0, 70.0), 64)
            .execute()
            .unwrap();
        assert_eq!(line.len(), 64);
        let first = line.first().unwrap();
        let last = line.last().unwrap();
        assert_abs_diff_eq!(first.lon, -70.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.lat, -70.0, epsilon = 1e-9);
        assert_abs_diff_eq!(last.lon, 70.0, epsilon = 1e-9);
        assert_abs_diff_eq!(last.lat, 70.0, epsilon = 1e-9);
    }

    #[test]
    fn symmetric_span_crosses_equator_at_midpoint() {
        let start = GeoPoint::new(-70.0, -70.0);
        let line = SampleChordLine::new(start, GeoPoint::new(70.0, 70.0), 65)
            .execute()
            .unwrap();
        let mid = line.points[32];
        assert_abs_diff_eq!(mid.lon, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(mid.lat, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn samples_lie_on_the_great_circle() {
        let a = GeoPoint::new(-40.0, 10.0);
        let b = GeoPoint::new(60.0, 50.0);
        let pa = geographic_to_cartesian(a);
        let pb = geographic_to_cartesian(b);
        let normal = pa.coords.cross(&pb.coords).normalize();
        let line = SampleChordLine::new(a, b, 33).execute().unwrap();
        for p in &line.points {
            let q = geographic_to_cartesian(*p);
            assert_abs_diff_eq!(q.coords.dot(&normal), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn chord_is_not_slerp() {
        let a = GeoPoint::new(-80.0, 0.0);
        let b = GeoPoint::new(80.0, 0.0);
        let line = SampleChordLine::new(a, b, 5).execute().unwrap();
        // a quarter of the chord covers far less than a quarter of the arc
        let d = angular_distance(
            &geographic_to_cartesian(a),
            &geographic_to_cartesian(line.points[1]),
        )
        .unwrap();
        assert!(d < 39.0);
        assert!(line.points.iter().all(|p| p.lat.abs() < 1e-12));
    }

    #[test]
    fn antipodal_endpoints_fail() {
        // the rounded midpoint is ~1e-17 from the origin, not exactly on it
        let east = GeoPoint::new(0.0, 0.0);
        let west = GeoPoint::new(180.0, 0.0);
        for samples in [3, 4, 64] {
            let r = SampleChordLine::new(east, west, samples).execute();
            assert!(r.is_err());
        }
        let r = SampleChordLine::new(GeoPoint::new(30.0, 40.0), GeoPoint::new(-150.0, -40.0), 5)
            .execute();
        assert!(r.is_err());
    }
}
