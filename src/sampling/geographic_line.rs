use tracing::trace;

use crate::error::Result;
use crate::geometry::{GeoPoint, Polyline};
use crate::math::linspace;

use super::validate_samples;

/// Samples a straight line in the (lon, lat) plane.
///
/// Longitude and latitude are interpolated independently. This is not a
/// geodesic: it is straight only on an equirectangular map. Longitudes are
/// used as given, so a line from 170 to -170 runs the long way round.
pub struct SampleGeographicLine {
    start: GeoPoint,
    end: GeoPoint,
    samples: usize,
}

impl SampleGeographicLine {
    /// Creates a new `SampleGeographicLine` operation.
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
    /// Returns an error if fewer than two samples were requested.
    pub fn execute(&self) -> Result<Polyline> {
        validate_samples(self.samples)?;
        let lons = linspace(self.start.lon, self.end.lon, self.samples);
        let lats = linspace(self.start.lat, self.end.lat, self.samples);
        let line: Polyline = lons
            .into_iter()
            .zip(lats)
            .map(|(lon, lat)| GeoPoint::new(lon, lat))
            .collect();
        trace!(samples = line.len(), "sampled geographic line");
        Ok(line)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn endpoints_are_exact() {
        let start = GeoPoint::new(-70.0, -70.0);
        let end = GeoPoint::new(70.0, 70.0);
        let line = SampleGeographicLine::new(start, end, 64).execute().unwrap();
        assert_eq!(line.len(), 64);
        assert_eq!(*line.first().unwrap(), start);
        assert_eq!(*line.last().unwrap(), end);
    }

    #[test]
    fn samples_are_evenly_spaced() {
        let start = GeoPoint::new(0.0, -10.0);
        let end = GeoPoint::new(40.0, 30.0);
        let line = SampleGeographicLine::new(start, end, 5).execute().unwrap();
        for (p, expected) in line.points.iter().zip([0.0, 10.0, 20.0, 30.0, 40.0]) {
            assert_abs_diff_eq!(p.lon, expected, epsilon = 1e-12);
            assert_abs_diff_eq!(p.lat, expected - 10.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn meridian_keeps_longitude_constant() {
        let south = GeoPoint::new(-150.0, -89.0);
        let north = GeoPoint::new(-150.0, 89.0);
        let line = SampleGeographicLine::new(south, north, 128).execute().unwrap();
        assert!(line.points.iter().all(|p| (p.lon + 150.0).abs() < f64::EPSILON));
    }

    #[test]
    fn crossing_antimeridian_is_not_unwrapped() {
        let start = GeoPoint::new(170.0, 0.0);
        let end = GeoPoint::new(-170.0, 0.0);
        let line = SampleGeographicLine::new(start, end, 3).execute().unwrap();
        assert_abs_diff_eq!(line.points[1].lon, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn single_sample_rejected() {
        assert!(SampleGeographicLine::new(GeoPoint::origin(), GeoPoint::origin(), 1)
            .execute()
            .is_err());
    }
}
