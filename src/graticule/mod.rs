//! Meridians, parallels and node markers of a longitude/latitude grid.

use tracing::debug;

use crate::error::{Result, SamplingError};
use crate::geometry::{GeoPoint, Polyline};
use crate::math::TOLERANCE;
use crate::sampling::SampleGeographicLine;

/// Latitude at which meridians stop short of the poles.
///
/// Also the ceiling for the parallel search, so no parallel lands on a pole.
pub const MERIDIAN_LAT_LIMIT: f64 = 89.0;

/// Grid spacing and line density.
#[derive(Debug, Clone, Copy)]
pub struct GridSpec {
    /// Spacing between meridians, in degrees.
    pub lon_spacing: f64,
    /// Spacing between parallels, in degrees.
    pub lat_spacing: f64,
    /// Number of points along each grid line.
    pub samples: usize,
}

impl GridSpec {
    /// Creates a grid spec with the default line density.
    #[must_use]
    pub fn new(lon_spacing: f64, lat_spacing: f64) -> Self {
        Self {
            lon_spacing,
            lat_spacing,
            ..Self::default()
        }
    }

    /// First meridian: the westernmost multiple of the spacing not below -180.
    #[must_use]
    pub fn lon_origin(&self) -> f64 {
        -(180.0 / self.lon_spacing).floor() * self.lon_spacing
    }

    /// First parallel: the southernmost multiple of the spacing not below -89.
    #[must_use]
    pub fn lat_origin(&self) -> f64 {
        -(MERIDIAN_LAT_LIMIT / self.lat_spacing).floor() * self.lat_spacing
    }

    /// Longitudes of all meridians, west to east, ending at or before 180.
    #[must_use]
    pub fn meridian_longitudes(&self) -> Vec<f64> {
        let lon0 = self.lon_origin();
        (0u32..)
            .map(|k| lon0 + f64::from(k) * self.lon_spacing)
            .take_while(|&lon| lon <= 180.0 + TOLERANCE)
            .collect()
    }

    /// Latitudes of all parallels, south to north, strictly below 90.
    #[must_use]
    pub fn parallel_latitudes(&self) -> Vec<f64> {
        let lat0 = self.lat_origin();
        (0u32..)
            .map(|k| lat0 + f64::from(k) * self.lat_spacing)
            .take_while(|&lat| lat < 90.0)
            .collect()
    }

    fn validate(&self) -> Result<()> {
        let spacings = [
            ("lon_spacing", self.lon_spacing),
            ("lat_spacing", self.lat_spacing),
        ];
        for (name, spacing) in spacings {
            if !spacing.is_finite() || spacing <= 0.0 {
                return Err(SamplingError::InvalidParameters(format!(
                    "{name} must be a positive number of degrees, got {spacing}"
                ))
                .into());
            }
        }
        Ok(())
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            lon_spacing: 30.0,
            lat_spacing: 30.0,
            samples: 128,
        }
    }
}

/// A longitude/latitude grid ready to be drawn.
#[derive(Debug, Clone, Default)]
pub struct Graticule {
    /// One line per meridian, south to north.
    pub meridians: Vec<Polyline>,
    /// One line per parallel, west to east.
    pub parallels: Vec<Polyline>,
    /// Meridian/parallel intersections, latitude-major.
    pub nodes: Vec<GeoPoint>,
    /// Fixed markers at the antimeridian and near the poles.
    pub reference_markers: Vec<GeoPoint>,
}

/// Markers drawn on every figure: both ends of the equator and the two
/// meridian ends on the prime meridian.
#[must_use]
pub fn reference_markers() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(-180.0, 0.0),
        GeoPoint::new(180.0, 0.0),
        GeoPoint::new(0.0, MERIDIAN_LAT_LIMIT),
        GeoPoint::new(0.0, -MERIDIAN_LAT_LIMIT),
    ]
}

/// Builds a [`Graticule`] whose lines are symmetric about 0 degrees.
pub struct BuildGraticule {
    spec: GridSpec,
}

impl BuildGraticule {
    /// Creates a new `BuildGraticule` operation.
    #[must_use]
    pub fn new(spec: GridSpec) -> Self {
        Self { spec }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if a spacing is not positive or fewer than two
    /// samples per line were requested.
    pub fn execute(&self) -> Result<Graticule> {
        self.spec.validate()?;
        let lons = self.spec.meridian_longitudes();
        let lats = self.spec.parallel_latitudes();
        let n = self.spec.samples;

        let meridians = lons
            .iter()
            .map(|&lon| {
                SampleGeographicLine::new(
                    GeoPoint::new(lon, -MERIDIAN_LAT_LIMIT),
                    GeoPoint::new(lon, MERIDIAN_LAT_LIMIT),
                    n,
                )
                .execute()
            })
            .collect::<Result<Vec<_>>>()?;

        let parallels = lats
            .iter()
            .map(|&lat| {
                SampleGeographicLine::new(GeoPoint::new(-180.0, lat), GeoPoint::new(180.0, lat), n)
                    .execute()
            })
            .collect::<Result<Vec<_>>>()?;

        let nodes = lats
            .iter()
            .flat_map(|&lat| lons.iter().map(move |&lon| GeoPoint::new(lon, lat)))
            .collect::<Vec<_>>();

        debug!(
            meridians = meridians.len(),
            parallels = parallels.len(),
            nodes = nodes.len(),
            "built graticule"
        );

        Ok(Graticule {
            meridians,
            parallels,
            nodes,
            reference_markers: reference_markers(),
        })
    }
}
