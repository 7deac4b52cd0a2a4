/// A geographic position in degrees.
///
/// Longitude is conventionally in `(-180, 180]` and latitude in `[-90, 90]`.
/// Callers are expected to keep `|lat| <= 90`; the conversions in
/// [`crate::math::spherical`] do not re-check it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Longitude in degrees, east-positive.
    pub lon: f64,
    /// Latitude in degrees, north-positive.
    pub lat: f64,
}

impl GeoPoint {
    /// Creates a new geographic point.
    #[must_use]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// The point at lon = 0, lat = 0.
    #[must_use]
    pub fn origin() -> Self {
        Self { lon: 0.0, lat: 0.0 }
    }

    /// Returns the longitude folded into `(-180, 180]`.
    #[must_use]
    pub fn normalized_lon(&self) -> f64 {
        let lon = (self.lon + 180.0).rem_euclid(360.0) - 180.0;
        if lon <= -180.0 {
            lon + 360.0
        } else {
            lon
        }
    }

    /// Linear interpolation of longitude and latitude independently.
    #[must_use]
    pub fn lerp(&self, other: &GeoPoint, t: f64) -> GeoPoint {
        GeoPoint {
            lon: self.lon + (other.lon - self.lon) * t,
            lat: self.lat + (other.lat - self.lat) * t,
        }
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}
