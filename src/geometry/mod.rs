mod geo_point;
mod polyline;

pub use geo_point::GeoPoint;
pub use polyline::{PlanePolyline, Polyline};
