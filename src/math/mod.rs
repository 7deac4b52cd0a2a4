pub mod rotation;
pub mod spherical;

pub use rotation::{rotate_about_equatorial_axis, rotate_about_polar_axis, Axis, Rotation};
pub use spherical::{
    angular_distance, cartesian_to_geographic, cartesian_to_geographic_batch,
    geographic_to_cartesian, geographic_to_cartesian_batch,
};

/// 2D point type (projection plane coordinates).
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Below this normalised equatorial radius a point is treated as a pole.
pub const POLE_EPSILON: f64 = 1e-12;

/// Returns `n` evenly spaced values from `start` to `end`, both included.
///
/// The last value is `end` exactly. `n` of 0 or 1 yields an empty slice or
/// just `start`; callers that need a polyline validate `n >= 2` first.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = n - 1;
            let step = (end - start) / last as f64;
            (0..n)
                .map(|i| {
                    if i == last {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// Linear interpolation between two points at parameter `t`.
#[must_use]
pub fn lerp(a: &Point3, b: &Point3, t: f64) -> Point3 {
    a + (b - a) * t
}
