//! Single-axis rotations used to move template curves around the sphere.
//!
//! Angles are in degrees. A positive polar rotation moves points east; a
//! positive equatorial rotation tilts `(1, 0, 0)` towards the north pole.

use super::Point3;

/// Rotates a point about the polar (Z) axis, leaving `z` unchanged.
#[must_use]
pub fn rotate_about_polar_axis(point: &Point3, angle_deg: f64) -> Point3 {
    let (s, c) = angle_deg.to_radians().sin_cos();
    Point3::new(c * point.x - s * point.y, c * point.y + s * point.x, point.z)
}

/// Rotates a point about the equatorial (Y) axis, leaving `y` unchanged.
#[must_use]
pub fn rotate_about_equatorial_axis(point: &Point3, angle_deg: f64) -> Point3 {
    let (s, c) = angle_deg.to_radians().sin_cos();
    Point3::new(c * point.x - s * point.z, point.y, c * point.z + s * point.x)
}

/// Rotation axis of a single [`Rotation`] step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The Z axis through both poles.
    Polar,
    /// The Y axis, through (lon 90, lat 0).
    Equatorial,
}

impl Axis {
    /// Rotates `point` about this axis.
    #[must_use]
    pub fn rotate(self, point: &Point3, angle_deg: f64) -> Point3 {
        match self {
            Axis::Polar => rotate_about_polar_axis(point, angle_deg),
            Axis::Equatorial => rotate_about_equatorial_axis(point, angle_deg),
        }
    }
}

/// An ordered composition of single-axis rotations in the fixed world frame.
///
/// Steps are applied in insertion order: in
/// `Rotation::about(Axis::Equatorial, 30.0).then(Axis::Polar, 90.0)` the
/// tilt acts first. Rotations about different axes do not commute, so the
/// order is preserved exactly as given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rotation {
    steps: Vec<(Axis, f64)>,
}

impl Rotation {
    /// The identity rotation.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// A single rotation about `axis`.
    #[must_use]
    pub fn about(axis: Axis, angle_deg: f64) -> Self {
        Self {
            steps: vec![(axis, angle_deg)],
        }
    }

    /// Appends a step that is applied after the existing ones.
    #[must_use]
    pub fn then(mut self, axis: Axis, angle_deg: f64) -> Self {
        self.steps.push((axis, angle_deg));
        self
    }

    /// The rotation that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            steps: self
                .steps
                .iter()
                .rev()
                .map(|&(axis, angle)| (axis, -angle))
                .collect(),
        }
    }

    /// The steps in application order.
    #[must_use]
    pub fn steps(&self) -> &[(Axis, f64)] {
        &self.steps
    }

    /// Applies every step to `point` in order.
    #[must_use]
    pub fn apply(&self, point: &Point3) -> Point3 {
        self.steps
            .iter()
            .fold(*point, |p, &(axis, angle)| axis.rotate(&p, angle))
    }
}
