use tracing::debug;

use crate::error::Result;
use crate::graticule::reference_markers;
use crate::math::{Axis, Rotation};
use crate::projection::Projection;
use crate::sampling::SampleSmallCircle;
use crate::style::{MarkerStyle, StrokeStyle};

use super::{LineComparison, LineComparisonParams, MarkerSet, StyledPolyline};

/// Size, density and placement of the equal-size circles.
#[derive(Debug, Clone, Copy)]
pub struct CircleFigureParams {
    /// Template half-width `w = tan(angular radius)`.
    pub half_width: f64,
    /// Number of points along each circle.
    pub samples: usize,
    /// Stroke width of the circle outlines.
    pub line_width: f64,
    /// Angle between neighbouring circle centres, in degrees.
    pub spacing_deg: f64,
}

impl Default for CircleFigureParams {
    fn default() -> Self {
        Self {
            half_width: 0.23,
            samples: 32,
            line_width: 3.0,
            spacing_deg: 60.0,
        }
    }
}

/// Seven congruent small circles plus the straight-line comparison.
///
/// One circle sits at (0, 0). Two are tilted north and south about the
/// equatorial axis and four are turned east and west about the polar axis,
/// one and two spacings away. Under a projection their outlines show how
/// much each region is stretched.
#[derive(Debug, Clone)]
pub struct CircleFigure {
    /// One closed outline per placement, in [`CircleFigure::placements`] order.
    pub circles: Vec<StyledPolyline>,
    /// White dots at the antimeridian and near the poles.
    pub reference_markers: MarkerSet,
    /// Straight-line comparison drawn over the circles.
    pub lines: LineComparison,
}

impl CircleFigure {
    /// Rotations that place each circle, in drawing order.
    #[must_use]
    pub fn placements(spacing_deg: f64) -> Vec<Rotation> {
        vec![
            Rotation::identity(),
            Rotation::about(Axis::Equatorial, spacing_deg),
            Rotation::about(Axis::Equatorial, -spacing_deg),
            Rotation::about(Axis::Polar, spacing_deg),
            Rotation::about(Axis::Polar, -spacing_deg),
            Rotation::about(Axis::Polar, -2.0 * spacing_deg),
            Rotation::about(Axis::Polar, 2.0 * spacing_deg),
        ]
    }

    /// Builds the figure geometry.
    ///
    /// `projection` is the plane in which the comparison's projected line
    /// is straight.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is invalid.
    pub fn build(
        params: &CircleFigureParams,
        lines: &LineComparisonParams,
        projection: &dyn Projection,
    ) -> Result<Self> {
        let style = StrokeStyle::new(params.line_width)?;
        let circles = Self::placements(params.spacing_deg)
            .into_iter()
            .map(|rotation| -> Result<StyledPolyline> {
                let line =
                    SampleSmallCircle::from_half_width(params.half_width, rotation, params.samples)
                        .execute()?;
                Ok(StyledPolyline {
                    line,
                    style: style.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(
            circles = circles.len(),
            samples = params.samples,
            "sampled circle figure"
        );

        Ok(Self {
            circles,
            reference_markers: MarkerSet {
                points: reference_markers(),
                style: MarkerStyle::new(1.0)?.with_color("white"),
            },
            lines: LineComparison::build(lines, projection)?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::{cartesian_to_geographic, Point3};
    use crate::projection::Mercator;

    fn centre(r: &Rotation) -> (f64, f64) {
        let g = cartesian_to_geographic(&r.apply(&Point3::new(1.0, 0.0, 0.0))).unwrap();
        (g.lon, g.lat)
    }

    #[test]
    fn placements_match_layout() {
        let expected = [
            (0.0, 0.0),
            (0.0, 60.0),
            (0.0, -60.0),
            (60.0, 0.0),
            (-60.0, 0.0),
            (-120.0, 0.0),
            (120.0, 0.0),
        ];
        for (r, (lon, lat)) in CircleFigure::placements(60.0).iter().zip(expected) {
            let (clon, clat) = centre(r);
            assert_abs_diff_eq!(clon, lon, epsilon = 1e-9);
            assert_abs_diff_eq!(clat, lat, epsilon = 1e-9);
        }
    }

    #[test]
    fn default_figure() {
        let f = CircleFigure::build(
            &CircleFigureParams::default(),
            &LineComparisonParams::default(),
            &Mercator::default(),
        )
        .unwrap();
        assert_eq!(f.circles.len(), 7);
        assert!(f.circles.iter().all(|c| c.line.len() == 32));
        assert!(f
            .circles
            .iter()
            .all(|c| (c.style.width() - 3.0).abs() < f64::EPSILON));
        assert_eq!(f.reference_markers.points.len(), 4);
        assert_eq!(f.reference_markers.style.color(), Some("white"));
    }

    #[test]
    fn invalid_half_width_fails() {
        let params = CircleFigureParams {
            half_width: -0.1,
            ..CircleFigureParams::default()
        };
        let r = CircleFigure::build(
            &params,
            &LineComparisonParams::default(),
            &Mercator::default(),
        );
        assert!(r.is_err());
    }
}
