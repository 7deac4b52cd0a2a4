use tracing::debug;

use crate::error::Result;
use crate::geometry::GeoPoint;
use crate::projection::Projection;
use crate::sampling::{SampleChordLine, SampleGeographicLine, SampleProjectedLine, SamplingParams};
use crate::style::{LineDash, StrokeStyle};

use super::{StyledPlanePolyline, StyledPolyline};

/// Endpoints and style of the straight-line comparison.
#[derive(Debug, Clone, Copy)]
pub struct LineComparisonParams {
    /// First endpoint shared by all three lines.
    pub start: GeoPoint,
    /// Second endpoint shared by all three lines.
    pub end: GeoPoint,
    /// Number of points along each line.
    pub samples: usize,
    /// Stroke width of every line.
    pub line_width: f64,
    /// Dash pattern of every line.
    pub dash: LineDash,
}

impl Default for LineComparisonParams {
    fn default() -> Self {
        Self {
            start: GeoPoint::new(-70.0, -70.0),
            end: GeoPoint::new(70.0, 70.0),
            samples: SamplingParams::default().samples,
            line_width: 2.0,
            dash: LineDash::Dashed,
        }
    }
}

/// Three readings of "the straight line" between the same two points.
#[derive(Debug, Clone)]
pub struct LineComparison {
    /// Straight in longitude/latitude.
    pub geographic: StyledPolyline,
    /// Straight in the given projection's plane; already projected.
    pub projected: StyledPlanePolyline,
    /// Straight through the globe's interior.
    pub chord: StyledPolyline,
}

impl LineComparison {
    /// Samples all three lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, an endpoint is
    /// outside `projection`'s domain, or the endpoints are antipodal.
    pub fn build(params: &LineComparisonParams, projection: &dyn Projection) -> Result<Self> {
        let style = StrokeStyle::new(params.line_width)?.with_dash(params.dash);
        let geographic =
            SampleGeographicLine::new(params.start, params.end, params.samples).execute()?;
        let projected =
            SampleProjectedLine::new(params.start, params.end, params.samples, projection)
                .execute()?;
        let chord = SampleChordLine::new(params.start, params.end, params.samples).execute()?;
        debug!(
            projection = projection.name(),
            samples = params.samples,
            "sampled line comparison"
        );
        Ok(Self {
            geographic: StyledPolyline {
                line: geographic,
                style: style.clone(),
            },
            projected: StyledPlanePolyline {
                line: projected,
                style: style.clone(),
                projection: projection.name(),
            },
            chord: StyledPolyline { line: chord, style },
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::projection::Mercator;

    #[test]
    fn three_lines_share_endpoints() {
        let m = Mercator::default();
        let params = LineComparisonParams::default();
        let c = LineComparison::build(&params, &m).unwrap();
        assert_eq!(c.geographic.line.len(), 64);
        assert_eq!(c.projected.line.len(), 64);
        assert_eq!(c.chord.line.len(), 64);
        assert_eq!(c.projected.projection, "Mercator");

        let end = m.unproject(c.projected.line.points.last().unwrap());
        assert_abs_diff_eq!(end.lon, 70.0, epsilon = 1e-9);
        assert_abs_diff_eq!(end.lat, 70.0, epsilon = 1e-9);
        let chord_end = c.chord.line.last().unwrap();
        assert_abs_diff_eq!(chord_end.lat, 70.0, epsilon = 1e-9);
        assert_eq!(c.chord.style.dash(), LineDash::Dashed);
    }

    #[test]
    fn lines_differ_in_the_middle() {
        let m = Mercator::default();
        let c = LineComparison::build(&LineComparisonParams::default(), &m).unwrap();
        let g = c.geographic.line.points[16];
        let p = m.unproject(&c.projected.line.points[16]);
        let h = c.chord.line.points[16];
        assert!((g.lat - p.lat).abs() > 1.0);
        assert!((g.lat - h.lat).abs() > 1.0);
    }
}
