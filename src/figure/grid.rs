use tracing::debug;

use crate::error::Result;
use crate::geometry::Polyline;
use crate::graticule::{BuildGraticule, GridSpec};
use crate::style::{LineDash, MarkerStyle, StrokeStyle};

use super::{MarkerSet, StyledPolyline};

/// A dashed graticule with red node dots and white reference dots.
#[derive(Debug, Clone)]
pub struct GridFigure {
    /// Dashed meridians, west to east.
    pub meridians: Vec<StyledPolyline>,
    /// Dashed parallels, south to north.
    pub parallels: Vec<StyledPolyline>,
    /// Red dots at every meridian/parallel crossing.
    pub nodes: MarkerSet,
    /// White dots at the antimeridian and near the poles.
    pub reference_markers: MarkerSet,
}

impl GridFigure {
    /// Builds the grid figure geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid spec or the line width is invalid.
    pub fn build(spec: GridSpec, line_width: f64) -> Result<Self> {
        let graticule = BuildGraticule::new(spec).execute()?;
        let line_style = StrokeStyle::new(line_width)?
            .with_dash(LineDash::Dashed)
            .with_color("black");
        let styled = |lines: Vec<Polyline>| -> Vec<StyledPolyline> {
            lines
                .into_iter()
                .map(|line| StyledPolyline {
                    line,
                    style: line_style.clone(),
                })
                .collect()
        };

        let figure = Self {
            meridians: styled(graticule.meridians),
            parallels: styled(graticule.parallels),
            nodes: MarkerSet {
                points: graticule.nodes,
                style: MarkerStyle::new(1.0)?.with_color("red"),
            },
            reference_markers: MarkerSet {
                points: graticule.reference_markers,
                style: MarkerStyle::new(1.0)?.with_color("white"),
            },
        };
        debug!(
            lon_spacing = spec.lon_spacing,
            lat_spacing = spec.lat_spacing,
            "assembled grid figure"
        );
        Ok(figure)
    }
}
