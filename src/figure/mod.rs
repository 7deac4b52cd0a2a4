//! Geometry of the projection comparison figures, bundled with style hints.
//!
//! Nothing here draws. Each figure collects the polylines and markers a
//! renderer needs, in projection-agnostic form unless stated otherwise.

mod circles;
mod grid;
mod lines;

pub use circles::{CircleFigure, CircleFigureParams};
pub use grid::GridFigure;
pub use lines::{LineComparison, LineComparisonParams};

use crate::geometry::{GeoPoint, PlanePolyline, Polyline};
use crate::style::{MarkerStyle, StrokeStyle};

/// A geographic polyline and how to draw it.
#[derive(Debug, Clone)]
pub struct StyledPolyline {
    /// Points in longitude/latitude.
    pub line: Polyline,
    /// Stroke to draw the line with.
    pub style: StrokeStyle,
}

/// An already-projected polyline and how to draw it.
#[derive(Debug, Clone)]
pub struct StyledPlanePolyline {
    /// Points in projection-plane coordinates.
    pub line: PlanePolyline,
    /// Stroke to draw the line with.
    pub style: StrokeStyle,
    /// Name of the projection whose plane the points are in.
    pub projection: &'static str,
}

/// Point markers sharing one style.
#[derive(Debug, Clone)]
pub struct MarkerSet {
    /// Marker positions in longitude/latitude.
    pub points: Vec<GeoPoint>,
    /// Dot size and colour shared by every marker.
    pub style: MarkerStyle,
}
