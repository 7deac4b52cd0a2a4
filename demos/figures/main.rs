//! Builds the geometry of both projection comparison figures and logs a
//! summary of what a renderer would receive.
//!
//! Usage:
//! ```text
//! cargo run --example figures
//! RUST_LOG=graticule=trace cargo run --example figures
//! ```

use graticule::figure::{
    CircleFigure, CircleFigureParams, GridFigure, LineComparisonParams, StyledPolyline,
};
use graticule::graticule::GridSpec;
use graticule::projection::{Mercator, PlateCarree, Projection};
use graticule::Result;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for this demo and the crate.
    // Override with RUST_LOG env var (e.g. RUST_LOG=graticule=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("figures=info".parse().unwrap_or_default())
        .add_directive("graticule=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mercator = Mercator::default();
    let projections: [&dyn Projection; 2] = [&PlateCarree::default(), &mercator];

    let grid = GridFigure::build(GridSpec::default(), 1.0)?;
    info!(
        meridians = grid.meridians.len(),
        parallels = grid.parallels.len(),
        nodes = grid.nodes.points.len(),
        "grid figure"
    );

    let circles = CircleFigure::build(
        &CircleFigureParams::default(),
        &LineComparisonParams::default(),
        &mercator,
    )?;
    info!(circles = circles.circles.len(), "circle figure");

    for projection in projections {
        let lines: Vec<&StyledPolyline> = grid
            .meridians
            .iter()
            .chain(&grid.parallels)
            .chain(&circles.circles)
            .chain([&circles.lines.geographic, &circles.lines.chord])
            .collect();
        let mut vertices = 0;
        for styled in lines {
            match styled.line.project(projection) {
                Ok(plane) => vertices += plane.len(),
                Err(err) => warn!(projection = projection.name(), %err, "skipped polyline"),
            }
        }
        info!(projection = projection.name(), vertices, "projected figure geometry");
    }

    info!(
        projection = circles.lines.projected.projection,
        vertices = circles.lines.projected.line.len(),
        "pre-projected straight line"
    );
    Ok(())
}
