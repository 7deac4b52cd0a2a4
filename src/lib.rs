//! Spherical geometry for drawing the globe under different map projections.
//!
//! The crate converts between Cartesian points on the unit sphere and
//! longitude/latitude, rotates template shapes about the polar and
//! equatorial axes, samples curves into polylines, and builds graticules.
//! Rendering and full projection libraries are left to the caller, who
//! plugs projections in through [`projection::Projection`].

pub mod error;
pub mod figure;
pub mod geometry;
pub mod graticule;
pub mod math;
pub mod projection;
pub mod sampling;
pub mod style;

pub use error::{GraticuleError, Result};
