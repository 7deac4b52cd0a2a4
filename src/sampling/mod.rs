//! Turning continuous curves on the sphere into ordered polylines.
//!
//! Every sampler takes an explicit sample count `N` and places samples at
//! evenly spaced parameter values, start first and end last. Fidelity is
//! controlled by `N` alone.

mod chord_line;
mod geographic_line;
mod projected_line;
mod small_circle;

pub use chord_line::SampleChordLine;
pub use geographic_line::SampleGeographicLine;
pub use projected_line::SampleProjectedLine;
pub use small_circle::SampleSmallCircle;

use crate::error::{Result, SamplingError};

/// Parameters shared by the curve samplers.
#[derive(Debug, Clone, Copy)]
pub struct SamplingParams {
    /// Number of points per curve, endpoints included.
    pub samples: usize,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self { samples: 64 }
    }
}

/// Rejects sample counts that cannot form a polyline.
pub(crate) fn validate_samples(samples: usize) -> Result<()> {
    if samples < 2 {
        return Err(SamplingError::InvalidParameters(format!(
            "at least 2 samples are needed for a polyline, got {samples}"
        ))
        .into());
    }
    Ok(())
}
