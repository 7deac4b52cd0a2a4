use thiserror::Error;

/// Top-level error type for the graticule crate.
#[derive(Debug, Error)]
pub enum GraticuleError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

/// Errors related to coordinate conversions on the sphere.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range ({min}, {max})")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("zero-length vector has no direction on the sphere")]
    ZeroVector,
}

/// Errors related to curve sampling and grid parameters.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("invalid sampling parameters: {0}")]
    InvalidParameters(String),
}

/// Errors raised by a projection's forward transform.
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("{projection} cannot project lon={lon}, lat={lat}")]
    OutOfDomain {
        projection: &'static str,
        lon: f64,
        lat: f64,
    },
}

/// Convenience type alias for results using [`GraticuleError`].
pub type Result<T> = std::result::Result<T, GraticuleError>;
