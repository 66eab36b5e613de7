use thiserror::Error;

use crate::math::IntPoint;

/// Top-level error type for the geoclip engine.
#[derive(Debug, Error)]
pub enum GeoclipError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to input geometry.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("coordinate {value} is outside the supported range [-{max}, {max}]")]
    CoordinateOutOfRange { value: i64, max: i64 },

    #[error("scaled coordinate {value} cannot be represented as an integer coordinate")]
    Unrepresentable { value: f64 },
}

/// Errors related to clipping operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OperationError {
    #[error("noding did not converge after {iterations} snap-rounding passes")]
    NodingFailed { iterations: usize },

    #[error("result boundary is not closed at ({}, {})", .at.x, .at.y)]
    OpenBoundary { at: IntPoint },
}

/// Errors produced while reading coordinate text or option names.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("number `{text}` at byte {offset} is outside the supported coordinate range")]
    NumberOutOfRange { text: String, offset: usize },

    #[error("unknown {kind} `{name}`")]
    UnknownName { kind: &'static str, name: String },
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),

    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`GeoclipError`].
pub type Result<T> = std::result::Result<T, GeoclipError>;
