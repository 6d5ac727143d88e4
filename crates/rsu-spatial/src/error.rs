//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `rsu-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("no junctions available to snap to")]
    NoJunctionsAvailable,

    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("junction parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
