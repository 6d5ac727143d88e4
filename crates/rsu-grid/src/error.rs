//! Error types for rsu-grid.

use thiserror::Error;

/// Errors raised while loading trajectory data.
///
/// Model construction itself never fails; see
/// [`GridModel::load_or_empty`](crate::GridModel::load_or_empty) for the
/// fail-soft entry point.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("trace parse error: {0}")]
    Parse(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
