//! Error types for rsu-place.

use thiserror::Error;

use rsu_core::CoreError;
use rsu_eval::EvalError;
use rsu_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum PlaceError {
    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),

    #[error("configuration error: {0}")]
    Core(#[from] CoreError),
}

pub type PlaceResult<T> = Result<T, PlaceError>;
