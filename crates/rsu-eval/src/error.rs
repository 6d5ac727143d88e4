//! Error types for rsu-eval.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The pipeline produced no output at all.  Individual stage failures
    /// are only logged; this is raised when nothing could be parsed.
    #[error("pipeline execution failed: {0}")]
    PipelineExecutionFailed(String),
}

pub type EvalResult<T> = Result<T, EvalError>;
