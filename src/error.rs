//! Errors returned by the affinity pipeline and the factorization.
//!
//! Allocation failures, shape problems and non finite arithmetic are distinguished
//! so that the caller can decide what to do. No error is retried internally.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SymNmfError {
    /// allocation of a (rows, cols) matrix failed
    #[error("out of memory allocating a ({rows}, {cols}) matrix")]
    OutOfMemory { rows: usize, cols: usize },

    /// shapes incompatible with the requested operation, or dataset too small
    #[error("invalid dimensions : {0}")]
    InvalidDimensions(String),

    /// a row (a point, a matrix row) has not the expected length
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// a division produced NaN or Inf
    #[error("non finite result in {stage} at ({row}, {col})")]
    NonFiniteResult {
        stage: &'static str,
        row: usize,
        col: usize,
    },

    /// a parameter is out of its domain
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        name: &'static str,
        message: String,
    },
} // end of SymNmfError

/// Result type used by the core of this crate.
pub type Result<T> = std::result::Result<T, SymNmfError>;

impl SymNmfError {
    pub(crate) fn invalid_dims<S: Into<String>>(msg: S) -> Self {
        SymNmfError::InvalidDimensions(msg.into())
    }

    pub(crate) fn invalid_param<S: Into<String>>(name: &'static str, msg: S) -> Self {
        SymNmfError::InvalidParameter {
            name,
            message: msg.into(),
        }
    }
} // end of impl SymNmfError
