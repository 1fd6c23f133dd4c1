//! Equation-model errors.

use bf_core::BfError;
use thiserror::Error;

/// Result type for equation-model evaluations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Numerical failures signalled by the model.
///
/// None of these are recovered from inside the model. The host decides
/// whether to abort, shrink the time step or reject the state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Cross-sectional area (or a quantity derived from it) left its valid range.
    #[error("Invalid state: {what} = {value}")]
    InvalidState { what: &'static str, value: f64 },

    /// Prescribed pressure lies at or below the collapse pressure of the wall law.
    #[error("No admissible area for pressure {pressure} (collapse pressure {collapse})")]
    NoInverse { pressure: f64, collapse: f64 },

    /// Material parameter outside the range the closure is defined on.
    #[error("Non-positive parameter: {what} = {value}")]
    NonPositiveParameter { what: &'static str, value: f64 },

    /// NaN or infinity in an input.
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Batch inputs of different lengths.
    #[error("Length mismatch: {states} states, {positions} positions")]
    LengthMismatch { states: usize, positions: usize },
}

impl From<ModelError> for BfError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::InvalidState { what, .. } => BfError::Invariant { what },
            ModelError::NoInverse { .. } => BfError::InvalidArg {
                what: "pressure below collapse pressure",
            },
            ModelError::NonPositiveParameter { what, value } => {
                BfError::NonPositive { what, value }
            }
            ModelError::NonFinite { what, value } => BfError::NonFinite { what, value },
            ModelError::LengthMismatch { .. } => BfError::InvalidArg {
                what: "batch length mismatch",
            },
        }
    }
}
