//! Error taxonomy shared by the objective and both search drivers.
//!
//! Every validation failure is reported before the first objective evaluation.

/// Errors raised while scoring or fitting a model.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    /// A parameter vector does not match the arity declared by the model.
    #[error("model declares {expected} parameters but {found} were supplied")]
    ArityMismatch { expected: usize, found: usize },

    /// Malformed search settings (distances, deviation, iteration count, or a
    /// parameter count too large for exhaustive grid rounds).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Every candidate evaluated to NaN or infinity, so no meaningful best exists.
    ///
    /// `step` is the zero-based grid round that failed, or the number of
    /// iterations a random search ran without finding a finite error.
    #[error("objective is not finite for any candidate (step {step})")]
    NumericDegenerate { step: usize },

    /// There are no observations to fit.
    #[error("no data points to fit")]
    EmptyDataset,
}

impl FitError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FitError>;
