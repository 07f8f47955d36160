use std::{error, fmt};

/// Errors raised by the transforms and the benchmark harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DftError {
    /// Input length does not match the length the handler was built for.
    SizeMismatch {
        /// Length the handler expects
        expected: usize,
        /// Length of the array that was passed in
        got: usize,
    },
    /// Argument passed into a function was invalid.
    InvalidArg {
        /// The invalid arg
        arg: String,
        /// Explaining why arg is invalid.
        reason: String,
    },
    /// A worker of the parallel transform panicked; no spectrum was produced.
    WorkerPanicked {
        /// Panic message of the worker, if it carried one.
        reason: String,
    },
}

impl DftError {
    pub(crate) fn invalid_arg(arg: &str, reason: &str) -> Self {
        DftError::InvalidArg {
            arg: arg.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for DftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DftError::SizeMismatch { expected, got } => {
                write!(f, "Size mismatch in dft, got {got} expected {expected}")
            }
            DftError::InvalidArg { arg, reason } => {
                write!(f, "Invalid argument `{arg}`: {reason}")
            }
            DftError::WorkerPanicked { reason } => {
                write!(f, "Parallel dft worker panicked: {reason}")
            }
        }
    }
}

impl error::Error for DftError {}
