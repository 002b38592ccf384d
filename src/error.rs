//! Error types for regularization configuration.

use crate::strategy::RegularizationKind;
use thiserror::Error;

/// Errors raised while configuring a regularization.
///
/// The penalties themselves never fail, hyperparameters are checked once when a
/// [`Regularization`](crate::Regularization) is built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegularizationError {
    /// A regularization strength is below zero.
    #[error("{name} must be non-negative, got {value}")]
    NegativeLambda {
        /// Name of the offending parameter.
        name: &'static str,
        /// Value that was supplied.
        value: f64,
    },

    /// A regularization strength is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFiniteLambda {
        /// Name of the offending parameter.
        name: &'static str,
        /// Value that was supplied.
        value: f64,
    },

    /// The stepsize is not a finite positive number.
    #[error("stepsize must be finite and positive, got {value}")]
    InvalidStepsize {
        /// Value that was supplied.
        value: f64,
    },

    /// The regularization kind could not be parsed.
    #[error("unknown regularization kind: {0}")]
    UnknownKind(String),

    /// A parameter required by the selected kind is absent.
    #[error("missing parameter `{name}` for {kind} regularization")]
    MissingParameter {
        /// Name of the missing parameter.
        name: &'static str,
        /// Kind that requires it.
        kind: RegularizationKind,
    },
}

/// Result type for regularization configuration.
pub type Result<T> = std::result::Result<T, RegularizationError>;
