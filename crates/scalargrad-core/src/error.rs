//! Error taxonomy for the operator library.
//!
//! Two failure classes only: a logarithm outside its domain, and a
//! division by zero. Every error carries the operator name and the
//! offending input so the failure is diagnosable at the call site.
//! These are leaf pure functions; callers decide whether to recover.

use thiserror::Error;

/// Canonical result for the operator library.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("domain error in `{op}`: input {input} is outside the function's domain")]
    Domain { op: &'static str, input: f64 },

    #[error("division by zero in `{op}`: input {input}")]
    DivisionByZero { op: &'static str, input: f64 },
}

impl Error {
    /// Construct a domain error, emitting a trace event when enabled.
    pub fn domain(op: &'static str, input: f64) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(op, input, "domain error");
        Error::Domain { op, input }
    }

    /// Construct a division-by-zero error, emitting a trace event when enabled.
    pub fn division_by_zero(op: &'static str, input: f64) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(op, input, "division by zero");
        Error::DivisionByZero { op, input }
    }

    /// Name of the operator that failed.
    pub fn op(&self) -> &'static str {
        match self {
            Error::Domain { op, .. } => op,
            Error::DivisionByZero { op, .. } => op,
        }
    }

    /// The input that triggered the failure.
    pub fn input(&self) -> f64 {
        match self {
            Error::Domain { input, .. } => *input,
            Error::DivisionByZero { input, .. } => *input,
        }
    }
}
