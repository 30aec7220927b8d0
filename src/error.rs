//! Error types for financial calculations
//!
//! Every fallible function in this crate returns [`FinError`] through the
//! crate-local [`Result`] alias. Variants carry the detail needed to report
//! the failure; [`FinError::kind`] collapses them into the three broad
//! categories callers usually branch on.

use thiserror::Error;

/// Error type for all financial calculations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FinError {
    /// An input violated its documented domain (negative period, rate below
    /// -100%, empty or single-signed cash-flow sequence, ...)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The discount base `(1 + r)^t` evaluated to exactly zero at some period
    /// during IRR iteration, so the per-period division cannot proceed
    #[error("zero discount denominator at period {period}; try a different guess")]
    ZeroDenominator {
        /// Period index at which the denominator vanished
        period: usize,
    },

    /// The NPV derivative was exactly zero at the current estimate, so no
    /// Newton step can be taken
    #[error("NPV derivative is zero at rate {rate}; cannot take a Newton step")]
    ZeroDerivative {
        /// Rate estimate at which the derivative vanished
        rate: f64,
    },

    /// IRR iteration exhausted its iteration budget without meeting tolerance
    #[error("IRR did not converge within {max_iterations} iterations")]
    NonConvergence {
        /// The iteration budget that was exhausted
        max_iterations: u32,
    },
}

/// Broad failure categories, for callers that branch on the cause of failure
/// rather than its exact detail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input outside its documented domain
    InvalidArgument,
    /// Zero denominator or zero derivative mid-computation
    NumericDegeneracy,
    /// Iteration budget exhausted
    NonConvergence,
}

impl FinError {
    /// Categorize this error into one of the three broad kinds
    pub fn kind(&self) -> ErrorKind {
        match self {
            FinError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            FinError::ZeroDenominator { .. } | FinError::ZeroDerivative { .. } => {
                ErrorKind::NumericDegeneracy
            }
            FinError::NonConvergence { .. } => ErrorKind::NonConvergence,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T, E = FinError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let e = FinError::InvalidArgument("periods".into());
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);

        let e = FinError::ZeroDenominator { period: 3 };
        assert_eq!(e.kind(), ErrorKind::NumericDegeneracy);

        let e = FinError::ZeroDerivative { rate: 0.1 };
        assert_eq!(e.kind(), ErrorKind::NumericDegeneracy);

        let e = FinError::NonConvergence { max_iterations: 1000 };
        assert_eq!(e.kind(), ErrorKind::NonConvergence);
    }

    #[test]
    fn test_display_messages() {
        let e = FinError::NonConvergence { max_iterations: 50 };
        assert_eq!(e.to_string(), "IRR did not converge within 50 iterations");

        let e = FinError::ZeroDenominator { period: 2 };
        assert!(e.to_string().contains("period 2"));
    }
}
