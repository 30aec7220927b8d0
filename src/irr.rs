//! Internal Rate of Return via Newton-Raphson iteration
//!
//! The IRR of a cash-flow sequence is the rate `r` at which the sequence's
//! net present value is zero. Newton-Raphson converges quadratically near a
//! well-behaved root, but can diverge or oscillate for sequences with
//! multiple sign changes or a poor starting guess; this implementation
//! reports that as a [`NonConvergence`](crate::FinError::NonConvergence)
//! error rather than falling back to a slower bracketing method.

use serde::{Deserialize, Serialize};

use crate::error::{FinError, Result};

/// Default starting estimate for the Newton iteration (10%)
pub const DEFAULT_GUESS: f64 = 0.1;
/// Default convergence tolerance on |NPV|
pub const DEFAULT_TOLERANCE: f64 = 1e-6;
/// Default iteration budget
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// Stopping policy and starting point for the IRR root-finder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrrConfig {
    /// Initial rate estimate
    pub guess: f64,
    /// Convergence threshold: iteration succeeds once `|NPV(r)| < tolerance`
    pub tolerance: f64,
    /// Hard bound on the number of Newton steps
    pub max_iterations: u32,
}

impl Default for IrrConfig {
    fn default() -> Self {
        Self {
            guess: DEFAULT_GUESS,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Internal rate of return of a cash-flow sequence, using default iteration
/// parameters ([`IrrConfig::default`]).
///
/// See [`internal_rate_of_return_with`] for the full contract.
pub fn internal_rate_of_return(cash_flows: &[f64]) -> Result<f64> {
    internal_rate_of_return_with(cash_flows, IrrConfig::default())
}

/// Internal rate of return of a cash-flow sequence with explicit iteration
/// parameters.
///
/// Finds `r` such that `Σ cash_flows[t] / (1 + r)^t = 0` by Newton-Raphson
/// iteration starting from `config.guess`. Returns the first estimate whose
/// NPV magnitude falls below `config.tolerance`.
///
/// # Errors
/// - `InvalidArgument`: empty sequence, sequence without both a strictly
///   positive and a strictly negative entry, non-positive tolerance, or a
///   zero iteration budget. The sign-change requirement is a safety check
///   rather than an existence proof; a real root generally requires it.
/// - `ZeroDenominator`: the discount base `(1 + r)^t` collapsed to exactly
///   zero mid-iteration (the estimate landed on -100%, or underflowed).
/// - `ZeroDerivative`: the NPV derivative vanished at the current estimate,
///   leaving no Newton step to take.
/// - `NonConvergence`: the iteration budget ran out before the tolerance was
///   met.
pub fn internal_rate_of_return_with(cash_flows: &[f64], config: IrrConfig) -> Result<f64> {
    if cash_flows.is_empty() {
        return Err(FinError::InvalidArgument(
            "cash-flow sequence must not be empty".into(),
        ));
    }

    let has_negative = cash_flows.iter().any(|&cf| cf < 0.0);
    let has_positive = cash_flows.iter().any(|&cf| cf > 0.0);
    if !has_negative || !has_positive {
        return Err(FinError::InvalidArgument(
            "cash-flow sequence needs at least one negative and one positive entry".into(),
        ));
    }

    if !(config.tolerance > 0.0) {
        return Err(FinError::InvalidArgument(format!(
            "tolerance must be positive, got {}",
            config.tolerance
        )));
    }
    if config.max_iterations == 0 {
        return Err(FinError::InvalidArgument(
            "max_iterations must be at least 1".into(),
        ));
    }

    let mut rate = config.guess;
    for _ in 0..config.max_iterations {
        let (npv, dnpv) = npv_and_derivative(cash_flows, rate)?;

        // Sole success exit
        if npv.abs() < config.tolerance {
            return Ok(rate);
        }

        if dnpv == 0.0 {
            return Err(FinError::ZeroDerivative { rate });
        }

        rate -= npv / dnpv;
    }

    Err(FinError::NonConvergence {
        max_iterations: config.max_iterations,
    })
}

/// NPV and its derivative with respect to the rate, in one pass.
///
/// The value term discounts at exponent `t`, the derivative term at `t + 1`:
/// `d/dr [cf / (1+r)^t] = -t * cf / (1+r)^(t+1)`. The `t = 0` derivative
/// term is identically zero and is skipped.
fn npv_and_derivative(cash_flows: &[f64], rate: f64) -> Result<(f64, f64)> {
    let mut npv = 0.0;
    let mut dnpv = 0.0;

    for (t, &cf) in cash_flows.iter().enumerate() {
        let discount = (1.0 + rate).powi(t as i32);
        if discount == 0.0 {
            return Err(FinError::ZeroDenominator { period: t });
        }
        npv += cf / discount;
        if t > 0 {
            dnpv -= t as f64 * cf / (1.0 + rate).powi(t as i32 + 1);
        }
    }

    Ok((npv, dnpv))
}
