//! Simple and compound interest accrual

use crate::error::{FinError, Result};

/// Simple interest earned on a principal.
///
/// `I = principal * rate * time_years`
///
/// Interest accrues on the principal only, never on previously earned
/// interest. Returns the interest portion alone.
///
/// # Errors
/// `InvalidArgument` if principal, rate, or time is negative.
pub fn simple_interest(principal: f64, rate: f64, time_years: f64) -> Result<f64> {
    if principal < 0.0 || rate < 0.0 || time_years < 0.0 {
        return Err(FinError::InvalidArgument(format!(
            "principal, rate, and time must be non-negative, got principal={}, rate={}, time={}",
            principal, rate, time_years
        )));
    }
    Ok(principal * rate * time_years)
}

/// Total accumulated amount under periodic compounding.
///
/// `A = principal * (1 + rate / frequency)^(frequency * time_years)`
///
/// `frequency` is the number of compounding periods per year (1 = annual,
/// 12 = monthly). Returns the full accumulated amount, principal included;
/// subtract the principal to get the interest portion.
///
/// # Errors
/// `InvalidArgument` if principal, rate, or time is negative, or if
/// `frequency` is zero.
pub fn compound_interest(
    principal: f64,
    rate: f64,
    frequency: u32,
    time_years: f64,
) -> Result<f64> {
    if principal < 0.0 || rate < 0.0 || time_years < 0.0 {
        return Err(FinError::InvalidArgument(format!(
            "principal, rate, and time must be non-negative, got principal={}, rate={}, time={}",
            principal, rate, time_years
        )));
    }
    if frequency == 0 {
        return Err(FinError::InvalidArgument(
            "compounding frequency must be at least 1 per year".into(),
        ));
    }

    let f = frequency as f64;
    Ok(principal * (1.0 + rate / f).powf(f * time_years))
}
