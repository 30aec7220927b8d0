//! Time value of money: future value, present value, net present value
//!
//! All three share the same discounting convention: a cash amount at period
//! `t` relates to its value today through the factor `(1 + rate)^t`, with
//! period 0 sitting at the valuation date (discount factor 1).

use crate::error::{FinError, Result};

/// Future value of a single cash amount after a whole number of periods.
///
/// `FV = present_value * (1 + rate)^periods`
///
/// `rate` may be negative (depreciation). Because `periods` is an integer
/// count, the power is well-defined for any real `rate`, including rates at
/// or below -100%: a rate of exactly -1.0 simply collapses the value to zero
/// after one period.
pub fn future_value(present_value: f64, rate: f64, periods: u32) -> f64 {
    present_value * (1.0 + rate).powi(periods as i32)
}

/// Present value of a single future cash amount.
///
/// `PV = future_value / (1 + rate)^periods`
///
/// # Errors
/// `InvalidArgument` if `rate <= -1.0`, since the discount base `(1 + rate)`
/// must stay positive.
pub fn present_value(future_value: f64, rate: f64, periods: u32) -> Result<f64> {
    if rate <= -1.0 {
        return Err(FinError::InvalidArgument(format!(
            "discount rate must be greater than -100%, got {}",
            rate
        )));
    }
    Ok(future_value / (1.0 + rate).powi(periods as i32))
}

/// Net present value of an ordered cash-flow sequence.
///
/// `NPV = Σ cash_flows[t] / (1 + rate)^t` for `t = 0, 1, 2, ...`
///
/// The flow at index 0 is the first term of the sum (discount factor 1), not
/// a special case: by convention it already sits at the valuation date. An
/// empty sequence is a valid degenerate input and yields 0.0.
///
/// # Errors
/// `InvalidArgument` if `rate <= -1.0`.
pub fn net_present_value(rate: f64, cash_flows: &[f64]) -> Result<f64> {
    if rate <= -1.0 {
        return Err(FinError::InvalidArgument(format!(
            "discount rate must be greater than -100%, got {}",
            rate
        )));
    }

    Ok(cash_flows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_future_value_growth() {
        // $1000 at 5% for 10 years
        let fv = future_value(1000.0, 0.05, 10);
        assert_relative_eq!(fv, 1628.894626777442, max_relative = 1e-12);
    }

    #[test]
    fn test_future_value_negative_rate() {
        // 10% annual depreciation halves-ish over 7 years
        let fv = future_value(1000.0, -0.10, 7);
        assert_relative_eq!(fv, 1000.0 * 0.9_f64.powi(7), max_relative = 1e-12);
    }

    #[test]
    fn test_present_value_discounting() {
        // $2000 in 5 years at 8%
        let pv = present_value(2000.0, 0.08, 5).unwrap();
        assert_relative_eq!(pv, 2000.0 / 1.08_f64.powi(5), max_relative = 1e-12);
    }

    #[test]
    fn test_zero_periods_identity() {
        assert_eq!(future_value(1234.56, 0.07, 0), 1234.56);
        assert_eq!(present_value(1234.56, 0.07, 0).unwrap(), 1234.56);
    }

    #[test]
    fn test_fv_pv_round_trip() {
        for &rate in &[-0.5, -0.01, 0.0, 0.05, 0.25, 1.5] {
            for &periods in &[0u32, 1, 7, 30] {
                let fv = future_value(1000.0, rate, periods);
                let back = present_value(fv, rate, periods).unwrap();
                assert_relative_eq!(back, 1000.0, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_present_value_rejects_rate_at_or_below_minus_one() {
        assert!(present_value(100.0, -1.0, 5).is_err());
        assert!(present_value(100.0, -1.5, 5).is_err());
    }

    #[test]
    fn test_npv_basic() {
        // Initial outflow then four inflows at 10%
        let flows = [-10000.0, 3000.0, 4000.0, 5000.0, 3000.0];
        let npv = net_present_value(0.10, &flows).unwrap();

        let expected: f64 = flows
            .iter()
            .enumerate()
            .map(|(t, &cf)| cf / 1.1_f64.powi(t as i32))
            .sum();
        assert_relative_eq!(npv, expected, max_relative = 1e-12);
        assert!(npv > 0.0); // This particular project is NPV-positive at 10%
    }

    #[test]
    fn test_npv_at_zero_rate_is_plain_sum() {
        let flows = [-500.0, 100.0, 200.0, 300.0];
        let npv = net_present_value(0.0, &flows).unwrap();
        assert_eq!(npv, flows.iter().sum::<f64>());
    }

    #[test]
    fn test_npv_first_flow_not_discounted() {
        // A single flow at t=0 is returned unchanged regardless of rate
        assert_eq!(net_present_value(0.35, &[-750.0]).unwrap(), -750.0);
    }

    #[test]
    fn test_npv_empty_sequence_is_zero() {
        assert_eq!(net_present_value(0.10, &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_npv_rejects_invalid_rate() {
        assert!(net_present_value(-1.0, &[-100.0, 150.0]).is_err());
    }

    #[test]
    fn test_determinism() {
        let flows = [-10000.0, 3000.0, 4000.0, 5000.0, 3000.0];
        let a = net_present_value(0.10, &flows).unwrap();
        let b = net_present_value(0.10, &flows).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
