//! Fincalc - Financial math library
//!
//! This library provides:
//! - Time value of money: future value, present value, net present value
//! - Interest accrual: simple interest and periodic compound interest
//! - Internal rate of return via Newton-Raphson iteration
//!
//! All functions are pure and stateless: inputs are read-only, outputs are
//! freshly computed, and identical inputs always produce identical results,
//! so calls may run concurrently without synchronization. Failures come back
//! as a typed [`FinError`], never as a silently wrong number; rendering
//! results or diagnostics as text is left to the caller.

pub mod error;
pub mod interest;
pub mod irr;
pub mod tvm;

// Re-export commonly used items
pub use error::{ErrorKind, FinError, Result};
pub use interest::{compound_interest, simple_interest};
pub use irr::{internal_rate_of_return, internal_rate_of_return_with, IrrConfig};
pub use tvm::{future_value, net_present_value, present_value};
