//! Fixed-point and checked arithmetic.
//!
//! Ratios, rates and deviations are unsigned 18-decimal fixed-point
//! integers ([`SCALE`] = `1.0`).  Intermediate products are widened to
//! [`U256`] and narrowed with an explicit range check.

mod checked;
mod fixed;
mod u256;

pub use checked::CheckedArithmetic;
pub use fixed::{abs_diff, div_wide, isqrt, isqrt_wide, mul_div, narrow, SCALE, WAD_DECIMALS};
pub use u256::U256;
