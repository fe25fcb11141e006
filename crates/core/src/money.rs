//! Exact decimal amounts.
//!
//! Balances are arbitrary-precision `BigDecimal`s: no floating point, no
//! mantissa limit, no rounding. Sums and differences keep the larger operand
//! scale, so `1000.12345 - 100` is `900.12345` and `2500 + 500` is `3000`.

use core::str::FromStr;

use bigdecimal::{BigDecimal, Zero};

use crate::error::{DomainError, DomainResult};

/// Parse a textual amount exactly (`"1500.8989"`, `"-20"`, `"1.5E-29"`).
///
/// Every supplied digit is kept, however many there are.
pub fn parse_amount(raw: &str) -> DomainResult<BigDecimal> {
    BigDecimal::from_str(raw).map_err(|e| DomainError::validation(format!("amount {raw:?}: {e}")))
}

/// Exact comparison against zero, no tolerance.
pub fn is_negative(value: &BigDecimal) -> bool {
    *value < BigDecimal::zero()
}
