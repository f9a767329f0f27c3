// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token decimal precision type

use bigdecimal::BigDecimal;
use num::bigint::BigInt;
use num::{Integer, Signed, Zero};
use serde::{Deserialize, Serialize};

use crate::errors::AmountError;

/// Number of base units per whole unit, as a power of ten
///
/// ETH and most ERC-20 tokens use 18 decimals: one whole unit is 10^18 wei.
///
/// # Examples
///
/// ```
/// use raiden_tokens::TokenDecimals;
///
/// let eth_decimals = TokenDecimals::STANDARD;
/// assert_eq!(eth_decimals.as_u8(), 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Standard decimals for ETH-like tokens (18)
    pub const STANDARD: Self = Self(18);

    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// 10^decimals as an integer
    pub fn multiplier(&self) -> BigInt {
        BigInt::from(10u8).pow(u32::from(self.0))
    }

    /// Scale an integer whole-unit value to base units
    pub fn scale_units(&self, units: &BigInt) -> BigInt {
        units * self.multiplier()
    }

    /// Scale a whole-unit value to base units: `round(value * 10^decimals)`
    ///
    /// Digits beyond `decimals` fractional places are rounded half-to-even.
    /// Values whose base-unit magnitude needs more than 256 bits are rejected
    /// with [`AmountError::InvalidValue`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bigdecimal::BigDecimal;
    /// use num::bigint::BigInt;
    /// use raiden_tokens::TokenDecimals;
    /// use std::str::FromStr;
    ///
    /// let six = TokenDecimals::new(6);
    /// let value = BigDecimal::from_str("1.2345675").unwrap();
    /// assert_eq!(six.to_base_units(&value).unwrap(), BigInt::from(1_234_568));
    /// ```
    pub fn to_base_units(&self, value: &BigDecimal) -> Result<BigInt, AmountError> {
        // value == digits * 10^-exponent
        let (digits, exponent) = value.as_bigint_and_exponent();
        if digits.is_zero() {
            return Ok(BigInt::zero());
        }

        let Some(shift) = i64::from(self.0).checked_sub(exponent) else {
            return Err(too_large(&digits, exponent));
        };
        let scaled = if shift >= 0 {
            let places = shift.unsigned_abs();
            if places > MAX_BASE_UNIT_DIGITS {
                return Err(too_large(&digits, exponent));
            }
            &digits * pow10(places as u32)
        } else {
            let places = shift.unsigned_abs();
            // |digits| < 2^bits, so 2^(bits + 1) < 8^places means the quotient rounds to zero
            if digits.bits().saturating_add(1) < places.saturating_mul(3) {
                return Ok(BigInt::zero());
            }
            let places = u32::try_from(places).map_err(|_| too_large(&digits, exponent))?;
            div_round_half_even(&digits, &pow10(places))
        };

        if scaled.bits() > MAX_BASE_UNIT_BITS {
            return Err(too_large(&digits, exponent));
        }
        Ok(scaled)
    }

    /// Scale a base-unit integer back to whole units, exactly
    pub fn from_base_units(&self, wei: &BigInt) -> BigDecimal {
        BigDecimal::new(wei.clone(), i64::from(self.0))
    }
}

impl Default for TokenDecimals {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}

/// Widest base-unit magnitude accepted from whole-unit input (the EVM word size)
const MAX_BASE_UNIT_BITS: u64 = 256;

/// Decimal digits in 2^256
const MAX_BASE_UNIT_DIGITS: u64 = 78;

fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u8).pow(exponent)
}

fn too_large(digits: &BigInt, exponent: i64) -> AmountError {
    AmountError::invalid_value(
        format!("{digits}e{}", exponent.saturating_neg()),
        format!("exceeds {MAX_BASE_UNIT_BITS} bits in base units"),
    )
}

fn div_round_half_even(numerator: &BigInt, divisor: &BigInt) -> BigInt {
    let (quotient, remainder) = numerator.abs().div_rem(divisor);
    let twice = remainder * 2u32;
    let rounded = if twice > *divisor || (twice == *divisor && quotient.is_odd()) {
        quotient + 1u32
    } else {
        quotient
    };
    if numerator.is_negative() && !rounded.is_zero() {
        -rounded
    } else {
        rounded
    }
}
