// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong type for base-unit amounts
//!
//! [`Wei`] marks a value as a count of the smallest indivisible unit of a
//! currency. Passing a `Wei` to [`Amount::from_wei`](crate::Amount::from_wei)
//! is what distinguishes base-unit construction from whole-unit construction.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use alloy_primitives::U256;
use num::bigint::{BigInt, Sign};
use num::{Signed, Zero};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::AmountError;

/// Integer amount of base units ("wei")
///
/// Signed and arbitrary precision: subtracting a larger amount from a smaller
/// one yields a negative value instead of wrapping. Use [`to_u256`](Self::to_u256)
/// when handing the value to on-chain code.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use raiden_tokens::Wei;
///
/// let one_gwei = Wei::from(1_000_000_000u64);
/// assert_eq!(one_gwei.to_u256().unwrap(), U256::from(1_000_000_000u64));
///
/// let debt = Wei::from(5u64) - Wei::from(8u64);
/// assert!(debt.is_negative());
/// assert!(debt.to_u256().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Wei(BigInt);

impl Wei {
    /// Zero wei
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    pub fn new(value: BigInt) -> Self {
        Self(value)
    }

    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    pub fn into_bigint(self) -> BigInt {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Convert to the unsigned 256-bit on-chain representation
    ///
    /// Fails for negative values and for values above `U256::MAX`.
    pub fn to_u256(&self) -> Result<U256, AmountError> {
        let (sign, bytes) = self.0.to_bytes_be();
        if sign == Sign::Minus {
            return Err(AmountError::out_of_range(self, "negative base-unit value"));
        }
        if bytes.len() > 32 {
            return Err(AmountError::out_of_range(self, "does not fit in 256 bits"));
        }
        Ok(U256::from_be_slice(&bytes))
    }
}

impl From<u64> for Wei {
    fn from(value: u64) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<u128> for Wei {
    fn from(value: u128) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<i64> for Wei {
    fn from(value: i64) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<U256> for Wei {
    fn from(value: U256) -> Self {
        Self(BigInt::from_bytes_be(Sign::Plus, &value.to_be_bytes::<32>()))
    }
}

impl From<BigInt> for Wei {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl FromStr for Wei {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<BigInt>()
            .map(Self)
            .map_err(|e| AmountError::invalid_value(s, e.to_string()))
    }
}

impl Add for Wei {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Wei {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Serialized as a decimal string: JSON numbers and TOML integers cannot hold
// every 256-bit value.
impl Serialize for Wei {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Wei {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(WeiVisitor)
    }
}

struct WeiVisitor;

impl Visitor<'_> for WeiVisitor {
    type Value = Wei;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a string holding a decimal integer")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Wei, E> {
        Ok(Wei::from(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Wei, E> {
        Ok(Wei::from(value))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<Wei, E> {
        Ok(Wei::from(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Wei, E> {
        value.parse().map_err(E::custom)
    }
}
