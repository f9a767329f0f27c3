// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Currency-bound amounts
//!
//! An [`Amount`] is a decimal quantity of one currency. It is built either
//! from whole units ([`Amount::from_units`], [`Amount::from_decimal_units`],
//! [`Amount::parse_units`]) or from base units ([`Amount::from_wei`]); the
//! two paths differ by a factor of `10^decimals`.
//!
//! Amounts never change after construction. Arithmetic runs on base-unit
//! integers and returns new amounts; operations across currencies fail with
//! [`AmountError::CurrencyMismatch`].
//!
//! # Type Relationships
//!
//! ```text
//! Amount<Currency>       = EthereumAmount
//! Amount<TokenCurrency>  = TokenAmount
//!     |
//!     | as_wei()
//!     ↓
//! Wei (signed integer, base units)
//!     |
//!     | to_u256()
//!     ↓
//! U256 (on-chain)
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use alloy_primitives::Address;
use bigdecimal::BigDecimal;
use num::bigint::BigInt;

use crate::currency::{Currency, Denomination, TokenCurrency, ETH};
use crate::errors::AmountError;
use crate::types::Wei;

/// Amount of the native coin
pub type EthereumAmount = Amount<Currency>;

/// Amount of an ERC-20 token
pub type TokenAmount = Amount<TokenCurrency>;

/// A quantity of a specific currency
///
/// The value holds at most `decimals` fractional digits, so
/// [`as_wei`](Self::as_wei) is always exact. Extra digits given at
/// construction are rounded half-to-even.
///
/// # Examples
///
/// ```
/// use raiden_tokens::{EthereumAmount, Wei};
///
/// let one_eth = EthereumAmount::eth(1);
/// assert_eq!(one_eth.as_wei(), Wei::from(1_000_000_000_000_000_000u128));
///
/// let one_wei = EthereumAmount::eth_wei(1u64);
/// assert_eq!(one_wei.formatted(), "1 WEI");
///
/// let total = one_eth.try_add(&one_wei).unwrap();
/// assert_eq!(total.as_wei(), Wei::from(1_000_000_000_000_000_001u128));
/// ```
#[derive(Debug, Clone)]
pub struct Amount<C = Currency> {
    value: BigDecimal,
    wei: Wei,
    currency: Arc<C>,
}

impl<C: Denomination> Amount<C> {
    /// Build an amount from a whole number of units
    pub fn from_units(units: impl Into<BigInt>, currency: C) -> Self {
        let wei = currency.currency().decimals().scale_units(&units.into());
        Self::from_wei_shared(Wei::new(wei), Arc::new(currency))
    }

    /// Build an amount from a decimal whole-unit value
    ///
    /// Fails with [`AmountError::InvalidValue`] when the value needs more
    /// than 256 bits in base units.
    pub fn from_decimal_units(value: &BigDecimal, currency: C) -> Result<Self, AmountError> {
        let wei = currency.currency().decimals().to_base_units(value)?;
        Ok(Self::from_wei_shared(Wei::new(wei), Arc::new(currency)))
    }

    /// Build an amount from a base-unit (wei) count
    pub fn from_wei(wei: impl Into<Wei>, currency: C) -> Self {
        Self::from_wei_shared(wei.into(), Arc::new(currency))
    }

    /// Parse a whole-unit decimal string such as `"0.875"` or `"1e-3"`
    pub fn parse_units(value: &str, currency: C) -> Result<Self, AmountError> {
        let parsed = BigDecimal::from_str(value.trim())
            .map_err(|e| AmountError::invalid_value(value, e.to_string()))?;
        Self::from_decimal_units(&parsed, currency)
    }

    /// Build an amount from a whole-unit float
    ///
    /// The float's shortest decimal rendering is parsed, so `0.1` stays
    /// exactly one tenth instead of its binary approximation.
    pub fn from_f64_units(value: f64, currency: C) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::invalid_value(
                value.to_string(),
                "amount must be a finite number",
            ));
        }
        Self::parse_units(&value.to_string(), currency)
    }

    fn from_wei_shared(wei: Wei, currency: Arc<C>) -> Self {
        Self {
            value: currency.currency().decimals().from_base_units(wei.as_bigint()),
            wei,
            currency,
        }
    }

    /// Whole-unit value
    pub fn value(&self) -> &BigDecimal {
        &self.value
    }

    pub fn currency(&self) -> &C {
        &self.currency
    }

    /// Display ticker of the bound currency
    pub fn ticker(&self) -> &str {
        self.currency.currency().ticker()
    }

    /// Base-unit value: `value * 10^decimals`
    pub fn as_wei(&self) -> Wei {
        self.wei.clone()
    }

    /// SI-scaled display string
    ///
    /// - zero renders as `"0 <ticker>"`
    /// - from 10^15 base units up, whole units with the display ticker
    /// - T/G/M prefixes on the base-unit ticker for 10^12, 10^9 and 10^6
    /// - below 10^6, the raw base-unit count
    ///
    /// Fractions keep three significant digits without a leading zero.
    ///
    /// ```
    /// use raiden_tokens::EthereumAmount;
    ///
    /// assert_eq!(EthereumAmount::eth(0).formatted(), "0 ETH");
    /// assert_eq!(EthereumAmount::eth_wei(1_500_000u64).formatted(), "1.5 MWEI");
    /// assert_eq!(EthereumAmount::parse_eth("0.875").unwrap().formatted(), "0.875 ETH");
    /// ```
    pub fn formatted(&self) -> String {
        self.currency.currency().format_value(&self.as_wei())
    }

    /// Sum of two amounts of the same currency
    pub fn try_add(&self, other: &Self) -> Result<Self, AmountError> {
        self.ensure_same_currency("add", other)?;
        Ok(Self::from_wei_shared(
            self.as_wei() + other.as_wei(),
            Arc::clone(&self.currency),
        ))
    }

    /// Difference of two amounts of the same currency; may be negative
    pub fn try_sub(&self, other: &Self) -> Result<Self, AmountError> {
        self.ensure_same_currency("subtract", other)?;
        Ok(Self::from_wei_shared(
            self.as_wei() - other.as_wei(),
            Arc::clone(&self.currency),
        ))
    }

    /// Same currency and same base-unit value
    ///
    /// Never fails: amounts of different currencies are simply unequal.
    pub fn equals(&self, other: &Self) -> bool {
        self.currency == other.currency && self.as_wei() == other.as_wei()
    }

    /// Order two amounts of the same currency
    pub fn compare(&self, other: &Self) -> Result<Ordering, AmountError> {
        self.ensure_same_currency("compare", other)?;
        Ok(self.as_wei().cmp(&other.as_wei()))
    }

    pub fn less_than(&self, other: &Self) -> Result<bool, AmountError> {
        self.compare(other).map(Ordering::is_lt)
    }

    pub fn less_or_equal(&self, other: &Self) -> Result<bool, AmountError> {
        self.compare(other).map(Ordering::is_le)
    }

    pub fn greater_than(&self, other: &Self) -> Result<bool, AmountError> {
        self.compare(other).map(Ordering::is_gt)
    }

    pub fn greater_or_equal(&self, other: &Self) -> Result<bool, AmountError> {
        self.compare(other).map(Ordering::is_ge)
    }

    fn ensure_same_currency(
        &self,
        operation: &'static str,
        other: &Self,
    ) -> Result<(), AmountError> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(AmountError::currency_mismatch(
                operation,
                self.formatted(),
                other.formatted(),
            ))
        }
    }
}

impl Amount<Currency> {
    /// Whole-unit ETH amount
    pub fn eth(value: impl Into<BigInt>) -> Self {
        Self::from_units(value, ETH)
    }

    /// ETH amount from a wei count
    pub fn eth_wei(wei: impl Into<Wei>) -> Self {
        Self::from_wei(wei, ETH)
    }

    /// Parse a whole-unit ETH string
    pub fn parse_eth(value: &str) -> Result<Self, AmountError> {
        Self::parse_units(value, ETH)
    }
}

impl Amount<TokenCurrency> {
    /// Contract address of the bound token
    pub fn address(&self) -> Address {
        self.currency.address()
    }
}

impl<C: Denomination> PartialEq for Amount<C> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<C: Denomination> Eq for Amount<C> {}

impl<C: Denomination> fmt::Display for Amount<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;
    use crate::types::TokenDecimals;

    const VERSION: &str = "0.37.0";

    fn rdn() -> TokenCurrency {
        registry::resolve("RDN", "mainnet", VERSION).unwrap()
    }

    fn wiz() -> TokenCurrency {
        registry::resolve("WIZ", "goerli", VERSION).unwrap()
    }

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_can_convert_to_wei() {
        assert_eq!(
            EthereumAmount::eth(1).as_wei(),
            Wei::from(1_000_000_000_000_000_000u128)
        );
    }

    #[test]
    fn test_units_and_wei_paths_differ() {
        let units = EthereumAmount::eth(5);
        let wei = EthereumAmount::eth_wei(5u64);
        assert_ne!(units, wei);
        assert_eq!(units.as_wei(), Wei::from(5_000_000_000_000_000_000u128));
        assert_eq!(wei.as_wei(), Wei::from(5u64));
        assert_eq!(wei.value(), &dec("0.000000000000000005"));
    }

    #[test]
    fn test_can_get_token_ticker() {
        let one_rdn = TokenAmount::from_units(1, rdn());
        assert_eq!(one_rdn.ticker(), "RDN");
        assert_eq!(one_rdn.formatted(), "1 RDN");
    }

    #[test]
    fn test_can_get_address() {
        let one_rdn = TokenAmount::from_units(1, rdn());
        assert_eq!(one_rdn.address(), rdn().address());
    }

    #[test]
    fn test_formatted_amounts() {
        assert_eq!(EthereumAmount::eth(1).formatted(), "1 ETH");
        assert_eq!(EthereumAmount::eth(0).formatted(), "0 ETH");
        assert_eq!(EthereumAmount::eth_wei(1_000_000_000_000u64).formatted(), "1 TWEI");
        assert_eq!(EthereumAmount::eth_wei(1_000_000_000u64).formatted(), "1 GWEI");
        assert_eq!(EthereumAmount::eth_wei(1_000_000u64).formatted(), "1 MWEI");
        assert_eq!(EthereumAmount::parse_eth("0.875").unwrap().formatted(), "0.875 ETH");
        assert_eq!(EthereumAmount::eth_wei(50_000u64).formatted(), "50000 WEI");
        assert_eq!(EthereumAmount::eth_wei(500u64).to_string(), "500 WEI");
    }

    #[test]
    fn test_addition() {
        let sum = EthereumAmount::eth(1).try_add(&EthereumAmount::eth(2)).unwrap();
        assert_eq!(sum.value(), &BigDecimal::from(3));
        assert_eq!(sum, EthereumAmount::eth(3));
    }

    #[test]
    fn test_subtraction() {
        let diff = EthereumAmount::eth(2).try_sub(&EthereumAmount::eth(1)).unwrap();
        assert_eq!(diff.value(), &BigDecimal::from(1));
    }

    #[test]
    fn test_subtraction_can_go_negative() {
        let diff = EthereumAmount::eth(1).try_sub(&EthereumAmount::eth(3)).unwrap();
        assert_eq!(diff.as_wei(), Wei::from(-2_000_000_000_000_000_000i64));
    }

    #[test]
    fn test_cannot_add_or_subtract_different_currencies() {
        let one_rdn = TokenAmount::from_units(1, rdn());
        let one_wiz = TokenAmount::from_units(1, wiz());

        let err = one_rdn.try_add(&one_wiz).unwrap_err();
        assert_eq!(
            err,
            AmountError::currency_mismatch("add", "1 RDN", "1 WIZ")
        );
        assert_eq!(err.to_string(), "Cannot add 1 RDN and 1 WIZ");

        let err = one_rdn.try_sub(&one_wiz).unwrap_err();
        assert!(matches!(err, AmountError::CurrencyMismatch { operation: "subtract", .. }));
    }

    #[test]
    fn test_same_ticker_different_address_is_a_different_currency() {
        let mainnet = TokenAmount::from_units(1, rdn());
        let goerli = TokenAmount::from_units(
            1,
            registry::resolve("RDN", "goerli", "0.36.0").unwrap(),
        );
        assert!(mainnet.try_add(&goerli).is_err());
        assert!(!mainnet.equals(&goerli));
    }

    #[test]
    fn test_comparisons() {
        let one = EthereumAmount::eth(1);
        let two = EthereumAmount::eth(2);

        assert!(one.less_than(&two).unwrap());
        assert!(one.less_or_equal(&EthereumAmount::eth(1)).unwrap());
        assert!(two.greater_than(&one).unwrap());
        assert!(one.greater_or_equal(&EthereumAmount::eth(1)).unwrap());
        assert!(!two.less_than(&one).unwrap());
        assert_eq!(one.compare(&two).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_cannot_compare_different_currencies() {
        let one_rdn = TokenAmount::from_units(1, rdn());
        let one_wiz = TokenAmount::from_units(1, wiz());

        assert!(one_rdn.less_than(&one_wiz).is_err());
        assert!(one_rdn.less_or_equal(&one_wiz).is_err());
        assert!(one_rdn.greater_than(&one_wiz).is_err());
        assert!(one_rdn.greater_or_equal(&one_wiz).is_err());
        assert!(!one_rdn.equals(&one_wiz));
        assert_ne!(one_rdn, one_wiz);
    }

    #[test]
    fn test_equality_ignores_representation() {
        assert_eq!(EthereumAmount::eth(1), EthereumAmount::parse_eth("1.000").unwrap());
        assert_eq!(
            EthereumAmount::eth(1),
            EthereumAmount::eth_wei(1_000_000_000_000_000_000u128)
        );
    }

    #[test]
    fn test_float_input_uses_decimal_rendering() {
        let tenth = EthereumAmount::from_f64_units(0.1, ETH).unwrap();
        assert_eq!(tenth.as_wei(), Wei::from(100_000_000_000_000_000u64));

        let sum = tenth
            .try_add(&EthereumAmount::from_f64_units(0.2, ETH).unwrap())
            .unwrap();
        assert_eq!(sum, EthereumAmount::parse_eth("0.3").unwrap());
    }

    #[test]
    fn test_invalid_whole_unit_input() {
        assert!(matches!(
            EthereumAmount::parse_eth("one"),
            Err(AmountError::InvalidValue { .. })
        ));
        assert!(EthereumAmount::from_f64_units(f64::NAN, ETH).is_err());
        assert!(EthereumAmount::from_f64_units(f64::INFINITY, ETH).is_err());
    }

    #[test]
    fn test_excess_precision_rounds_half_to_even() {
        let six = Currency::from_static("USDC", "UUSDC", TokenDecimals::new(6));
        let amount = Amount::parse_units("0.0000025", six.clone()).unwrap();
        assert_eq!(amount.as_wei(), Wei::from(2u64));
        let amount = Amount::parse_units("0.0000035", six).unwrap();
        assert_eq!(amount.as_wei(), Wei::from(4u64));
    }

    #[test]
    fn test_extreme_exponents_are_bounded() {
        // far below one wei: rounds to zero without building 10^20000000
        let tiny = EthereumAmount::parse_eth("1e-20000000").unwrap();
        assert_eq!(tiny.as_wei(), Wei::zero());

        let err = EthereumAmount::parse_eth("1e5000000000").unwrap_err();
        assert!(matches!(err, AmountError::InvalidValue { .. }));

        let largest = EthereumAmount::parse_eth("1e59").unwrap();
        assert!(largest.as_wei().to_u256().is_ok());
        assert!(EthereumAmount::parse_eth("1e60").is_err());
    }

    #[test]
    fn test_decimal_units_match_parsed_units() {
        let value = dec("2.5");
        let from_decimal = EthereumAmount::from_decimal_units(&value, ETH).unwrap();
        assert_eq!(from_decimal, EthereumAmount::parse_eth("2.5").unwrap());
        assert_eq!(from_decimal.value(), &dec("2.5"));
    }

    #[test]
    fn test_operations_do_not_mutate_operands() {
        let a = EthereumAmount::eth(2);
        let b = EthereumAmount::eth_wei(7u64);
        let (a_before, b_before) = (a.as_wei(), b.as_wei());

        let _ = a.try_add(&b).unwrap();
        let _ = a.try_sub(&b).unwrap();

        assert_eq!(a.as_wei(), a_before);
        assert_eq!(b.as_wei(), b_before);
    }

    #[test]
    fn test_arithmetic_shares_currency() {
        let a = TokenAmount::from_units(1, rdn());
        let sum = a.try_add(&a).unwrap();
        assert!(Arc::ptr_eq(&a.currency, &sum.currency));
        assert_eq!(sum.formatted(), "2 RDN");
    }
}
