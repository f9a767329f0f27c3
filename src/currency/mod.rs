// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Currencies: the native coin and ERC-20 tokens
//!
//! A [`Currency`] names a unit of value: display ticker, base-unit ticker and
//! decimal exponent. A [`TokenCurrency`] adds the token's contract address.
//! Both are immutable; amounts hold them behind an `Arc`.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use alloy_primitives::Address;

use crate::errors::TokenError;
use crate::registry;
use crate::types::{TokenDecimals, Wei};

mod format;

/// The native coin: ETH, counted in WEI, 18 decimals
pub const ETH: Currency = Currency::from_static("ETH", "WEI", TokenDecimals::STANDARD);

/// A named unit of value
///
/// # Examples
///
/// ```
/// use raiden_tokens::{Wei, ETH};
///
/// assert_eq!(ETH.ticker(), "ETH");
/// assert_eq!(ETH.format_value(&Wei::from(1_500_000u64)), "1.5 MWEI");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency {
    ticker: Cow<'static, str>,
    wei_ticker: Cow<'static, str>,
    decimals: TokenDecimals,
}

impl Currency {
    pub fn new(
        ticker: impl Into<Cow<'static, str>>,
        wei_ticker: impl Into<Cow<'static, str>>,
        decimals: TokenDecimals,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            wei_ticker: wei_ticker.into(),
            decimals,
        }
    }

    /// Build a currency from compiled-in tickers
    pub const fn from_static(
        ticker: &'static str,
        wei_ticker: &'static str,
        decimals: TokenDecimals,
    ) -> Self {
        Self {
            ticker: Cow::Borrowed(ticker),
            wei_ticker: Cow::Borrowed(wei_ticker),
            decimals,
        }
    }

    /// Display ticker, e.g. "ETH"
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Base-unit ticker, e.g. "WEI"
    pub fn wei_ticker(&self) -> &str {
        &self.wei_ticker
    }

    pub fn decimals(&self) -> TokenDecimals {
        self.decimals
    }

    /// Render a base-unit value with SI scaling
    ///
    /// See [`Amount::formatted`](crate::Amount::formatted) for the rules.
    pub fn format_value(&self, wei: &Wei) -> String {
        format::format_base_units(self, wei.as_bigint())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ticker)
    }
}

/// An ERC-20 token: a currency bound to a contract address
///
/// Equality covers the currency and the address; `supply` is informational.
/// Obtain instances through [`registry::resolve`] or
/// [`TokenCurrency::find_by_ticker`].
#[derive(Debug, Clone)]
pub struct TokenCurrency {
    currency: Currency,
    address: Address,
    supply: Wei,
}

impl TokenCurrency {
    /// Nominal supply assumed for catalog tokens, in base units (10^21)
    pub const DEFAULT_SUPPLY: u128 = 1_000_000_000_000_000_000_000;

    /// Bind a currency to a contract address
    ///
    /// Fails with [`TokenError::MissingAddress`] for the zero address.
    pub fn new(currency: Currency, address: Address) -> Result<Self, TokenError> {
        if address.is_zero() {
            return Err(TokenError::missing_address(currency.ticker()));
        }
        Ok(Self {
            currency,
            address,
            supply: Wei::from(Self::DEFAULT_SUPPLY),
        })
    }

    /// Bind a currency to a hex contract address
    ///
    /// An empty string is a missing address; anything else must parse as a
    /// 20-byte hex address (checksum casing is not enforced).
    pub fn from_address_str(currency: Currency, address: &str) -> Result<Self, TokenError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(TokenError::missing_address(currency.ticker()));
        }
        let parsed = Address::from_str(address)
            .map_err(|_| TokenError::invalid_address(currency.ticker(), address))?;
        Self::new(currency, parsed)
    }

    /// Look up a token deployment in the versioned catalog
    ///
    /// Shorthand for [`registry::resolve`].
    pub fn find_by_ticker(
        ticker: &str,
        network: &str,
        contracts_version: &str,
    ) -> Result<Self, TokenError> {
        registry::resolve(ticker, network, contracts_version)
    }

    pub fn with_supply(mut self, supply: impl Into<Wei>) -> Self {
        self.supply = supply.into();
        self
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn ticker(&self) -> &str {
        self.currency.ticker()
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn supply(&self) -> &Wei {
        &self.supply
    }
}

impl PartialEq for TokenCurrency {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency && self.address == other.address
    }
}

impl Eq for TokenCurrency {}

impl fmt::Display for TokenCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.currency, self.address)
    }
}

/// Anything an [`Amount`](crate::Amount) can be denominated in
pub trait Denomination: Clone + PartialEq + fmt::Debug {
    fn currency(&self) -> &Currency;
}

impl Denomination for Currency {
    fn currency(&self) -> &Currency {
        self
    }
}

impl Denomination for TokenCurrency {
    fn currency(&self) -> &Currency {
        &self.currency
    }
}
