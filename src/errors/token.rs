// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for token currencies and deployment lookup.

/// Errors that can occur when building or resolving a token currency.
///
/// # Examples
///
/// ```rust
/// use raiden_tokens::{registry, TokenError};
///
/// match registry::resolve("WIZ", "mainnet", "0.37.1") {
///     Ok(token) => println!("WIZ lives at {}", token.address()),
///     Err(TokenError::NotDeployed { ticker, network }) => {
///         eprintln!("{ticker} is not supported on {network}");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// A token currency was built without a contract address.
    ///
    /// Token currencies should come from the registry; hand-built ones must
    /// carry a real, non-zero address.
    #[error("{ticker} token should not get initialized without an address")]
    MissingAddress {
        /// Ticker of the token being built
        ticker: String,
    },

    /// A contract address string could not be parsed.
    #[error("Invalid address for {ticker}: {address}")]
    InvalidAddress {
        /// Ticker of the token being built
        ticker: String,
        /// The rejected address text
        address: String,
    },

    /// The ticker or the network is absent from the active token list.
    #[error("{ticker} is not deployed on {network}")]
    NotDeployed {
        /// Requested ticker
        ticker: String,
        /// Requested network name
        network: String,
    },
}

impl TokenError {
    /// Create a `MissingAddress` error for a token.
    pub fn missing_address(ticker: impl Into<String>) -> Self {
        TokenError::MissingAddress {
            ticker: ticker.into(),
        }
    }

    /// Create an `InvalidAddress` error for a token.
    pub fn invalid_address(ticker: impl Into<String>, address: impl Into<String>) -> Self {
        TokenError::InvalidAddress {
            ticker: ticker.into(),
            address: address.into(),
        }
    }

    /// Create a `NotDeployed` error for a ticker/network pair.
    pub fn not_deployed(ticker: impl Into<String>, network: impl Into<String>) -> Self {
        TokenError::NotDeployed {
            ticker: ticker.into(),
            network: network.into(),
        }
    }
}
