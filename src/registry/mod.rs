// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token deployment lookup
//!
//! Token addresses depend on which Raiden contracts release is installed.
//! [`resolve`] picks the token list for the release's `major.minor` prefix
//! (falling back to the default list) and looks the ticker up on the
//! requested network.
//!
//! # Example
//!
//! ```rust
//! use alloy_primitives::address;
//! use raiden_tokens::registry;
//!
//! let rdn = registry::resolve("RDN", "mainnet", "0.37.1").unwrap();
//! assert_eq!(rdn.address(), address!("255aa6df07540cb5d3d297f0d0d4d84cb52bc8e6"));
//!
//! assert!(registry::resolve("WIZ", "mainnet", "0.37.1").is_err());
//! ```

use std::str::FromStr;

use alloy_chains::NamedChain;
use tracing::debug;

use crate::currency::{Currency, TokenCurrency};
use crate::errors::TokenError;
use crate::spans;
use crate::types::TokenDecimals;

mod token_lists;

use token_lists::{TokenData, DEFAULT_TOKENS, VERSIONED_TOKENS};

/// Resolve a ticker on a network for a contracts release
///
/// `network` is a chain name such as `"mainnet"` or `"goerli"`. A name that
/// is not a known chain is reported the same way as a missing deployment.
pub fn resolve(
    ticker: &str,
    network: &str,
    contracts_version: &str,
) -> Result<TokenCurrency, TokenError> {
    match NamedChain::from_str(network) {
        Ok(chain) => resolve_on_chain(ticker, chain, contracts_version),
        Err(_) => {
            debug!(ticker, network, contracts_version, "Unknown network name");
            Err(TokenError::not_deployed(ticker, network))
        }
    }
}

/// Resolve a ticker on an already parsed chain
pub fn resolve_on_chain(
    ticker: &str,
    chain: NamedChain,
    contracts_version: &str,
) -> Result<TokenCurrency, TokenError> {
    let span = spans::resolve_token(ticker, chain, contracts_version);
    let _guard = span.enter();

    let deployment = token_list(contracts_version)
        .iter()
        .find(|token| token.ticker == ticker)
        .and_then(|token| token.address_on(chain).map(|address| (token, address)));

    let Some((token, address)) = deployment else {
        debug!(
            ticker,
            network = %chain,
            contracts_version,
            "Token not deployed for this contracts version"
        );
        return Err(TokenError::not_deployed(ticker, chain.to_string()));
    };

    TokenCurrency::new(
        Currency::from_static(token.ticker, token.wei_ticker, TokenDecimals::STANDARD),
        address,
    )
}

/// `major.minor` prefixes that have their own token list
pub fn known_contract_versions() -> impl Iterator<Item = &'static str> {
    VERSIONED_TOKENS.iter().map(|(version, _)| *version)
}

fn token_list(contracts_version: &str) -> &'static [TokenData] {
    let version = contracts_version.trim();
    VERSIONED_TOKENS
        .iter()
        .find(|(prefix, _)| {
            version
                .strip_prefix(*prefix)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
        })
        .map(|(_, tokens)| *tokens)
        .unwrap_or(DEFAULT_TOKENS)
}
