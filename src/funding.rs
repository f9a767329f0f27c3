// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Funding thresholds and swap targets derived from installer settings
//!
//! Both sets re-resolve their tokens through the registry on every call, so
//! they always reflect the settings' network and contracts release.

use tracing::trace;

use crate::amount::{EthereumAmount, TokenAmount};
use crate::config::{Settings, TokenSettings};
use crate::currency::TokenCurrency;
use crate::errors::TokenError;
use crate::registry;
use crate::spans;

/// Balances an account needs before and after swapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredAmounts {
    pub eth: EthereumAmount,
    pub eth_after_swap: EthereumAmount,
    pub service_token: TokenAmount,
    pub transfer_token: TokenAmount,
}

impl RequiredAmounts {
    /// Wrap the settings' base-unit thresholds as amounts
    ///
    /// Fails if either token is not deployed on the settings' network.
    pub fn from_settings(settings: &Settings) -> Result<Self, TokenError> {
        let span = spans::amounts_from_settings("required", &settings.network);
        let _guard = span.enter();

        let required = Self {
            eth: EthereumAmount::eth_wei(settings.ethereum_amount_required.clone()),
            eth_after_swap: EthereumAmount::eth_wei(
                settings.ethereum_amount_required_after_swap.clone(),
            ),
            service_token: TokenAmount::from_wei(
                settings.service_token.amount_required.clone(),
                token_currency(settings, &settings.service_token)?,
            ),
            transfer_token: TokenAmount::from_wei(
                settings.transfer_token.amount_required.clone(),
                token_currency(settings, &settings.transfer_token)?,
            ),
        };
        trace!(
            eth = %required.eth,
            service_token = %required.service_token,
            transfer_token = %required.transfer_token,
            "Built required amounts"
        );
        Ok(required)
    }
}

/// Token quantities to acquire through the exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapAmounts {
    pub service_token: TokenAmount,
    pub transfer_token: TokenAmount,
}

impl SwapAmounts {
    /// Wrap the settings' swap targets as amounts
    ///
    /// Fails if either token is not deployed on the settings' network.
    pub fn from_settings(settings: &Settings) -> Result<Self, TokenError> {
        let span = spans::amounts_from_settings("swap", &settings.network);
        let _guard = span.enter();

        Ok(Self {
            service_token: TokenAmount::from_wei(
                settings.service_token.swap_amount.clone(),
                token_currency(settings, &settings.service_token)?,
            ),
            transfer_token: TokenAmount::from_wei(
                settings.transfer_token.swap_amount.clone(),
                token_currency(settings, &settings.transfer_token)?,
            ),
        })
    }
}

fn token_currency(settings: &Settings, token: &TokenSettings) -> Result<TokenCurrency, TokenError> {
    registry::resolve(&token.ticker, &settings.network, &settings.contracts_version)
}
