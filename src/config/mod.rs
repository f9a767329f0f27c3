// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Installer settings that feed the derived amount sets
//!
//! Settings come from the installer's per-network TOML file. Only the keys
//! needed for funding thresholds and swaps are read; other keys are ignored.
//!
//! # Example
//!
//! ```rust
//! use raiden_tokens::{Settings, Wei};
//!
//! let settings = Settings::from_toml_str(r#"
//!     network = "mainnet"
//!     contracts_version = "0.37.1"
//!     ethereum_amount_required = 30000000000000000
//!     ethereum_amount_required_after_swap = 10000000000000000
//!
//!     [service_token]
//!     ticker = "RDN"
//!     amount_required = "12500000000000000000"
//!     swap_amount = "15000000000000000000"
//!
//!     [transfer_token]
//!     ticker = "DAI"
//!     amount_required = "10000000000000000000"
//!     swap_amount = "10000000000000000000"
//! "#).unwrap();
//!
//! assert_eq!(settings.network, "mainnet");
//! assert_eq!(settings.service_token.amount_required, Wei::from(12_500_000_000_000_000_000u128));
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::errors::ConfigError;
use crate::types::Wei;

/// Contracts release assumed when a settings file does not name one
pub const DEFAULT_CONTRACTS_VERSION: &str = "0.37.1";

/// Installer settings for one network
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Chain name, e.g. "mainnet" or "goerli"
    pub network: String,

    /// Raiden contracts release; selects the token deployment list
    #[serde(default = "default_contracts_version")]
    pub contracts_version: String,

    /// ETH the account must hold before installation continues, in wei
    pub ethereum_amount_required: Wei,

    /// ETH that must remain after swapping for tokens, in wei
    #[serde(default)]
    pub ethereum_amount_required_after_swap: Wei,

    /// Token paid to Raiden services
    pub service_token: TokenSettings,

    /// Token used for payments
    pub transfer_token: TokenSettings,
}

/// Funding and swap thresholds for one token
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenSettings {
    pub ticker: String,

    /// Minimum balance, in base units
    pub amount_required: Wei,

    /// Amount to acquire when swapping, in base units
    pub swap_amount: Wei,

    /// Whether the token can be minted directly (test networks)
    #[serde(default)]
    pub mintable: bool,
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and parse a settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|source| ConfigError::io(path, source))?;
        let settings = Self::from_toml_str(&contents)?;
        debug!(
            path = %path.display(),
            network = %settings.network,
            contracts_version = %settings.contracts_version,
            "Loaded installer settings"
        );
        Ok(settings)
    }
}

fn default_contracts_version() -> String {
    DEFAULT_CONTRACTS_VERSION.to_string()
}
