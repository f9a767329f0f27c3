// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Currency and token amounts for the Raiden installer.
//!
//! - [`Currency`] and [`TokenCurrency`] describe ETH and the ERC20 tokens
//!   Raiden uses; [`registry`] resolves a token ticker to its deployment for
//!   a network and contracts release.
//! - [`Amount`] converts between whole units and wei, formats with SI
//!   prefixes and refuses arithmetic across currencies.
//! - [`RequiredAmounts`] and [`SwapAmounts`] wrap the thresholds from the
//!   installer's [`Settings`].
//!
//! # Example
//!
//! ```rust
//! use raiden_tokens::{registry, EthereumAmount, TokenAmount};
//!
//! let fee = EthereumAmount::parse_eth("0.0015")?;
//! assert_eq!(fee.formatted(), "0.0015 ETH");
//! assert_eq!(EthereumAmount::eth_wei(2_500_000_000u64).formatted(), "2.5 GWEI");
//!
//! let rdn = registry::resolve("RDN", "mainnet", "0.37.1")?;
//! let deposit = TokenAmount::from_units(3, rdn);
//! assert_eq!(deposit.formatted(), "3 RDN");
//! assert!(fee.try_add(&EthereumAmount::eth(1)).is_ok());
//! # Ok::<(), raiden_tokens::TokensError>(())
//! ```

mod amount;
mod config;
mod currency;
mod errors;
mod funding;
pub mod registry;
mod spans;
mod types;

pub use amount::{Amount, EthereumAmount, TokenAmount};
pub use config::{Settings, TokenSettings, DEFAULT_CONTRACTS_VERSION};
pub use currency::{Currency, Denomination, TokenCurrency, ETH};
pub use errors::{AmountError, ConfigError, TokenError, TokensError};
pub use funding::{RequiredAmounts, SwapAmounts};
pub use types::{TokenDecimals, Wei};
