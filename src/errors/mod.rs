// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the raiden-tokens library.
//!
//! Each concern has its own error type:
//! - [`TokenError`] - token construction and deployment lookup
//! - [`AmountError`] - amount parsing, arithmetic and comparison
//! - [`ConfigError`] - reading installer settings
//!
//! [`TokensError`] wraps all of them for callers that don't need to tell
//! the sources apart.
//!
//! # Examples
//!
//! ```rust
//! use raiden_tokens::{RequiredAmounts, Settings, TokensError};
//!
//! fn required_eth(settings_toml: &str) -> Result<String, TokensError> {
//!     let settings = Settings::from_toml_str(settings_toml)?;
//!     let required = RequiredAmounts::from_settings(&settings)?;
//!     Ok(required.eth.formatted())
//! }
//! ```

mod amount;
mod config;
mod token;

pub use amount::AmountError;
pub use config::ConfigError;
pub use token::TokenError;

/// Unified error type for all raiden-tokens operations.
///
/// Module-specific errors convert via `From`, so `?` propagates them.
#[derive(Debug, thiserror::Error)]
pub enum TokensError {
    /// Error from token construction or registry lookup.
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Error from amount handling.
    #[error("Amount error: {0}")]
    Amount(#[from] AmountError),

    /// Error from settings loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
