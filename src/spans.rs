// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for raiden-tokens operations.
//!
//! Telemetry is kept out of the business logic: each instrumented operation
//! has a span helper here instead of an `#[instrument]` attribute.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use alloy_chains::NamedChain;
use tracing::Span;

/// Create span for looking up a token deployment in the catalog.
///
/// Parent: amounts_from_settings span, or None when called directly
#[inline]
pub(crate) fn resolve_token(ticker: &str, chain: NamedChain, contracts_version: &str) -> Span {
    tracing::trace_span!(
        "raiden_tokens.resolve_token",
        ticker = ticker,
        network = %chain,
        contracts_version = contracts_version,
    )
}

/// Create span for building a derived amount set from installer settings.
///
/// Parent: None (root span for this operation)
/// Children: resolve_token spans (one per token)
#[inline]
pub(crate) fn amounts_from_settings(kind: &'static str, network: &str) -> Span {
    tracing::debug_span!(
        "raiden_tokens.amounts_from_settings",
        kind = kind,
        network = network,
    )
}
