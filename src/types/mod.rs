// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for base-unit quantities.
//!
//! This module provides newtype wrappers for:
//! - Integer amounts in a currency's smallest unit
//! - Decimal places separating base units from whole units

mod decimals;
mod wei;

// Note: Public types are re-exported from lib.rs, not here
pub use decimals::TokenDecimals;
pub use wei::Wei;
