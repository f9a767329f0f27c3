// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for amount construction, arithmetic and comparison.

/// Errors that can occur when building or combining amounts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// Two amounts of different currencies were added, subtracted or ordered.
    ///
    /// Always a programming error. Both operands are carried in their
    /// formatted form for diagnostics.
    #[error("Cannot {operation} {left} and {right}")]
    CurrencyMismatch {
        /// The attempted operation ("add", "subtract", "compare")
        operation: &'static str,
        /// Formatted left operand
        left: String,
        /// Formatted right operand
        right: String,
    },

    /// A whole-unit value could not be read as a decimal number.
    #[error("Invalid amount {value:?}: {details}")]
    InvalidValue {
        /// The rejected input, as text
        value: String,
        /// Why it was rejected
        details: String,
    },

    /// A base-unit value does not fit the unsigned 256-bit on-chain range.
    #[error("Base-unit value {value} is out of range: {details}")]
    OutOfRange {
        /// The offending base-unit value
        value: String,
        /// Why it does not fit
        details: String,
    },
}

impl AmountError {
    /// Create a `CurrencyMismatch` error from two displayable operands.
    pub fn currency_mismatch(
        operation: &'static str,
        left: impl std::fmt::Display,
        right: impl std::fmt::Display,
    ) -> Self {
        AmountError::CurrencyMismatch {
            operation,
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Create an `InvalidValue` error with details.
    pub fn invalid_value(value: impl Into<String>, details: impl Into<String>) -> Self {
        AmountError::InvalidValue {
            value: value.into(),
            details: details.into(),
        }
    }

    /// Create an `OutOfRange` error with details.
    pub fn out_of_range(value: impl std::fmt::Display, details: impl Into<String>) -> Self {
        AmountError::OutOfRange {
            value: value.to_string(),
            details: details.into(),
        }
    }
}
