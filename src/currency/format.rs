// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! SI-scaled rendering of base-unit values
//!
//! Values of at least 10^15 base units are shown in whole units with the
//! display ticker. Smaller values are scaled by the largest matching SI
//! prefix (T = 10^12, G = 10^9, M = 10^6) in front of the base-unit ticker,
//! or shown as a raw base-unit count below 10^6. The fractional part keeps
//! three significant digits, rounded half-to-even.

use std::borrow::Cow;

use num::bigint::{BigInt, BigUint};
use num::{Integer, Signed, Zero};

use super::Currency;

/// Base-unit magnitude (as a power of ten) from which values render in whole units
const WHOLE_UNIT_EXPONENT: u32 = 15;

/// SI prefixes applied to the base-unit ticker, largest first
const SI_PREFIXES: [(u32, &str); 3] = [(12, "T"), (9, "G"), (6, "M")];

const SIGNIFICANT_FRACTION_DIGITS: usize = 3;

pub(crate) fn format_base_units(currency: &Currency, wei: &BigInt) -> String {
    if wei.is_zero() {
        return format!("0 {}", currency.ticker());
    }

    let magnitude = wei.magnitude();
    let (exponent, ticker): (u32, Cow<'_, str>) = if *magnitude >= pow10(WHOLE_UNIT_EXPONENT) {
        (
            u32::from(currency.decimals().as_u8()),
            Cow::Borrowed(currency.ticker()),
        )
    } else if let Some((exponent, prefix)) = SI_PREFIXES
        .iter()
        .find(|(exponent, _)| *magnitude >= pow10(*exponent))
    {
        (
            *exponent,
            Cow::Owned(format!("{prefix}{}", currency.wei_ticker())),
        )
    } else {
        (0, Cow::Borrowed(currency.wei_ticker()))
    };

    let (integral, remainder) = magnitude.div_rem(&pow10(exponent));
    let (integral, fraction) = round_fraction(integral, &remainder, exponent as usize);
    let sign = if wei.is_negative() { "-" } else { "" };

    format!("{sign}{integral}{fraction} {ticker}")
}

/// Render `remainder / 10^width` as ".ddd" with three significant digits.
///
/// Returns the integral part too, since rounding may carry into it.
fn round_fraction(integral: BigUint, remainder: &BigUint, width: usize) -> (BigUint, String) {
    if remainder.is_zero() {
        return (integral, String::new());
    }

    let leading_zeros = width - remainder.to_string().len();
    let keep = leading_zeros + SIGNIFICANT_FRACTION_DIGITS;
    if keep >= width {
        return (integral, dotted(&zero_padded(remainder, width)));
    }

    let divisor = pow10((width - keep) as u32);
    let (mut kept, rest) = remainder.div_rem(&divisor);
    let twice = rest * 2u32;
    if twice > divisor || (twice == divisor && kept.is_odd()) {
        kept += 1u32;
    }

    if kept == pow10(keep as u32) {
        return (integral + 1u32, String::new());
    }
    (integral, dotted(&zero_padded(&kept, keep)))
}

fn dotted(digits: &str) -> String {
    let trimmed = digits.trim_end_matches('0');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(".{trimmed}")
    }
}

fn zero_padded(value: &BigUint, width: usize) -> String {
    let digits = value.to_string();
    format!("{}{digits}", "0".repeat(width.saturating_sub(digits.len())))
}

fn pow10(exponent: u32) -> BigUint {
    BigUint::from(10u8).pow(exponent)
}
