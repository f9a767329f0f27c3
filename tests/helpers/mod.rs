// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for raiden-tokens integration tests
//!
//! Provides settings fixtures and registry shortcuts so tests don't repeat
//! TOML blobs and lookups.

#![allow(dead_code)]

use std::io::Write;

use raiden_tokens::{registry, TokenCurrency};
use tempfile::NamedTempFile;

pub const CONTRACTS_VERSION: &str = "0.37.1";

/// Mainnet settings as the installer ships them
pub const MAINNET_SETTINGS: &str = r#"
network = "mainnet"
contracts_version = "0.37.1"
client_release_channel = "stable"
ethereum_amount_required = 30000000000000000
ethereum_amount_required_after_swap = 10000000000000000

[service_token]
ticker = "RDN"
amount_required = "12500000000000000000"
swap_amount = "15000000000000000000"

[transfer_token]
ticker = "DAI"
amount_required = "10000000000000000000"
swap_amount = "10000000000000000000"
"#;

/// Goerli settings with mintable test tokens
pub const GOERLI_SETTINGS: &str = r#"
network = "goerli"
ethereum_amount_required = 20000000000000000

[service_token]
ticker = "SVT"
amount_required = "5000000000000000000"
swap_amount = "5000000000000000000"
mintable = true

[transfer_token]
ticker = "WIZ"
amount_required = "10000000000000000000"
swap_amount = "10000000000000000000"
mintable = true
"#;

/// Install a test-writer subscriber so debug events show up in failing tests
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("raiden_tokens=trace"))
        .with_test_writer()
        .try_init();
}

/// Write settings TOML to a temporary file that lives as long as the handle
pub fn settings_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn mainnet_token(ticker: &str) -> TokenCurrency {
    registry::resolve(ticker, "mainnet", CONTRACTS_VERSION).unwrap()
}

pub fn goerli_token(ticker: &str) -> TokenCurrency {
    registry::resolve(ticker, "goerli", CONTRACTS_VERSION).unwrap()
}
