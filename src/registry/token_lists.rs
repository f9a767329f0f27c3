// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Compiled-in token deployment catalog
//!
//! One list per Raiden contracts release that moved token deployments, plus
//! the default list used for every other release.

use alloy_chains::NamedChain;
use alloy_primitives::{address, Address};

/// Catalog entry: a ticker pair and where the token is deployed
#[derive(Debug, Clone, Copy)]
pub(crate) struct TokenData {
    pub(crate) ticker: &'static str,
    pub(crate) wei_ticker: &'static str,
    pub(crate) addresses: &'static [(NamedChain, Address)],
}

impl TokenData {
    pub(crate) fn address_on(&self, chain: NamedChain) -> Option<Address> {
        self.addresses
            .iter()
            .find(|(deployed_on, _)| *deployed_on == chain)
            .map(|(_, address)| *address)
    }

    const fn with_addresses(self, addresses: &'static [(NamedChain, Address)]) -> Self {
        Self {
            ticker: self.ticker,
            wei_ticker: self.wei_ticker,
            addresses,
        }
    }
}

/// Raiden Network Token, same mainnet contract in every release
pub(crate) const RDN_MAINNET: Address = address!("255aa6df07540cb5d3d297f0d0d4d84cb52bc8e6");

const RDN: TokenData = TokenData {
    ticker: "RDN",
    wei_ticker: "REI",
    addresses: &[
        (NamedChain::Mainnet, RDN_MAINNET),
        (NamedChain::Goerli, address!("709118121a1cca0f32fc2c0c59752e8fee3c2834")),
        (NamedChain::Ropsten, address!("5422ef695ed0b1213e2b953cfa877029637d9d26")),
        (NamedChain::Rinkeby, address!("51892e7e4085df269de688b273209f3969f547e0")),
        (NamedChain::Kovan, address!("3a03155696708f517c53ffc4f696dfbfa7743795")),
    ],
};

const DAI: TokenData = TokenData {
    ticker: "DAI",
    wei_ticker: "DEI",
    addresses: &[
        (NamedChain::Mainnet, address!("6b175474e89094c44da98b954eedeac495271d0f")),
        (NamedChain::Kovan, address!("4f96fe3b7a6cf9725f59d353f723c1bdb64ca6aa")),
        (NamedChain::Rinkeby, address!("c3dbf84abb494ce5199d5d4d815b10ec29529ff8")),
    ],
};

const WIZ: TokenData = TokenData {
    ticker: "WIZ",
    wei_ticker: "WEI",
    addresses: &[(NamedChain::Goerli, address!("95b2d84de40a0121061b105e6b54016a49621b44"))],
};

const SVT: TokenData = TokenData {
    ticker: "SVT",
    wei_ticker: "SEI",
    addresses: &[(NamedChain::Goerli, address!("5fc523e13fbac2140f056ad7a96de2cc0c4cc63a"))],
};

pub(crate) const DEFAULT_TOKENS: &[TokenData] = &[RDN, DAI, WIZ];

const RDN_V25: &[(NamedChain, Address)] = &[
    (NamedChain::Mainnet, RDN_MAINNET),
    (NamedChain::Goerli, address!("3a989d97388a39a0b5796306c615d10b7416be77")),
];

const RDN_V33: &[(NamedChain, Address)] = &[
    (NamedChain::Mainnet, RDN_MAINNET),
    (NamedChain::Goerli, address!("709118121a1cca0f32fc2c0c59752e8fee3c2834")),
];

const RDN_V36: &[(NamedChain, Address)] = &[
    (NamedChain::Mainnet, RDN_MAINNET),
    (NamedChain::Goerli, address!("4074fd4d460d0c31cbedc3f59b2d98626d063952")),
];

const RDN_V37: &[(NamedChain, Address)] = &[
    (NamedChain::Mainnet, RDN_MAINNET),
    (NamedChain::Rinkeby, address!("2488c9445b405e0fbbd60e89813f8b8652973737")),
];

const TOKENS_V25: &[TokenData] = &[RDN.with_addresses(RDN_V25)];

const TOKENS_V33: &[TokenData] = &[RDN.with_addresses(RDN_V33), DAI, WIZ];

const TOKENS_V36: &[TokenData] = &[RDN.with_addresses(RDN_V36), DAI, WIZ];

const TOKENS_V37: &[TokenData] = &[RDN.with_addresses(RDN_V37), SVT, DAI, WIZ];

/// Token lists keyed by `major.minor` contracts version, checked in order
pub(crate) const VERSIONED_TOKENS: &[(&str, &[TokenData])] = &[
    ("0.25", TOKENS_V25),
    ("0.33", TOKENS_V33),
    ("0.36", TOKENS_V36),
    ("0.37", TOKENS_V37),
];
