// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Settings loading and derived amount sets, end to end

mod helpers;

use raiden_tokens::{
    ConfigError, EthereumAmount, RequiredAmounts, Settings, SwapAmounts, TokenAmount, TokenError,
    TokensError, Wei, DEFAULT_CONTRACTS_VERSION,
};

use helpers::{goerli_token, init_tracing, mainnet_token, settings_file, GOERLI_SETTINGS, MAINNET_SETTINGS};

#[test]
fn test_mainnet_required_amounts_from_file() {
    init_tracing();
    let file = settings_file(MAINNET_SETTINGS);
    let settings = Settings::load(file.path()).unwrap();

    let required = RequiredAmounts::from_settings(&settings).unwrap();

    assert_eq!(required.eth, EthereumAmount::parse_eth("0.03").unwrap());
    assert_eq!(required.eth_after_swap.formatted(), "0.01 ETH");
    assert_eq!(
        required.service_token,
        TokenAmount::parse_units("12.5", mainnet_token("RDN")).unwrap()
    );
    assert_eq!(required.transfer_token.formatted(), "10 DAI");
    assert_eq!(required.transfer_token.address(), mainnet_token("DAI").address());
}

#[test]
fn test_mainnet_swap_amounts_from_file() {
    init_tracing();
    let file = settings_file(MAINNET_SETTINGS);
    let settings = Settings::load(file.path()).unwrap();

    let swap = SwapAmounts::from_settings(&settings).unwrap();

    assert_eq!(swap.service_token.formatted(), "15 RDN");
    assert_eq!(swap.transfer_token.as_wei(), Wei::from(10_000_000_000_000_000_000u128));
}

#[test]
fn test_goerli_defaults_to_current_contracts() {
    init_tracing();
    let settings = Settings::from_toml_str(GOERLI_SETTINGS).unwrap();
    assert_eq!(settings.contracts_version, DEFAULT_CONTRACTS_VERSION);
    assert!(settings.transfer_token.mintable);

    let required = RequiredAmounts::from_settings(&settings).unwrap();
    assert_eq!(required.service_token.address(), goerli_token("SVT").address());
    assert_eq!(required.eth_after_swap, EthereumAmount::eth(0));

    let swap = SwapAmounts::from_settings(&settings).unwrap();
    assert_eq!(swap.transfer_token.formatted(), "10 WIZ");
}

#[test]
fn test_required_balance_check() {
    let settings = Settings::from_toml_str(MAINNET_SETTINGS).unwrap();
    let required = RequiredAmounts::from_settings(&settings).unwrap();

    let balance = EthereumAmount::parse_eth("0.025").unwrap();
    assert!(balance.less_than(&required.eth).unwrap());

    let topped_up = balance.try_add(&EthereumAmount::parse_eth("0.005").unwrap()).unwrap();
    assert!(topped_up.greater_or_equal(&required.eth).unwrap());

    // ETH and tokens never compare
    let rdn_balance = TokenAmount::from_units(20, mainnet_token("RDN"));
    assert!(rdn_balance.greater_than(&required.service_token).unwrap());
    assert!(rdn_balance.less_than(&required.transfer_token).is_err());
}

#[test]
fn test_older_contracts_lack_service_token() {
    let settings = Settings::from_toml_str(
        &GOERLI_SETTINGS.replace("network = \"goerli\"", "network = \"goerli\"\ncontracts_version = \"0.36.2\""),
    )
    .unwrap();

    let err = RequiredAmounts::from_settings(&settings).unwrap_err();
    assert_eq!(err, TokenError::not_deployed("SVT", "goerli"));
    assert_eq!(err.to_string(), "SVT is not deployed on goerli");
}

#[test]
fn test_errors_unify_through_question_mark() {
    fn required_eth(path: &std::path::Path) -> Result<String, TokensError> {
        let settings = Settings::load(path)?;
        Ok(RequiredAmounts::from_settings(&settings)?.eth.formatted())
    }

    let file = settings_file(MAINNET_SETTINGS);
    assert_eq!(required_eth(file.path()).unwrap(), "0.03 ETH");

    let broken = settings_file("network = ");
    assert!(matches!(
        required_eth(broken.path()),
        Err(TokensError::Config(ConfigError::Parse(_)))
    ));

    let wrong_network = settings_file(&MAINNET_SETTINGS.replace("\"mainnet\"", "\"kovan\""));
    assert!(matches!(
        required_eth(wrong_network.path()),
        Err(TokensError::Token(TokenError::NotDeployed { .. }))
    ));
}
