//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Each test binary uses a subset of the fixtures

use std::path::Path;

use serde_json::{json, Value};

/// A complete configuration document covering all nine categories.
///
/// Every field the editor shows is present with a value whose type the
/// collector reproduces exactly, so `collect(render(doc))` equals `doc`.
pub fn sample_config() -> Value {
    json!({
        "SETTINGS": {
            "THREADS": 5,
            "ATTEMPTS": 3,
            "SHUFFLE_WALLETS": true,
            "WAIT_FOR_TRANSACTION_CONFIRMATION_IN_SECONDS": 120,
            "ACCOUNTS_RANGE": [0, 0],
            "EXACT_ACCOUNTS_TO_USE": [1, 3, 8],
            "PAUSE_BETWEEN_ATTEMPTS": [3, 10],
            "PAUSE_BETWEEN_SWAPS": [5, 30],
            "RANDOM_PAUSE_BETWEEN_ACCOUNTS": [5, 15],
            "RANDOM_PAUSE_BETWEEN_ACTIONS": [1, 5],
            "RANDOM_INITIALIZATION_PAUSE": [1, 30],
            "SEND_TELEGRAM_LOGS": false,
            "TELEGRAM_BOT_TOKEN": "1234567:bot-token",
            "TELEGRAM_USERS_IDS": [123456789],
        },
        "FLOW": {
            "SKIP_FAILED_TASKS": false,
        },
        "ZERO_EXCHANGE_SWAPS": {
            "BALANCE_PERCENT_TO_SWAP": [10, 30],
            "NUMBER_OF_SWAPS": [1, 3],
        },
        "CAPTCHA": {
            "SOLVIUM_API_KEY": "solvium-key-abc123",
            "NOCAPTCHA_API_KEY": "",
            "USE_NOCAPTCHA": false,
        },
        "RPCS": {
            "ZEROG": ["https://evmrpc-testnet.0g.ai"],
            "ARBITRUM": ["https://arb1.arbitrum.io/rpc", "https://rpc.ankr.com/arbitrum"],
        },
        "PUZZLEMANIA": {
            "USE_REFERRAL_CODE": true,
            "INVITES_PER_REFERRAL_CODE": [2, 4],
            "COLLECT_REFERRAL_CODE": false,
        },
        "CRUSTY_SWAP": {
            "NETWORKS_TO_REFUEL_FROM": ["Arbitrum", "Optimism"],
            "AMOUNT_TO_REFUEL": [0.0003, 0.0004],
            "MINIMUM_BALANCE_TO_REFUEL": 0.5,
            "WAIT_FOR_FUNDS_TO_ARRIVE": true,
            "MAX_WAIT_TIME": 999999,
            "BRIDGE_ALL": false,
            "BRIDGE_ALL_MAX_AMOUNT": 0.01,
        },
        "EXCHANGES": {
            "name": "OKX",
            "apiKey": "exchange-api-key",
            "secretKey": "exchange-secret-key",
            "passphrase": "exchange-passphrase",
            "withdrawals": [
                {
                    "currency": "ETH",
                    "networks": ["Arbitrum", "Base"],
                    "min_amount": 0.005,
                    "max_amount": 0.01,
                    "max_balance": 1.5,
                    "wait_for_funds": true,
                    "max_wait_time": 360,
                    "retries": 3,
                },
                {
                    "currency": "USDT",
                    "networks": ["Optimism"],
                    "min_amount": 5.5,
                    "max_amount": 10.5,
                    "max_balance": 100.5,
                    "wait_for_funds": false,
                    "max_wait_time": 60,
                    "retries": 1,
                },
            ],
        },
        "OTHERS": {
            "SKIP_SSL_VERIFICATION": true,
            "USE_PROXY_FOR_RPC": false,
        },
    })
}

/// Writes a configuration document as YAML to `path`.
pub fn write_config_file(doc: &Value, path: &Path) {
    let raw = serde_yml::to_string(doc).expect("Failed to serialize config");
    std::fs::write(path, raw).expect("Failed to write config file");
}
