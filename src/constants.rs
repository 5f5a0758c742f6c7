//! Constants used in the deploy scripts

/// Default RPC endpoint of the BSC testnet profile
pub const TESTNET_RPC: &str = "https://data-seed-prebsc-1-s1.binance.org:8545";

/// Default RPC endpoint of the BSC mainnet profile
pub const MAINNET_RPC: &str = "https://bsc-dataseed.binance.org/";

/// Chain id of the BSC testnet
pub const TESTNET_CHAIN_ID: u64 = 97;

/// Chain id of the BSC mainnet
pub const MAINNET_CHAIN_ID: u64 = 56;

/// Explorer API endpoint for the testnet profile
pub const TESTNET_EXPLORER_API: &str = "https://api-testnet.bscscan.com/api";

/// Explorer API endpoint for the mainnet profile
pub const MAINNET_EXPLORER_API: &str = "https://api.bscscan.com/api";

/// Env var overriding the RPC endpoint of the selected profile
pub const RPC_URL_ENV_VAR: &str = "BSC_API_URL";

/// Env var holding the hex private key of the deployer
pub const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";

/// Env var holding the explorer API credential
pub const EXPLORER_API_KEY_ENV_VAR: &str = "BSCSCAN_API";

/// Default directory holding the compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Default path of the deployed addresses file
pub const DEFAULT_DEPLOYED_FILE: &str = "deployed.json";

/// Reward pool funding the staking contract
pub const DEFAULT_REWARD_POOL: &str = "0x4F499C43b8060FB794147B18cefec7D5Ad76107D";

/// Output file key of the ODON token
pub const ODON_KEY: &str = "odon";

/// Output file key of the USDC test token
pub const USDC_KEY: &str = "usdc";

/// Output file key of the USDT test token
pub const USDT_KEY: &str = "usdt";

/// Output file key of the BTC test token
pub const BTC_KEY: &str = "btc";

/// The test tokens, as (contract name, output file key) pairs,
/// in deployment order
pub const TOKEN_CONTRACTS: [(&str, &str); 4] = [
    ("ODONToken", ODON_KEY),
    ("USDCToken", USDC_KEY),
    ("USDTToken", USDT_KEY),
    ("BTCToken", BTC_KEY),
];

/// Contract name of the price oracle consumer
pub const PRICE_CONSUMER_CONTRACT: &str = "PriceConsumerV3";

/// Output file key of the price oracle consumer
pub const PRICE_CONSUMER_KEY: &str = "price_consumer";

/// Contract name of the loan contract
pub const LOAN_CONTRACT: &str = "Loan";

/// Output file key of the loan contract
pub const LOAN_KEY: &str = "loan";

/// Contract name of the CashP reward token
pub const CASHP_CONTRACT: &str = "CashP";

/// Output file key of the CashP reward token
pub const CASHP_KEY: &str = "cashp";

/// Contract name of the staking contract
pub const STAKING_CONTRACT: &str = "Staking";

/// Output file key of the staking contract
pub const STAKING_KEY: &str = "staking";
