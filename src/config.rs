//! Network profiles and environment-backed configuration

use std::{
    env,
    fmt::{self, Display},
};

use clap::ValueEnum;

use crate::constants::{
    MAINNET_CHAIN_ID, MAINNET_EXPLORER_API, MAINNET_RPC, RPC_URL_ENV_VAR, TESTNET_CHAIN_ID,
    TESTNET_EXPLORER_API, TESTNET_RPC,
};

/// The named network profiles the scripts can deploy against
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Network {
    /// BSC testnet
    Testnet,
    /// BSC mainnet
    Mainnet,
}

impl Network {
    /// The chain id of the profile
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Testnet => TESTNET_CHAIN_ID,
            Network::Mainnet => MAINNET_CHAIN_ID,
        }
    }

    /// The static RPC endpoint of the profile
    pub fn default_rpc_url(&self) -> &'static str {
        match self {
            Network::Testnet => TESTNET_RPC,
            Network::Mainnet => MAINNET_RPC,
        }
    }

    /// The explorer API endpoint of the profile
    pub fn explorer_api_url(&self) -> &'static str {
        match self {
            Network::Testnet => TESTNET_EXPLORER_API,
            Network::Mainnet => MAINNET_EXPLORER_API,
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Testnet => write!(f, "testnet"),
            Network::Mainnet => write!(f, "mainnet"),
        }
    }
}

/// The resolved configuration of a network profile
#[derive(Clone, Debug)]
pub struct NetworkConfig {
    /// The selected profile
    pub network: Network,
    /// The RPC endpoint to submit transactions to
    pub rpc_url: String,
    /// The chain id the endpoint is expected to report
    pub chain_id: u64,
}

impl NetworkConfig {
    /// Resolves the profile against the static table, honoring the
    /// RPC endpoint override from the environment
    pub fn resolve(network: Network) -> Self {
        let rpc_url = env::var(RPC_URL_ENV_VAR)
            .unwrap_or_else(|_| network.default_rpc_url().to_string());

        Self {
            network,
            rpc_url,
            chain_id: network.chain_id(),
        }
    }

    /// The explorer API endpoint of the profile
    pub fn explorer_api_url(&self) -> &'static str {
        self.network.explorer_api_url()
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::{Network, NetworkConfig};
    use crate::constants::RPC_URL_ENV_VAR;

    #[test]
    fn network_table_matches_profiles() {
        assert_eq!(Network::Testnet.chain_id(), 97);
        assert_eq!(Network::Mainnet.chain_id(), 56);
        assert_eq!(
            Network::Testnet.default_rpc_url(),
            "https://data-seed-prebsc-1-s1.binance.org:8545"
        );
        assert_eq!(
            Network::Mainnet.default_rpc_url(),
            "https://bsc-dataseed.binance.org/"
        );
        assert_eq!(Network::Testnet.to_string(), "testnet");
        assert_eq!(Network::Mainnet.to_string(), "mainnet");
    }

    #[test]
    fn explorer_endpoints_differ_per_profile() {
        assert_ne!(
            Network::Testnet.explorer_api_url(),
            Network::Mainnet.explorer_api_url()
        );
    }

    #[test]
    fn rpc_url_env_override_replaces_only_the_url() {
        // Single test mutating the env var, to keep the override
        // checks serialized
        env::remove_var(RPC_URL_ENV_VAR);
        let config = NetworkConfig::resolve(Network::Testnet);
        assert_eq!(config.rpc_url, Network::Testnet.default_rpc_url());
        assert_eq!(config.chain_id, 97);

        env::set_var(RPC_URL_ENV_VAR, "http://localhost:8545");
        let config = NetworkConfig::resolve(Network::Mainnet);
        assert_eq!(config.rpc_url, "http://localhost:8545");
        assert_eq!(config.chain_id, 56);
        env::remove_var(RPC_URL_ENV_VAR);
    }
}
