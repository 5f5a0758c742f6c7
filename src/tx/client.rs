//! RPC client construction

use std::env;

use alloy::{
    hex,
    network::{Ethereum, EthereumWallet},
    primitives::B256,
    providers::{
        fillers::{ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, WalletFiller},
        Identity, Provider, ProviderBuilder, ReqwestProvider,
    },
    signers::local::PrivateKeySigner,
};
use reqwest::{Client, Url};
use tracing::info;

use crate::{config::NetworkConfig, constants::PRIVATE_KEY_ENV_VAR, errors::ScriptError};

/// Re-export from alloy recommend filler
type RecommendFiller =
    JoinFill<JoinFill<JoinFill<Identity, GasFiller>, NonceFiller>, ChainIdFiller>;

/// An alloy provider that signs with the deployer wallet & interfaces with
/// the RPC endpoint over HTTP
pub type RpcProvider = FillProvider<
    JoinFill<RecommendFiller, WalletFiller<EthereumWallet>>,
    ReqwestProvider,
    alloy::transports::http::Http<Client>,
    Ethereum,
>;

/// Builds the provider for the resolved network profile, reading the
/// deployer private key from the environment. Fails if the endpoint reports
/// a chain id other than the profile's.
pub async fn create_rpc_provider(config: &NetworkConfig) -> Result<RpcProvider, ScriptError> {
    // Read the deployer private key and map it to a B256
    let raw_key = env::var(PRIVATE_KEY_ENV_VAR)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let key_bytes = hex::decode(raw_key.trim_start_matches("0x"))
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let private_key = B256::try_from(key_bytes.as_slice())
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    // Create our signer
    let signer = PrivateKeySigner::from_bytes(&private_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let wallet = EthereumWallet::from(signer);

    let rpc_url = config
        .rpc_url
        .parse::<Url>()
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    // Create our provider with the rpc client + signer
    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_http(rpc_url);

    // The endpoint must agree with the static network table
    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    if chain_id != config.chain_id {
        return Err(ScriptError::ClientInitialization(format!(
            "endpoint reports chain id {} but the {} profile expects {}",
            chain_id, config.network, config.chain_id
        )));
    }

    info!("Built client on chain ID: {}", chain_id);

    Ok(provider)
}
