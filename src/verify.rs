//! Block explorer verification-status integration

use std::env;

use alloy::primitives::Address;
use tracing::info;

use crate::{config::NetworkConfig, constants::EXPLORER_API_KEY_ENV_VAR, errors::ScriptError};

/// Queries the explorer API for the ABI of the given contract, reporting
/// whether its source is verified. Keyed by the explorer API credential from
/// the environment.
pub async fn check_verification_status(
    config: &NetworkConfig,
    address: Address,
) -> Result<bool, ScriptError> {
    let api_key = env::var(EXPLORER_API_KEY_ENV_VAR)
        .map_err(|e| ScriptError::ExplorerApi(e.to_string()))?;

    let url = format!(
        "{}?module=contract&action=getabi&address={:#x}&apikey={}",
        config.explorer_api_url(),
        address,
        api_key
    );

    let body = reqwest::get(&url)
        .await
        .map_err(|e| ScriptError::ExplorerApi(e.to_string()))?
        .text()
        .await
        .map_err(|e| ScriptError::ExplorerApi(e.to_string()))?;

    let parsed = json::parse(&body).map_err(|e| ScriptError::ExplorerApi(e.to_string()))?;

    // The explorer answers status "1" with the ABI for verified sources,
    // status "0" with an explanatory message otherwise
    let verified = parsed["status"].as_str() == Some("1");
    if verified {
        info!("Contract {:#x} is verified on {}", address, config.network);
    } else {
        let message = parsed["result"].as_str().unwrap_or("unknown explorer answer");
        info!(
            "Contract {:#x} is not verified on {}: {}",
            address, config.network, message
        );
    }

    Ok(verified)
}
