//! Read-only contract calls

use alloy::primitives::{Address, I256};

use crate::{
    errors::ScriptError,
    tx::{abi::IPriceConsumerV3, client::RpcProvider},
};

/// Gets the latest price reported by the deployed price oracle consumer
pub async fn get_latest_price(
    contract_address: Address,
    client: RpcProvider,
) -> Result<I256, ScriptError> {
    // Build our contract
    let contract = IPriceConsumerV3::new(contract_address, client);

    // Read the smart contract
    let price = contract
        .getLatestPrice()
        .call()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    Ok(price._0)
}
