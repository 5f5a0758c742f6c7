//! Deploying a contract from its factory

use alloy::{
    network::TransactionBuilder, primitives::Address, providers::Provider,
    rpc::types::eth::TransactionRequest,
};
use tracing::info;

use crate::{errors::ScriptError, factory::ContractFactory, tx::client::RpcProvider};

/// Deploys the given contract, suspending until the network confirms the
/// deployment transaction, and returns the assigned address
pub async fn deploy_contract(
    factory: &ContractFactory,
    ctor_args: &[u8],
    client: RpcProvider,
) -> Result<Address, ScriptError> {
    // Build the deployment tx
    let tx_request = TransactionRequest::default().with_deploy_code(factory.deploy_code(ctor_args));

    // Send it
    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
    info!(
        "Pending {} deployment... {}",
        factory.name,
        pending_tx.tx_hash()
    );

    // Wait for the transaction to be included.
    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    let address = receipt.contract_address.ok_or_else(|| {
        ScriptError::ContractDeployment(format!("no contract address in {} receipt", factory.name))
    })?;

    info!("{} deployed to: {:#x}", factory.name, address);

    Ok(address)
}
