//! State-changing contract calls

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, TxHash, U256},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
};
use tracing::info;

use crate::{
    errors::ScriptError,
    tx::{abi::setPriceOracleCall, client::RpcProvider},
};

/// Wires the price oracle consumer into the loan contract
pub async fn send_set_price_oracle(
    loan: Address,
    oracle: Address,
    client: RpcProvider,
) -> Result<TxHash, ScriptError> {
    // Build the tx
    let tx_request = TransactionRequest::default()
        .to(loan)
        .with_call(&setPriceOracleCall { oracle })
        .with_value(U256::from(0));

    // Send it
    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    info!("Pending setPriceOracle transaction... {}", pending_tx.tx_hash());

    // Wait for the transaction to be included.
    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    if let Some(block_number) = receipt.block_number {
        info!("setPriceOracle tx done on block: {}", block_number);
    }

    Ok(receipt.transaction_hash)
}
