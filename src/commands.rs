//! Implementations of the deploy scripts

use alloy::sol_types::SolValue;
use tracing::info;

use crate::{
    cli::{CheckPriceArgs, CheckVerificationArgs, DeployLoanArgs, DeployStakingArgs},
    config::NetworkConfig,
    constants::{
        BTC_KEY, CASHP_CONTRACT, CASHP_KEY, LOAN_CONTRACT, LOAN_KEY, ODON_KEY,
        PRICE_CONSUMER_CONTRACT, PRICE_CONSUMER_KEY, STAKING_CONTRACT, STAKING_KEY,
        TOKEN_CONTRACTS, USDC_KEY, USDT_KEY,
    },
    deploy::deploy_contract,
    errors::ScriptError,
    factory::get_contract_factory,
    output_writer::{write_output_file, OutputKeys},
    tx::{client::RpcProvider, reader::get_latest_price, sender::send_set_price_oracle},
    utils::{address_from_arg_or_file, parse_address},
    verify::check_verification_status,
};

/// Deploys the four test tokens in sequence, recording each address
pub async fn deploy_tokens(
    artifacts_dir: &str,
    deployed_file: &str,
    client: RpcProvider,
) -> Result<(), ScriptError> {
    for (contract, key) in TOKEN_CONTRACTS {
        let factory = get_contract_factory(artifacts_dir, contract)?;
        let address = deploy_contract(&factory, &[], client.clone()).await?;
        write_output_file(deployed_file, OutputKeys::Deployment { key }, address)?;
    }

    Ok(())
}

/// Deploys the price oracle consumer and the loan contract, then wires the
/// consumer address into the loan contract
pub async fn deploy_loan(
    args: DeployLoanArgs,
    artifacts_dir: &str,
    deployed_file: &str,
    client: RpcProvider,
) -> Result<(), ScriptError> {
    // Deploy the price oracle consumer
    let factory = get_contract_factory(artifacts_dir, PRICE_CONSUMER_CONTRACT)?;
    let price_consumer = deploy_contract(&factory, &[], client.clone()).await?;
    write_output_file(
        deployed_file,
        OutputKeys::Deployment {
            key: PRICE_CONSUMER_KEY,
        },
        price_consumer,
    )?;

    // Resolve the token addresses backing the loan book
    let odon = address_from_arg_or_file(args.odon.as_deref(), deployed_file, ODON_KEY)?;
    let usdc = address_from_arg_or_file(args.usdc.as_deref(), deployed_file, USDC_KEY)?;
    let usdt = address_from_arg_or_file(args.usdt.as_deref(), deployed_file, USDT_KEY)?;
    let btc = address_from_arg_or_file(args.btc.as_deref(), deployed_file, BTC_KEY)?;

    // Deploy the loan contract
    let factory = get_contract_factory(artifacts_dir, LOAN_CONTRACT)?;
    let ctor_args = (odon, usdc, usdt, btc).abi_encode_params();
    let loan = deploy_contract(&factory, &ctor_args, client.clone()).await?;
    write_output_file(deployed_file, OutputKeys::Deployment { key: LOAN_KEY }, loan)?;

    // Wire the oracle into the loan contract
    let tx_hash = send_set_price_oracle(loan, price_consumer, client).await?;
    write_output_file(
        deployed_file,
        OutputKeys::Tx {
            key: LOAN_KEY,
            tx_key: "set_price_oracle".to_string(),
        },
        tx_hash,
    )?;

    info!("PriceOracle deployed to: {:#x}", price_consumer);
    info!("Loan deployed to: {:#x}", loan);

    Ok(())
}

/// Deploys the CashP reward token and the staking contract bound to it
pub async fn deploy_staking(
    args: DeployStakingArgs,
    artifacts_dir: &str,
    deployed_file: &str,
    client: RpcProvider,
) -> Result<(), ScriptError> {
    // Deploy the reward token
    let factory = get_contract_factory(artifacts_dir, CASHP_CONTRACT)?;
    let cashp = deploy_contract(&factory, &[], client.clone()).await?;
    write_output_file(deployed_file, OutputKeys::Deployment { key: CASHP_KEY }, cashp)?;

    // Deploy the staking contract bound to the token and the reward pool
    let reward_pool = parse_address(&args.reward_pool)?;
    let factory = get_contract_factory(artifacts_dir, STAKING_CONTRACT)?;
    let ctor_args = (cashp, reward_pool).abi_encode_params();
    let staking = deploy_contract(&factory, &ctor_args, client).await?;
    write_output_file(
        deployed_file,
        OutputKeys::Deployment { key: STAKING_KEY },
        staking,
    )?;

    info!("Cashp deployed to: {:#x}", cashp);
    info!("Staking deployed to: {:#x}", staking);

    Ok(())
}

/// Reads the latest price from the deployed price oracle consumer
pub async fn check_price(
    args: CheckPriceArgs,
    deployed_file: &str,
    client: RpcProvider,
) -> Result<(), ScriptError> {
    let consumer =
        address_from_arg_or_file(args.consumer.as_deref(), deployed_file, PRICE_CONSUMER_KEY)?;

    let price = get_latest_price(consumer, client).await?;
    info!("Latest price from {:#x}: {}", consumer, price);

    Ok(())
}

/// Reports the explorer verification status of a deployed contract
pub async fn check_verification(
    args: CheckVerificationArgs,
    config: &NetworkConfig,
) -> Result<(), ScriptError> {
    let address = parse_address(&args.address)?;
    check_verification_status(config, address).await?;

    Ok(())
}
