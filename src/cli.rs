//! Definitions of CLI arguments and commands for deploy scripts

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::{
    commands::{check_price, check_verification, deploy_loan, deploy_staking, deploy_tokens},
    config::{Network, NetworkConfig},
    constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_DEPLOYED_FILE, DEFAULT_REWARD_POOL},
    errors::ScriptError,
    tx::client::RpcProvider,
};

/// Scripts for deploying & wiring the Odon lending and staking contracts
#[derive(Parser)]
pub struct Cli {
    /// Network profile to deploy against
    #[arg(short, long, value_enum, default_value_t = Network::Testnet)]
    pub network: Network,

    /// Directory holding the compiled contract artifacts
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: String,

    /// Path of the deployed addresses file
    #[arg(long, default_value = DEFAULT_DEPLOYED_FILE)]
    pub deployed_file: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The possible CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the four test tokens
    DeployTokens,
    /// Deploy the price oracle consumer and the loan contract, then wire
    /// them together
    DeployLoan(DeployLoanArgs),
    /// Deploy the CashP token and the staking contract
    DeployStaking(DeployStakingArgs),
    /// Read the latest price from the deployed price oracle consumer
    CheckPrice(CheckPriceArgs),
    /// Check the explorer verification status of a deployed contract
    CheckVerification(CheckVerificationArgs),
}

impl Command {
    /// Run the command
    pub async fn run(
        self,
        client: RpcProvider,
        config: &NetworkConfig,
        artifacts_dir: &str,
        deployed_file: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeployTokens => {
                info!("Deploying test tokens on {}...", config.network);
                deploy_tokens(artifacts_dir, deployed_file, client).await
            }
            Command::DeployLoan(args) => {
                info!("Deploying loan contracts on {}...", config.network);
                deploy_loan(args, artifacts_dir, deployed_file, client).await
            }
            Command::DeployStaking(args) => {
                info!("Deploying staking contracts on {}...", config.network);
                deploy_staking(args, artifacts_dir, deployed_file, client).await
            }
            Command::CheckPrice(args) => check_price(args, deployed_file, client).await,
            Command::CheckVerification(args) => check_verification(args, config).await,
        }
    }
}

/// Deploy the loan contract and its price oracle consumer
#[derive(Args)]
pub struct DeployLoanArgs {
    /// Address of the ODON token (defaults to the recorded deployment)
    #[arg(long)]
    pub odon: Option<String>,

    /// Address of the USDC test token (defaults to the recorded deployment)
    #[arg(long)]
    pub usdc: Option<String>,

    /// Address of the USDT test token (defaults to the recorded deployment)
    #[arg(long)]
    pub usdt: Option<String>,

    /// Address of the BTC test token (defaults to the recorded deployment)
    #[arg(long)]
    pub btc: Option<String>,
}

/// Deploy the staking contract and its reward token
#[derive(Args)]
pub struct DeployStakingArgs {
    /// Address of the reward pool funding the staking contract
    #[arg(short, long, default_value = DEFAULT_REWARD_POOL)]
    pub reward_pool: String,
}

/// Read the latest oracle price
#[derive(Args)]
pub struct CheckPriceArgs {
    /// Address of the price consumer (defaults to the recorded deployment)
    #[arg(short, long)]
    pub consumer: Option<String>,
}

/// Check a contract's explorer verification status
#[derive(Args)]
pub struct CheckVerificationArgs {
    /// Address of the contract to check
    #[arg(short, long)]
    pub address: String,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};
    use crate::{config::Network, constants::DEFAULT_REWARD_POOL};

    #[test]
    fn network_defaults_to_testnet() {
        let cli = Cli::try_parse_from(["odon-scripts", "deploy-tokens"]).unwrap();
        assert_eq!(cli.network, Network::Testnet);
        assert!(matches!(cli.command, Command::DeployTokens));
    }

    #[test]
    fn mainnet_profile_is_selectable() {
        let cli =
            Cli::try_parse_from(["odon-scripts", "--network", "mainnet", "deploy-tokens"]).unwrap();
        assert_eq!(cli.network, Network::Mainnet);
    }

    #[test]
    fn loan_token_overrides_parse() {
        let cli = Cli::try_parse_from([
            "odon-scripts",
            "deploy-loan",
            "--odon",
            "0x28D3d93f3223A2B80E32e37311D4cB7147DeC5Cd",
            "--usdc",
            "0x7A38D14fA901B9962df16300579f86B640413841",
        ])
        .unwrap();
        match cli.command {
            Command::DeployLoan(args) => {
                assert!(args.odon.is_some());
                assert!(args.usdc.is_some());
                assert!(args.usdt.is_none());
                assert!(args.btc.is_none());
            }
            _ => panic!("expected deploy-loan"),
        }
    }

    #[test]
    fn staking_reward_pool_has_a_default() {
        let cli = Cli::try_parse_from(["odon-scripts", "deploy-staking"]).unwrap();
        match cli.command {
            Command::DeployStaking(args) => {
                assert_eq!(args.reward_pool, DEFAULT_REWARD_POOL);
            }
            _ => panic!("expected deploy-staking"),
        }
    }

    #[test]
    fn unknown_network_is_rejected() {
        assert!(Cli::try_parse_from(["odon-scripts", "--network", "devnet", "deploy-tokens"])
            .is_err());
    }
}
