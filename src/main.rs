use clap::Parser;
use dotenv::dotenv;
use odon_scripts::{
    cli::Cli, config::NetworkConfig, errors::ScriptError, tx::client::create_rpc_provider,
};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    // Load .env file
    dotenv().ok();

    let Cli {
        network,
        artifacts,
        deployed_file,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    // Resolve the network profile (RPC endpoint + chain id)
    let config = NetworkConfig::resolve(network);

    // Build our RPC client with signer
    let client = create_rpc_provider(&config).await?;

    command.run(client, &config, &artifacts, &deployed_file).await
}
