use checkouts_backend::cli::{self, Cli};
use checkouts_backend::config::{init_logging, BootstrapSettings, LoggingConfig, SystemEnvironment};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging(&LoggingConfig::from_env_provider(&SystemEnvironment))?;

    let cli = Cli::parse();

    let settings = BootstrapSettings::from_env()?;
    tracing::debug!("Bootstrap settings: {:?}", settings);

    cli::execute_command(cli, &settings).await
}
