#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]
#![allow(clippy::print_stdout)]

use clap::Parser;
use oa_cli::{commands::Cli, config::Config, init_tracing};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Load and validate configuration first (fail-fast)
    let config = Config::load_from(&cli.config).map_err(|e| anyhow::anyhow!("{e}"))?;

    init_tracing(&config.logging.level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.api.base_url,
        "openaustralia starting up"
    );

    let client = config.api.build_client()?;
    let endpoint = cli.command.endpoint();
    let records = cli.command.run(&client).await?;

    tracing::info!(
        %endpoint,
        rows = records.as_array().map_or(0, Vec::len),
        "request complete"
    );
    println!("{}", serde_json::to_string_pretty(&records)?);

    Ok(())
}
