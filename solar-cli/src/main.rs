//! Solar CLI - probe the solar map backend from a terminal.

use clap::Parser;
use solar_core::config::{ApiConfig, DEFAULT_API_BASE_URL};

#[derive(Parser)]
#[command(
    name = "solar-cli",
    version,
    about = "Thailand solar map backend probe"
)]
struct Cli {
    /// Backend base URL
    #[arg(long, default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: solar_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    solar_cmd::run(cli.command, ApiConfig::new(cli.base_url)).await
}
