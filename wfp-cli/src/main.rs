//! WFP CLI - Command line tool for the wildfire prediction service.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wfp-cli",
    version,
    about = "Wildfire prediction dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: wfp_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wfp_cmd::run(cli.command).await
}
