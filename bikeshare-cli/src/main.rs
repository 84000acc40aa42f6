//! bikeshare-cli - Command line tool for aggregating bike share rental data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bikeshare-cli",
    version,
    about = "Bike share rental data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: bikeshare_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    bikeshare_cmd::run(cli.command)
}
