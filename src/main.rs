use clap::Parser;
use mongo_extractor::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Serve(args) => cli::serve::run(args).await,
        Command::Export(args) => cli::export::run(args).await,
    }
}
