use clap::Parser;
use promptly::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => cli::generate::run(args).await,
        Command::Chat(args) => cli::chat::run(args).await,
        Command::Format(args) => cli::inspect::run_format(args).await,
        Command::Parse(args) => cli::inspect::run_parse(args).await,
    }
}
