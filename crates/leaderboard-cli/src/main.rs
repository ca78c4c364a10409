mod cli;
mod cli_utils;
mod commands;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG overrides the warn default
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("leaderboard_cli=warn,leaderboard_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let identity = cli_utils::open_identity(args.identity_file.as_deref())?;
    let board = args.board.leaderboard();

    match &args.command {
        Command::Whoami => commands::identity::whoami(&identity),
        Command::ResetIdentity => commands::identity::reset(&identity),
        Command::Top { count } => {
            let client = cli_utils::build_client(&args, identity)?;
            commands::top::run(&client, &board, *count).await
        }
        Command::Submit { value, count } => {
            let client = cli_utils::build_client(&args, identity)?;
            commands::submit::run(&client, &board, *value, *count).await
        }
        Command::Mine => {
            let client = cli_utils::build_client(&args, identity)?;
            commands::mine::run(&client, &board).await
        }
    }
}
