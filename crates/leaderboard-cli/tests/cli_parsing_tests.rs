//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without executing the commands (which would need the remote service).

use std::path::PathBuf;

use clap::Parser;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "leaderboard")]
struct Args {
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    #[arg(long)]
    base_url: Option<String>,
    #[arg(long)]
    app_id: Option<String>,
    #[arg(long)]
    api_token: Option<String>,
    #[arg(long, value_name = "FILE")]
    identity_file: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value = "lower")]
    board: BoardArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Top {
        #[arg(short = 'n', long, default_value = "10")]
        count: u32,
    },
    Submit {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(short = 'n', long, default_value = "10")]
        count: u32,
    },
    Mine,
    Whoami,
    ResetIdentity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum BoardArg {
    Higher,
    Lower,
}

#[test]
fn test_subcommand_required() {
    assert!(Args::try_parse_from(["leaderboard"]).is_err());
}

#[test]
fn test_parse_top_defaults() {
    let args = Args::try_parse_from(["leaderboard", "top"]).unwrap();
    assert_eq!(args.board, BoardArg::Lower);
    assert!(args.config.is_none());
    match args.command {
        Command::Top { count } => assert_eq!(count, 10),
        _ => panic!("Expected Top command"),
    }
}

#[test]
fn test_parse_top_with_count_and_board() {
    let args =
        Args::try_parse_from(["leaderboard", "--board", "higher", "top", "-n", "3"]).unwrap();
    assert_eq!(args.board, BoardArg::Higher);
    match args.command {
        Command::Top { count } => assert_eq!(count, 3),
        _ => panic!("Expected Top command"),
    }
}

#[test]
fn test_parse_submit() {
    let args = Args::try_parse_from(["leaderboard", "submit", "42.5", "--count", "5"]).unwrap();
    match args.command {
        Command::Submit { value, count } => {
            assert_eq!(value, 42.5);
            assert_eq!(count, 5);
        }
        _ => panic!("Expected Submit command"),
    }
}

#[test]
fn test_parse_submit_negative_value() {
    let args = Args::try_parse_from(["leaderboard", "submit", "-3"]).unwrap();
    match args.command {
        Command::Submit { value, count } => {
            assert_eq!(value, -3.0);
            assert_eq!(count, 10);
        }
        _ => panic!("Expected Submit command"),
    }
}

#[test]
fn test_parse_submit_requires_value() {
    assert!(Args::try_parse_from(["leaderboard", "submit"]).is_err());
    assert!(Args::try_parse_from(["leaderboard", "submit", "fast"]).is_err());
}

#[test]
fn test_parse_connection_flags() {
    let args = Args::try_parse_from([
        "leaderboard",
        "--config",
        "client.toml",
        "--base-url",
        "https://example.test",
        "--app-id",
        "com.example",
        "--api-token",
        "secret",
        "--identity-file",
        "id.json",
        "mine",
    ])
    .unwrap();

    assert_eq!(args.config, Some(PathBuf::from("client.toml")));
    assert_eq!(args.base_url.as_deref(), Some("https://example.test"));
    assert_eq!(args.app_id.as_deref(), Some("com.example"));
    assert_eq!(args.api_token.as_deref(), Some("secret"));
    assert_eq!(args.identity_file, Some(PathBuf::from("id.json")));
    assert!(matches!(args.command, Command::Mine));
}

#[test]
fn test_parse_identity_commands() {
    let args = Args::try_parse_from(["leaderboard", "whoami"]).unwrap();
    assert!(matches!(args.command, Command::Whoami));

    let args = Args::try_parse_from(["leaderboard", "reset-identity"]).unwrap();
    assert!(matches!(args.command, Command::ResetIdentity));
}

#[test]
fn test_parse_invalid_board() {
    assert!(Args::try_parse_from(["leaderboard", "--board", "middle", "top"]).is_err());
}
