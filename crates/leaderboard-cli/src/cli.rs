//! CLI argument definitions for leaderboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use leaderboard_core::Leaderboard;

#[derive(Parser)]
#[command(name = "leaderboard")]
#[command(about = "Leaderboard demo client", version)]
pub struct Args {
    /// Load client settings from a TOML file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// API base URL (overrides config and LEADERBOARD_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Application id (overrides config and LEADERBOARD_APP_ID)
    #[arg(long)]
    pub app_id: Option<String>,

    /// API token (overrides config and LEADERBOARD_API_TOKEN)
    #[arg(long)]
    pub api_token: Option<String>,

    /// Identity file (defaults to the platform data directory)
    #[arg(long, value_name = "FILE")]
    pub identity_file: Option<PathBuf>,

    /// Leaderboard to operate on
    #[arg(short, long, value_enum, default_value = "lower")]
    pub board: BoardArg,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the top records of the leaderboard
    Top {
        /// Number of records to fetch
        #[arg(short = 'n', long, default_value = "10")]
        count: u32,
    },
    /// Submit a record and show the records around it
    Submit {
        /// Value to submit
        #[arg(allow_negative_numbers = true, value_parser = parse_finite)]
        value: f64,
        /// Number of neighbouring records to show
        #[arg(short = 'n', long, default_value = "10")]
        count: u32,
    },
    /// Show your best record on the leaderboard
    Mine,
    /// Print the current user id
    Whoami,
    /// Replace the current user id with a new one
    ResetIdentity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BoardArg {
    Higher,
    Lower,
}

impl BoardArg {
    pub fn leaderboard(self) -> Leaderboard {
        match self {
            Self::Higher => Leaderboard::higher_is_better(),
            Self::Lower => Leaderboard::lower_is_better(),
        }
    }
}

/// Parse a submittable value; NaN and infinities have no JSON form.
fn parse_finite(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{} is not a finite number", s))
    }
}
