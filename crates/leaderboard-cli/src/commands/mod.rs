//! CLI command implementations.
//!
//! Each leaderboard command prints the board header, shows a loading
//! indicator for the duration of the call, then prints the response as a
//! display list.

pub mod identity;
pub mod mine;
pub mod submit;
pub mod top;

use anyhow::Result;
use leaderboard_core::{Error, Leaderboard};
use tokio_util::sync::CancellationToken;

use crate::{cli_utils, render};

/// Run `call` on `board` with a loading indicator, failing on Ctrl-C.
pub async fn with_loading<F, R>(
    board: &Leaderboard,
    call: impl FnOnce(CancellationToken) -> F,
) -> Result<R>
where
    F: Future<Output = Option<R>>,
{
    let cancel = cli_utils::cancel_on_ctrlc()?;
    println!("{}", render::board_header(board));
    eprintln!("Loading...");
    Ok(completed(call(cancel).await)?)
}

fn completed<R>(response: Option<R>) -> leaderboard_core::Result<R> {
    response.ok_or(Error::Cancelled)
}
