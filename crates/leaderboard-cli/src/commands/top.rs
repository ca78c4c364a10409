//! Top records command.

use anyhow::Result;
use leaderboard_core::Leaderboard;

use super::with_loading;
use crate::cli_utils::Client;
use crate::render;

pub async fn run(client: &Client, board: &Leaderboard, count: u32) -> Result<()> {
    let response = with_loading(board, |cancel| async move {
        client.top_records_cancellable(board, count, &cancel).await
    })
    .await?;

    render::print_items(&render::top_records(&response));
    Ok(())
}
