//! Personal best command.

use anyhow::Result;
use leaderboard_core::Leaderboard;

use super::with_loading;
use crate::cli_utils::Client;
use crate::render;

pub async fn run(client: &Client, board: &Leaderboard) -> Result<()> {
    let response = with_loading(board, |cancel| async move {
        client.my_top_record_cancellable(board, &cancel).await
    })
    .await?;

    render::print_items(&render::my_top_record(&response));
    Ok(())
}
