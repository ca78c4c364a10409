//! Submit command: add a record, then show the records around it.

use anyhow::Result;
use leaderboard_core::Leaderboard;

use super::with_loading;
use crate::cli_utils::Client;
use crate::render;

pub async fn run(client: &Client, board: &Leaderboard, value: f64, count: u32) -> Result<()> {
    let response = with_loading(board, |cancel| async move {
        client
            .submit_record_cancellable(board, value, count, &cancel)
            .await
    })
    .await?;

    let current_user_id = client.identity().current_user_id();
    render::print_items(&render::add_record(&response, value, &current_user_id));
    Ok(())
}
