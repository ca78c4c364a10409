//! Leaderboard client core.
//!
//! Every operation follows the same protocol: build a request payload, POST
//! it through the [`Transport`], then either decode the body into the typed
//! response or fall back to the response's `failed()` variant. Transport and
//! decode failures are indistinguishable to callers; both are logged.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::config::{ClientConfig, endpoints, headers};
use crate::error::{Error, Result};
use crate::identity::IdentityStore;
use crate::leaderboard::Leaderboard;
use crate::models::{
    AddRecordResponse, CreateRecordRequest, LeaderboardResponse, MyTopRecordRequest,
    MyTopRecordResponse, Record, TopRecordsRequest, TopRecordsResponse,
};
use crate::network::Transport;

pub struct LeaderboardClient<T: Transport> {
    transport: T,
    config: ClientConfig,
    identity: Arc<IdentityStore>,
}

impl<T: Transport> LeaderboardClient<T> {
    pub fn new(transport: T, config: ClientConfig, identity: Arc<IdentityStore>) -> Self {
        Self {
            transport,
            config,
            identity,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn identity(&self) -> &IdentityStore {
        &self.identity
    }

    /// Whether `record` belongs to the current user.
    pub fn is_current_user(&self, record: &Record) -> bool {
        record.is_current_user(&self.identity.current_user_id())
    }

    /// Fetch the best `count` records of `board`, in rank order.
    pub async fn top_records(&self, board: &Leaderboard, count: u32) -> TopRecordsResponse {
        let payload = TopRecordsRequest {
            app_id: &self.config.app_id,
            leaderboard_id: &board.id,
            num_records: count,
        };
        self.call(endpoints::TOP_RECORDS, board, &payload).await
    }

    /// Submit `value` for the current user.
    ///
    /// The response carries the user's best record and up to `display_count`
    /// neighbouring records. Not idempotent: every call creates a record.
    pub async fn submit_record(
        &self,
        board: &Leaderboard,
        value: f64,
        display_count: u32,
    ) -> AddRecordResponse {
        let user_id = self.identity.current_user_id();
        let payload = CreateRecordRequest {
            app_id: &self.config.app_id,
            leaderboard_id: &board.id,
            user_id: &user_id,
            value,
            num_records: display_count,
        };
        self.call(endpoints::CREATE_RECORD, board, &payload).await
    }

    /// Fetch the current user's best record on `board`.
    pub async fn my_top_record(&self, board: &Leaderboard) -> MyTopRecordResponse {
        let user_id = self.identity.current_user_id();
        let payload = MyTopRecordRequest {
            app_id: &self.config.app_id,
            leaderboard_id: &board.id,
            user_id: &user_id,
        };
        self.call(endpoints::MY_TOP_RECORD, board, &payload).await
    }

    /// [`top_records`](Self::top_records), or `None` if `cancel` fires first.
    pub async fn top_records_cancellable(
        &self,
        board: &Leaderboard,
        count: u32,
        cancel: &CancellationToken,
    ) -> Option<TopRecordsResponse> {
        cancellable(cancel, self.top_records(board, count)).await
    }

    /// [`submit_record`](Self::submit_record), or `None` if `cancel` fires first.
    ///
    /// A cancelled submission may still reach the server if the request was
    /// already sent.
    pub async fn submit_record_cancellable(
        &self,
        board: &Leaderboard,
        value: f64,
        display_count: u32,
        cancel: &CancellationToken,
    ) -> Option<AddRecordResponse> {
        cancellable(cancel, self.submit_record(board, value, display_count)).await
    }

    /// [`my_top_record`](Self::my_top_record), or `None` if `cancel` fires first.
    pub async fn my_top_record_cancellable(
        &self,
        board: &Leaderboard,
        cancel: &CancellationToken,
    ) -> Option<MyTopRecordResponse> {
        cancellable(cancel, self.my_top_record(board)).await
    }

    async fn call<P, R>(&self, path: &str, board: &Leaderboard, payload: &P) -> R
    where
        P: Serialize,
        R: DeserializeOwned + LeaderboardResponse,
    {
        let body = match self.send_request(path, board, payload).await {
            Ok(body) => body,
            Err(e) => {
                warn!("{} on {} failed: {}", path, board.id, e);
                return R::failed();
            }
        };

        match serde_json::from_str::<R>(&body) {
            Ok(response) => response,
            Err(e) => {
                warn!("{} on {} returned an undecodable body: {}", path, board.id, e);
                R::failed()
            }
        }
    }

    async fn send_request<P: Serialize>(
        &self,
        path: &str,
        board: &Leaderboard,
        payload: &P,
    ) -> Result<String> {
        let url = self.config.endpoint(path);
        let json = serde_json::to_string(payload).map_err(Error::Json)?;
        debug!("POST {} (leaderboard {})", url, board.id);

        let request_headers = [
            (headers::TOKEN, self.config.api_token.as_str()),
            (headers::CONTENT_TYPE, headers::JSON),
        ];
        self.transport.post(&url, &request_headers, json).await
    }
}

async fn cancellable<F>(cancel: &CancellationToken, call: F) -> Option<F::Output>
where
    F: Future,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!("Request cancelled");
            None
        }
        response = call => Some(response),
    }
}

impl<T: Transport + std::fmt::Debug> std::fmt::Debug for LeaderboardClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeaderboardClient")
            .field("transport", &self.transport)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
