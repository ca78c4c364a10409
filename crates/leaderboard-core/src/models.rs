//! Wire payloads of the leaderboard service.
//!
//! Request payloads are crate-internal. Response payloads decode straight
//! from the server body; `is_error` never comes from the wire and is set
//! only by [`LeaderboardResponse::failed`].

use serde::{Deserialize, Deserializer, Serialize};

/// Discriminator value of a finished [`MyTopRecordResponse`].
pub const TYPE_FINISHED: &str = "finished";

/// Discriminator value of an [`AddRecordResponse`] that set a personal best.
pub const TYPE_TOP_RECORD: &str = "top_record";

/// One scored entry on a leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Owner of the record.
    pub user_id: String,
    /// Id of the record itself.
    pub unique_id: String,
    pub value: f64,
    /// 1-based rank, 1 being the best.
    pub place: u32,
}

impl Record {
    /// Whether this record belongs to `current_user_id`.
    pub fn is_current_user(&self, current_user_id: &str) -> bool {
        self.user_id == current_user_id
    }
}

/// Decode a list where the server may send `null` for "no records".
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Record>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Record>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Shared behaviour of every operation's response.
pub trait LeaderboardResponse: Sized {
    /// The empty payload returned when the call failed.
    fn failed() -> Self;

    fn is_error(&self) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TopRecordsResponse {
    #[serde(skip)]
    pub is_error: bool,
    /// Records in server rank order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub records: Vec<Record>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MyTopRecordResponse {
    #[serde(skip)]
    pub is_error: bool,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    record: Option<Record>,
}

impl MyTopRecordResponse {
    /// Whether the user has a record on this leaderboard.
    pub fn has_finished(&self) -> bool {
        self.kind.as_deref() == Some(TYPE_FINISHED)
    }

    /// The user's best record, present only when [`has_finished`](Self::has_finished).
    pub fn record(&self) -> Option<&Record> {
        self.record.as_ref().filter(|_| self.has_finished())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AddRecordResponse {
    #[serde(skip)]
    pub is_error: bool,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// The user's best record on this leaderboard after the submission.
    #[serde(default)]
    pub top_record: Option<Record>,
    /// Neighbouring records ranked ahead of the submitted value.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub better: Vec<Record>,
    /// Neighbouring records ranked behind the submitted value.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub worse: Vec<Record>,
}

impl AddRecordResponse {
    /// Whether the submitted value became the user's best.
    pub fn is_best_score(&self) -> bool {
        self.kind.as_deref() == Some(TYPE_TOP_RECORD)
    }
}

macro_rules! impl_leaderboard_response {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl LeaderboardResponse for $ty {
                fn failed() -> Self {
                    Self {
                        is_error: true,
                        ..Self::default()
                    }
                }

                fn is_error(&self) -> bool {
                    self.is_error
                }
            }
        )+
    };
}

impl_leaderboard_response!(TopRecordsResponse, MyTopRecordResponse, AddRecordResponse);

#[derive(Debug, Serialize)]
pub(crate) struct TopRecordsRequest<'a> {
    pub app_id: &'a str,
    pub leaderboard_id: &'a str,
    pub num_records: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateRecordRequest<'a> {
    pub app_id: &'a str,
    pub leaderboard_id: &'a str,
    pub user_id: &'a str,
    pub value: f64,
    pub num_records: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct MyTopRecordRequest<'a> {
    pub app_id: &'a str,
    pub leaderboard_id: &'a str,
    pub user_id: &'a str,
}
