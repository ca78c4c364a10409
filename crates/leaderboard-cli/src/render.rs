//! Display lists for leaderboard responses.
//!
//! Each response renders to a list of lines, with the generic error message
//! standing in for the content of any failed call.

use leaderboard_core::{
    AddRecordResponse, Leaderboard, LeaderboardResponse, MyTopRecordResponse, TopRecordsResponse,
};
use owo_colors::OwoColorize;

pub const ERROR_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Good,
    Bad,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub text: String,
    pub tone: Tone,
}

impl ListItem {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Plain,
        }
    }

    fn good(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Good,
        }
    }

    fn error() -> Self {
        Self {
            text: ERROR_MESSAGE.to_string(),
            tone: Tone::Bad,
        }
    }
}

pub fn top_records(response: &TopRecordsResponse) -> Vec<ListItem> {
    if response.is_error() {
        return vec![ListItem::error()];
    }
    response
        .records
        .iter()
        .map(|r| ListItem::plain(format!("place={} value={}", r.place, r.value)))
        .collect()
}

pub fn my_top_record(response: &MyTopRecordResponse) -> Vec<ListItem> {
    if response.is_error() {
        return vec![ListItem::error()];
    }
    match response.record() {
        Some(r) => vec![ListItem::good(format!(
            "You've finished this level in place={} value={}",
            r.place, r.value
        ))],
        None => vec![ListItem::plain("You have not finished this level")],
    }
}

pub fn add_record(
    response: &AddRecordResponse,
    submitted: f64,
    current_user_id: &str,
) -> Vec<ListItem> {
    if response.is_error() {
        return vec![ListItem::error()];
    }

    let mut items = Vec::with_capacity(response.better.len() + response.worse.len() + 3);
    if response.is_best_score() {
        items.push(ListItem::good("This was your best score!"));
    } else {
        items.push(ListItem::plain("This was not your best score."));
    }

    if let Some(top) = &response.top_record {
        items.push(ListItem::plain(format!(
            "This User's Top Record place={} value={}",
            top.place, top.value
        )));
    }
    for better in &response.better {
        items.push(ListItem::plain(format!(
            "Better Score place={} value={}, isCurrentUser={}",
            better.place,
            better.value,
            better.is_current_user(current_user_id)
        )));
    }
    items.push(ListItem::good(format!("Your value is: {}", submitted)));
    for worse in &response.worse {
        items.push(ListItem::plain(format!(
            "Worse Score place={} value={}, isCurrentUser={}",
            worse.place,
            worse.value,
            worse.is_current_user(current_user_id)
        )));
    }
    items
}

/// Header naming the board and its ordering, e.g. `Lower is Better (lower-is-better)`.
pub fn board_header(board: &Leaderboard) -> String {
    format!("{} ({})", board.display_name, board.ordering)
}

/// Print a display list; an empty list prints nothing.
pub fn print_items(items: &[ListItem]) {
    for item in items {
        match item.tone {
            Tone::Plain => println!("{}", item.text),
            Tone::Good => println!("{}", item.text.green()),
            Tone::Bad => println!("{}", item.text.red()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn texts(items: &[ListItem]) -> Vec<&str> {
        items.iter().map(|i| i.text.as_str()).collect()
    }

    #[test]
    fn test_error_replaces_content() {
        assert_eq!(
            texts(&top_records(&TopRecordsResponse::failed())),
            vec![ERROR_MESSAGE]
        );
        assert_eq!(
            texts(&my_top_record(&MyTopRecordResponse::failed())),
            vec![ERROR_MESSAGE]
        );
        let items = add_record(&AddRecordResponse::failed(), 1.0, "u1");
        assert_eq!(texts(&items), vec![ERROR_MESSAGE]);
        assert_eq!(items[0].tone, Tone::Bad);
    }

    #[test]
    fn test_top_records_lines() {
        let response: TopRecordsResponse = serde_json::from_value(json!({"records": [
            {"user_id": "a", "unique_id": "1", "value": 10, "place": 1},
            {"user_id": "b", "unique_id": "2", "value": 12.5, "place": 2}
        ]}))
        .unwrap();

        assert_eq!(
            texts(&top_records(&response)),
            vec!["place=1 value=10", "place=2 value=12.5"]
        );
    }

    #[test]
    fn test_top_records_empty_list() {
        let response: TopRecordsResponse = serde_json::from_value(json!({"records": []})).unwrap();
        assert!(top_records(&response).is_empty());
    }

    #[test]
    fn test_board_header() {
        assert_eq!(
            board_header(&Leaderboard::lower_is_better()),
            "Lower is Better (lower-is-better)"
        );
        assert_eq!(
            board_header(&Leaderboard::higher_is_better()),
            "Higher is Better (higher-is-better)"
        );
    }

    #[test]
    fn test_my_top_record_lines() {
        let finished: MyTopRecordResponse = serde_json::from_value(json!({
            "type": "finished",
            "record": {"user_id": "a", "unique_id": "1", "value": 7, "place": 3}
        }))
        .unwrap();
        assert_eq!(
            texts(&my_top_record(&finished)),
            vec!["You've finished this level in place=3 value=7"]
        );

        let unfinished: MyTopRecordResponse =
            serde_json::from_value(json!({"type": "not_finished"})).unwrap();
        assert_eq!(
            texts(&my_top_record(&unfinished)),
            vec!["You have not finished this level"]
        );
    }

    #[test]
    fn test_add_record_lines() {
        let response: AddRecordResponse = serde_json::from_value(json!({
            "type": "record",
            "top_record": {"user_id": "me", "unique_id": "0", "value": 30, "place": 1},
            "better": [{"user_id": "me", "unique_id": "0", "value": 30, "place": 1}],
            "worse": [{"user_id": "other", "unique_id": "9", "value": 50, "place": 3}]
        }))
        .unwrap();

        assert_eq!(
            texts(&add_record(&response, 42.0, "me")),
            vec![
                "This was not your best score.",
                "This User's Top Record place=1 value=30",
                "Better Score place=1 value=30, isCurrentUser=true",
                "Your value is: 42",
                "Worse Score place=3 value=50, isCurrentUser=false",
            ]
        );
    }

    #[test]
    fn test_add_record_best_score() {
        let response: AddRecordResponse = serde_json::from_value(json!({
            "type": "top_record",
            "top_record": {"user_id": "me", "unique_id": "1", "value": 42, "place": 1},
            "better": [],
            "worse": []
        }))
        .unwrap();

        let items = add_record(&response, 42.0, "me");
        assert_eq!(items[0].text, "This was your best score!");
        assert_eq!(items[0].tone, Tone::Good);
        assert_eq!(items.len(), 3);
    }
}
