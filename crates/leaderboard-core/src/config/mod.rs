//! Client configuration.
//!
//! This module contains:
//! - `ClientConfig` - base URL, app id, API token and request timeout
//! - Endpoint paths and header names of the leaderboard service
//! - Identity persistence keys

mod settings;

pub use settings::*;

/// Endpoint paths, relative to the configured base URL.
pub mod endpoints {
    pub const TOP_RECORDS: &str = "/top-records";
    pub const CREATE_RECORD: &str = "/create-record";
    pub const MY_TOP_RECORD: &str = "/my-top-record";
}

/// Request headers sent with every call.
pub mod headers {
    /// Carries the shared API token.
    pub const TOKEN: &str = "x-token";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const JSON: &str = "application/json";
}

/// Environment variables that override file settings.
pub mod env {
    pub const BASE_URL: &str = "LEADERBOARD_BASE_URL";
    pub const APP_ID: &str = "LEADERBOARD_APP_ID";
    pub const API_TOKEN: &str = "LEADERBOARD_API_TOKEN";
}

/// Identity persistence configuration.
pub mod identity {
    /// Key under which the device user id is stored.
    pub const USER_ID_KEY: &str = "leaderboard.user_id";

    /// File name of the default identity store, inside the user data dir.
    pub const STORE_FILE: &str = "leaderboard-identity.json";

    /// Application directory under the platform data dir.
    pub const APP_DIR: &str = "leaderboard";
}
