//! Client library for a remote leaderboard service.
//!
//! A [`LeaderboardClient`] submits scores, fetches the top records of a
//! [`Leaderboard`] and fetches the current user's personal best. Every call
//! resolves to a typed response whose `is_error()` flag replaces the payload
//! when the exchange or the decoding fails.

pub mod client;
pub mod config;
pub mod error;
pub mod identity;
pub mod leaderboard;
pub mod models;
pub mod network;

pub use client::LeaderboardClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use identity::{FileStore, IdentityStore, KeyValueStore, MemoryStore};
pub use leaderboard::{Leaderboard, OrderingPolicy};
pub use models::{
    AddRecordResponse, LeaderboardResponse, MyTopRecordResponse, Record, TopRecordsResponse,
};
pub use network::{HttpTransport, Transport};
