//! Leaderboard configurations.
//!
//! A leaderboard is plain data: the wire id the server selects it by, a
//! display name, and the ordering the UI should assume. New boards are
//! added by constructing another [`Leaderboard`] value.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Which end of the value range ranks first.
///
/// UI metadata only: it is never sent to the server, and nothing checks
/// that the server ranks the same way.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OrderingPolicy {
    HigherIsBetter,
    LowerIsBetter,
}

impl OrderingPolicy {
    pub fn lower_is_better(&self) -> bool {
        matches!(self, Self::LowerIsBetter)
    }

    /// Whether `a` ranks strictly ahead of `b`.
    pub fn is_better(&self, a: f64, b: f64) -> bool {
        match self {
            Self::HigherIsBetter => a > b,
            Self::LowerIsBetter => a < b,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Leaderboard {
    /// Wire-level id; must stay stable for a board's lifetime.
    pub id: String,
    pub display_name: String,
    pub ordering: OrderingPolicy,
}

impl Leaderboard {
    pub const HIGHER_IS_BETTER_ID: &'static str = "HigherIsBetterLeaderboard";
    pub const LOWER_IS_BETTER_ID: &'static str = "LowerIsBetterLeaderboard";

    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        ordering: OrderingPolicy,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            ordering,
        }
    }

    pub fn higher_is_better() -> Self {
        Self::new(
            Self::HIGHER_IS_BETTER_ID,
            "Higher is Better",
            OrderingPolicy::HigherIsBetter,
        )
    }

    pub fn lower_is_better() -> Self {
        Self::new(
            Self::LOWER_IS_BETTER_ID,
            "Lower is Better",
            OrderingPolicy::LowerIsBetter,
        )
    }

    /// The predefined boards.
    pub fn presets() -> [Self; 2] {
        [Self::higher_is_better(), Self::lower_is_better()]
    }

    pub fn find_preset(id: &str) -> Option<Self> {
        Self::presets().into_iter().find(|board| board.id == id)
    }
}
