use serde::{Deserialize, Serialize};

/// One entry in the match narrative feed.
///
/// Minutes are in the 0..=90 domain and need not be unique, but the
/// rendered feed is sorted so they are non-decreasing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchEvent {
    pub minute: u8,
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Goal,
    Chance,
    Card,
    Injury,
    Tactical,
}

impl MatchEvent {
    pub fn is_goal(&self) -> bool {
        self.event_type == EventType::Goal
    }
}
