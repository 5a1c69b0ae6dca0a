use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TimelineCategory {
    Launch,
    Satellite,
    Mission,
}

impl TimelineCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineCategory::Launch => "Launch",
            TimelineCategory::Satellite => "Satellite",
            TimelineCategory::Mission => "Mission",
        }
    }
}

/// Milestone on the horizontal exploration timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub id: String,
    pub year: i32,
    pub title: String,
    pub description: String,
    pub category: TimelineCategory,
    pub image: String,
}
