//! Curated historical astronomy events, keyed year-independently by (month, day).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EventCategory {
    Launch,
    Discovery,
    Landing,
    Historic,
    Flyby,
    Observatory,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Launch => "Launch",
            EventCategory::Discovery => "Discovery",
            EventCategory::Landing => "Landing",
            EventCategory::Historic => "Historic",
            EventCategory::Flyby => "Flyby",
            EventCategory::Observatory => "Observatory",
        }
    }
}

/// A single curated event. At most one event exists per (month, day) key;
/// the year records when it happened, not when it is shown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AstronomicalEvent {
    pub month: u32,
    pub day: u32,
    pub year: i32,
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    pub people_involved: Vec<String>,
    pub location: String,
    pub achievements: Vec<String>,
    pub historical_significance: String,
    pub technical_details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_missions: Option<Vec<String>>,
}
