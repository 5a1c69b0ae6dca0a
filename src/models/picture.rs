use serde::{Deserialize, Serialize};

/// One entry of the astronomy-picture-of-the-day rotation.
///
/// The table cycles by day of year, so any valid date resolves to
/// exactly one record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PictureOfTheDay {
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facts: Option<Vec<String>>,
}
