use serde::{Deserialize, Serialize};

/// Virtual museum exhibit: a spacecraft, satellite or station model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MuseumExhibit {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub era: String,
    pub description: String,
    pub image: String,
    pub highlights: Vec<String>,
}
