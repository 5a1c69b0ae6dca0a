use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpaceQuote {
    pub id: String,
    pub quote: String,
    pub author: String,
    pub context: String,
    pub category: String,
}
