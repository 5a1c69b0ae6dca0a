use serde::{Deserialize, Serialize};

/// Multiple-choice quiz question. `correct` indexes into `options`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: [String; 4],
    pub correct: usize,
}
