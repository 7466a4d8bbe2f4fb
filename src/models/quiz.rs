// src/models/quiz.rs

use serde::{Deserialize, Serialize};

use crate::{models::question::Question, utils::deserializers::deserialize_loose_i64};

/// DTO for asking the next quiz question.
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    /// Ids already served in this quiz. Absent or null means none.
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,

    /// Category to draw from. Absent, null, `id: 0` or an unknown id means
    /// every category.
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "deserialize_loose_i64")]
    pub id: Option<i64>,

    /// Echoed by clients; selection only looks at `id`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// An empty JSON object, sent once a quiz has no unseen questions left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exhausted {}

/// The `question` field of a quiz response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QuizQuestion {
    Next(Question),
    Exhausted(Exhausted),
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub question: QuizQuestion,
    pub total_questions: usize,
}
