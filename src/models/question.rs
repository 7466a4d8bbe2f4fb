// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

use crate::utils::deserializers::deserialize_optional_i64;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text of the question.
    pub question: String,

    pub answer: String,

    /// Conventionally 1 (easy) to 5 (hard), stored as given.
    pub difficulty: i32,

    /// Id of the owning category. Not enforced as a foreign key, so it may
    /// point at a category that does not exist.
    pub category: i64,
}

/// A validated question ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i64,
}

/// DTO for creating a new question.
///
/// Fields are optional at the wire level so that a missing field is reported
/// as a validation failure instead of a body rejection. Present values are
/// stored as given.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(required)]
    pub question: Option<String>,

    #[validate(required)]
    pub answer: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    #[validate(required)]
    pub difficulty: Option<i64>,

    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    #[validate(required)]
    pub category: Option<i64>,
}

impl CreateQuestionRequest {
    /// Validates the payload and converts it into an insertable row.
    pub fn into_new_question(self) -> Result<NewQuestion, String> {
        self.validate().map_err(|e| e.to_string())?;

        match (self.question, self.answer, self.difficulty, self.category) {
            (Some(question), Some(answer), Some(difficulty), Some(category)) => {
                let difficulty = i32::try_from(difficulty).map_err(|e| e.to_string())?;
                Ok(NewQuestion {
                    question,
                    answer,
                    difficulty,
                    category,
                })
            }
            _ => Err("question, answer, difficulty and category are required".to_string()),
        }
    }
}
