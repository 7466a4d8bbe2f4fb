// src/store/mod.rs

use std::{fmt, sync::Arc};

use async_trait::async_trait;

use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Failure inside a storage backend.
#[derive(Debug)]
pub enum StoreError {
    Database(sqlx::Error),
    /// The backend is not accepting requests.
    Unavailable,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Database(e) => write!(f, "database error: {}", e),
            StoreError::Unavailable => write!(f, "store unavailable"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Database(e) => Some(e),
            StoreError::Unavailable => None,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

/// Row filter for question reads. Results are always ordered by id.
#[derive(Debug, Clone, Default)]
pub struct QuestionFilter {
    /// Exact match on `Question.category`.
    pub category: Option<i64>,
    /// Case-insensitive substring of `Question.question`.
    pub search: Option<String>,
}

impl QuestionFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn in_category(category: i64) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    pub fn matching(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }

    pub fn accepts(&self, question: &Question) -> bool {
        if let Some(category) = self.category {
            if question.category != category {
                return false;
            }
        }
        if let Some(term) = &self.search {
            if !question
                .question
                .to_lowercase()
                .contains(&term.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

/// Persistence for categories and questions.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories, ascending by id.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn find_category(&self, id: i64) -> Result<Option<Category>, StoreError>;

    /// Questions accepted by `filter`, ascending by id.
    async fn list_questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>, StoreError>;

    async fn find_question(&self, id: i64) -> Result<Option<Question>, StoreError>;

    async fn insert_question(&self, new_question: NewQuestion) -> Result<Question, StoreError>;

    /// Returns `false` when no row had that id.
    async fn delete_question(&self, id: i64) -> Result<bool, StoreError>;
}

/// Store handle shared by every request.
pub type SharedStore = Arc<dyn TriviaStore>;
