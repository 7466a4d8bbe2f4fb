// src/store/memory.rs

use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    models::{
        category::Category,
        question::{NewQuestion, Question},
    },
    store::{QuestionFilter, StoreError, TriviaStore},
};

/// The categories every fresh database is seeded with.
pub fn default_categories() -> Vec<Category> {
    ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
        .into_iter()
        .zip(1..)
        .map(|(kind, id)| Category::new(id, kind))
        .collect()
}

#[derive(Debug)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    next_question_id: i64,
}

/// Process-local store backing the test suite.
#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let next_question_id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        let tables = Tables {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            questions: questions.into_iter().map(|q| (q.id, q)).collect(),
            next_question_id,
        };

        Self {
            tables: RwLock::new(tables),
            unavailable: AtomicBool::new(false),
        }
    }


    /// While set, every operation fails with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        Ok(())
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(tables.categories.values().cloned().collect())
    }

    async fn find_category(&self, id: i64) -> Result<Option<Category>, StoreError> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(tables.categories.get(&id).cloned())
    }

    async fn list_questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>, StoreError> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| filter.accepts(q))
            .cloned()
            .collect())
    }

    async fn find_question(&self, id: i64) -> Result<Option<Question>, StoreError> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(tables.questions.get(&id).cloned())
    }

    async fn insert_question(&self, new_question: NewQuestion) -> Result<Question, StoreError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;

        let id = tables.next_question_id;
        tables.next_question_id += 1;

        let question = Question {
            id,
            question: new_question.question,
            answer: new_question.answer,
            difficulty: new_question.difficulty,
            category: new_question.category,
        };
        tables.questions.insert(id, question.clone());

        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> Result<bool, StoreError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        Ok(tables.questions.remove(&id).is_some())
    }
}
