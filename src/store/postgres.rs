// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    models::{
        category::Category,
        question::{NewQuestion, Question},
    },
    store::{QuestionFilter, StoreError, TriviaStore},
};

/// Postgres-backed store.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, type
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn find_category(&self, id: i64) -> Result<Option<Category>, StoreError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, type
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn list_questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>, StoreError> {
        // Use QueryBuilder so each filter only adds its clause when present
        let mut query_builder = QueryBuilder::<Postgres>::new(
            "SELECT id, question, answer, difficulty, category FROM questions WHERE TRUE",
        );

        if let Some(category) = filter.category {
            query_builder.push(" AND category = ").push_bind(category);
        }

        // strpos instead of ILIKE so '%' and '_' in the term stay literal
        if let Some(term) = &filter.search {
            query_builder
                .push(" AND strpos(lower(question), lower(")
                .push_bind(term.clone())
                .push(")) > 0");
        }

        query_builder.push(" ORDER BY id");

        let questions = query_builder
            .build_query_as::<Question>()
            .fetch_all(&self.pool)
            .await?;

        Ok(questions)
    }

    async fn find_question(&self, id: i64) -> Result<Option<Question>, StoreError> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    async fn insert_question(&self, new_question: NewQuestion) -> Result<Question, StoreError> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, difficulty, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, difficulty, category
            "#,
        )
        .bind(new_question.question)
        .bind(new_question.answer)
        .bind(new_question.difficulty)
        .bind(new_question.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
