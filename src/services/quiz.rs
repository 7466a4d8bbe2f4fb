// src/services/quiz.rs

use std::collections::HashSet;

use crate::{
    models::{
        question::Question,
        quiz::{Exhausted, QuizQuestion, QuizRequest, QuizResponse},
    },
    services::ServiceError,
    store::{QuestionFilter, TriviaStore},
};

/// First candidate, in ascending id order, that has not been served yet.
///
/// Selection is deterministic: the same inputs always yield the same question.
pub fn first_unseen<'a>(candidates: &'a [Question], previous: &HashSet<i64>) -> Option<&'a Question> {
    candidates.iter().find(|q| !previous.contains(&q.id))
}

/// Picks the next quiz question.
///
/// The category filter only applies when the requested id names an existing
/// category; otherwise the whole question table is the candidate set.
pub async fn next_question(
    store: &dyn TriviaStore,
    req: QuizRequest,
) -> Result<QuizResponse, ServiceError> {
    let requested = req.quiz_category.and_then(|c| c.id);

    let category = match requested {
        Some(id) => store.find_category(id).await?,
        None => None,
    };

    let filter = match &category {
        Some(category) => QuestionFilter::in_category(category.id),
        None => QuestionFilter::all(),
    };
    let candidates = store.list_questions(&filter).await?;

    let previous: HashSet<i64> = req.previous_questions.unwrap_or_default().into_iter().collect();

    let question = match first_unseen(&candidates, &previous) {
        Some(question) => QuizQuestion::Next(question.clone()),
        None => {
            tracing::debug!(
                category = ?category.as_ref().map(|c| c.id),
                served = previous.len(),
                "Quiz candidates exhausted"
            );
            QuizQuestion::Exhausted(Exhausted {})
        }
    };

    Ok(QuizResponse {
        question,
        total_questions: candidates.len(),
    })
}
