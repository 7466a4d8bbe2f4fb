// src/services/questions.rs

use crate::{
    models::{
        category::category_map,
        question::{CreateQuestionRequest, Question},
        response::{CategoryList, QuestionList, QuestionPage},
    },
    services::ServiceError,
    store::{QuestionFilter, TriviaStore},
};

/// Returns the 1-indexed `page` of `items`, `per_page` items long.
/// Pages below 1 and pages past the end are empty.
pub fn page_window<T>(items: &[T], page: i64, per_page: usize) -> &[T] {
    let start = page
        .checked_sub(1)
        .and_then(|p| usize::try_from(p).ok())
        .and_then(|p| p.checked_mul(per_page));

    match start {
        Some(start) if start < items.len() => {
            let end = start.saturating_add(per_page).min(items.len());
            &items[start..end]
        }
        _ => &[],
    }
}

/// Label of a category, or `""` when the id is unknown.
async fn category_label(store: &dyn TriviaStore, id: i64) -> Result<String, ServiceError> {
    Ok(store
        .find_category(id)
        .await?
        .map(|c| c.kind)
        .unwrap_or_default())
}

pub async fn list_categories(store: &dyn TriviaStore) -> Result<CategoryList, ServiceError> {
    let categories = store.list_categories().await?;
    Ok(CategoryList {
        categories: category_map(&categories),
    })
}

/// One page of every question, with the full category map.
///
/// `current_category` is always the label of the lowest-id category,
/// whatever the page holds.
pub async fn list_questions(
    store: &dyn TriviaStore,
    page: i64,
    per_page: usize,
) -> Result<QuestionPage, ServiceError> {
    let selection = store.list_questions(&QuestionFilter::all()).await?;
    let window = page_window(&selection, page, per_page);

    if window.is_empty() {
        return Err(ServiceError::Empty(format!(
            "page {} is empty ({} questions total)",
            page,
            selection.len()
        )));
    }

    let categories = store.list_categories().await?;
    let current_category = categories
        .first()
        .map(|c| c.kind.clone())
        .unwrap_or_default();

    Ok(QuestionPage {
        questions: window.to_vec(),
        categories: category_map(&categories),
        total_questions: selection.len(),
        current_category,
    })
}

/// Case-insensitive substring search over question text. Not paginated.
pub async fn search_questions(
    store: &dyn TriviaStore,
    term: Option<String>,
) -> Result<QuestionList, ServiceError> {
    let term = term.ok_or_else(|| ServiceError::Invalid("searchTerm is required".to_string()))?;

    let questions = store
        .list_questions(&QuestionFilter::matching(term.as_str()))
        .await?;

    let Some(first) = questions.first() else {
        return Err(ServiceError::Empty(format!("no question matches {:?}", term)));
    };
    let current_category = category_label(store, first.category).await?;

    Ok(QuestionList {
        total_questions: questions.len(),
        questions,
        current_category,
    })
}

/// Every question filed under `category_id`. The id does not have to name an
/// existing category.
pub async fn questions_by_category(
    store: &dyn TriviaStore,
    category_id: i64,
) -> Result<QuestionList, ServiceError> {
    let questions = store
        .list_questions(&QuestionFilter::in_category(category_id))
        .await?;

    if questions.is_empty() {
        return Err(ServiceError::Empty(format!(
            "no questions in category {}",
            category_id
        )));
    }

    let current_category = category_label(store, category_id).await?;

    Ok(QuestionList {
        total_questions: questions.len(),
        questions,
        current_category,
    })
}

/// Deletes a question and returns its id.
pub async fn delete_question(store: &dyn TriviaStore, id: i64) -> Result<i64, ServiceError> {
    let existing = store
        .find_question(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("question {}", id)))?;

    // A concurrent delete may win between the lookup and here
    if !store.delete_question(existing.id).await? {
        return Err(ServiceError::NotFound(format!("question {}", id)));
    }

    tracing::info!(question_id = id, "Question deleted");
    Ok(id)
}

pub async fn create_question(
    store: &dyn TriviaStore,
    req: CreateQuestionRequest,
) -> Result<Question, ServiceError> {
    let new_question = req.into_new_question().map_err(ServiceError::Invalid)?;

    let question = store.insert_question(new_question).await?;

    tracing::info!(
        question_id = question.id,
        category = question.category,
        "Question created"
    );
    Ok(question)
}
