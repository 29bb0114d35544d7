use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::SqlitePool;

use crate::db::queries::{categories, questions};
use crate::db::{NewQuestion, Question};
use crate::telemetry::{QUESTIONS_CREATED, QUESTIONS_DELETED};

use super::categories::{list_categories, CategoryMap};
use super::pagination::paginate;
use super::{TriviaError, TriviaResult};

/// Body of a create request. Every field is required; they are optional here so
/// a missing one is reported as unprocessable rather than as a parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub difficulty: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub category: Option<i64>,
}

impl CreateQuestion {
    fn validate(self) -> TriviaResult<NewQuestion> {
        let question = self
            .question
            .ok_or_else(|| TriviaError::missing_field("question"))?;
        let answer = self
            .answer
            .ok_or_else(|| TriviaError::missing_field("answer"))?;
        let difficulty = self
            .difficulty
            .ok_or_else(|| TriviaError::missing_field("difficulty"))?;
        let category = self
            .category
            .ok_or_else(|| TriviaError::missing_field("category"))?;
        if question.trim().is_empty() {
            return Err(TriviaError::Unprocessable("question text is empty".into()));
        }
        if answer.trim().is_empty() {
            return Err(TriviaError::Unprocessable("answer text is empty".into()));
        }
        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionList {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i64>,
}

impl QuestionPage {
    fn new(page: usize, selection: Vec<Question>) -> Self {
        Self {
            questions: paginate(page, &selection),
            total_questions: selection.len(),
            current_category: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedQuestion {
    pub created: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct DeletedQuestion {
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

pub async fn list_questions(pool: &SqlitePool, page: usize) -> TriviaResult<QuestionList> {
    let selection = questions::get_all_questions(pool).await?;
    Ok(QuestionList {
        questions: paginate(page, &selection),
        total_questions: selection.len(),
        categories: list_categories(pool).await?,
        current_category: None,
    })
}

pub async fn delete_question(pool: &SqlitePool, id: i64) -> TriviaResult<DeletedQuestion> {
    if !questions::delete_question(pool, id).await? {
        return Err(TriviaError::NotFound {
            resource: "question",
            id,
        });
    }
    QUESTIONS_DELETED.inc();
    tracing::info!(id, "Question deleted");

    let selection = questions::get_all_questions(pool).await?;
    Ok(DeletedQuestion {
        deleted: id,
        questions: paginate(1, &selection),
        total_questions: selection.len(),
    })
}

pub async fn create_question(
    pool: &SqlitePool,
    request: CreateQuestion,
    page: usize,
) -> TriviaResult<CreatedQuestion> {
    let new = request.validate()?;
    let id = questions::create_question(pool, &new).await?;
    QUESTIONS_CREATED.inc();
    tracing::info!(id, category = new.category, "Question created");

    let selection = questions::get_all_questions(pool).await?;
    Ok(CreatedQuestion {
        created: id,
        questions: paginate(page, &selection),
        total_questions: selection.len(),
    })
}

pub async fn search_questions(
    pool: &SqlitePool,
    term: Option<&str>,
    page: usize,
) -> TriviaResult<QuestionPage> {
    let selection = questions::search_questions(pool, term.unwrap_or_default()).await?;
    Ok(QuestionPage::new(page, selection))
}

pub async fn questions_for_category(
    pool: &SqlitePool,
    category_id: i64,
    page: usize,
) -> TriviaResult<QuestionPage> {
    let category = categories::find_category(pool, category_id)
        .await?
        .ok_or(TriviaError::NotFound {
            resource: "category",
            id: category_id,
        })?;
    let selection = questions::get_questions_for_category(pool, category.id).await?;
    Ok(QuestionPage::new(page, selection))
}
