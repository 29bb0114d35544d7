use axum::{
    extract::State,
    routing::{delete, get, post},
    Router,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{
    server::{
        app::AppState,
        extractors::{ApiJson, Id, Page},
    },
    trivia::questions::{
        self, CreateQuestion, CreatedQuestion, DeletedQuestion, QuestionList, QuestionPage,
    },
};

use super::{ApiResponse, Success};

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    Page(page): Page,
) -> ApiResponse<QuestionList> {
    Ok(Success::new(questions::list_questions(&pool, page).await?))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    Page(page): Page,
    ApiJson(body): ApiJson<CreateQuestion>,
) -> ApiResponse<CreatedQuestion> {
    Ok(Success::new(
        questions::create_question(&pool, body, page).await?,
    ))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    Id(id): Id,
) -> ApiResponse<DeletedQuestion> {
    Ok(Success::new(questions::delete_question(&pool, id).await?))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    Page(page): Page,
    ApiJson(body): ApiJson<SearchBody>,
) -> ApiResponse<QuestionPage> {
    let found = questions::search_questions(&pool, body.search_term.as_deref(), page).await?;
    Ok(Success::new(found))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/search", post(search_questions))
        .with_state(state)
}
