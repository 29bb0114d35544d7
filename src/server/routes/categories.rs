use axum::{extract::State, routing::get, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    server::{
        app::AppState,
        extractors::{Id, Page},
    },
    trivia::{
        categories::{list_categories, CategoryMap},
        questions::{questions_for_category, QuestionPage},
    },
};

use super::{ApiResponse, Success};

#[derive(Serialize)]
struct CategoriesBody {
    categories: CategoryMap,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoriesBody> {
    let categories = list_categories(&pool).await?;
    Ok(Success::new(CategoriesBody { categories }))
}

async fn category_questions(
    State(pool): State<SqlitePool>,
    Id(id): Id,
    Page(page): Page,
) -> ApiResponse<QuestionPage> {
    Ok(Success::new(questions_for_category(&pool, id, page).await?))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(category_questions))
        .with_state(state)
}
