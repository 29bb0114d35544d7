use axum::{extract::State, routing::post, Router};
use sqlx::SqlitePool;

use crate::{
    server::{app::AppState, extractors::ApiJson},
    trivia::quiz::{play_quiz, QuizRequest, QuizRound},
};

use super::{ApiResponse, Success};

async fn next_question(
    State(pool): State<SqlitePool>,
    ApiJson(request): ApiJson<QuizRequest>,
) -> ApiResponse<QuizRound> {
    Ok(Success::new(play_quiz(&pool, request).await?))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_question))
        .with_state(state)
}
