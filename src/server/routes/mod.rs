mod categories;
mod questions;
mod quizzes;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::trivia::TriviaError;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

pub type ApiResponse<T> = Result<Success<T>, ApiError>;

/// Wraps a payload into the `{"success": true, ...}` envelope.
#[derive(Serialize)]
pub struct Success<T> {
    success: bool,
    #[serde(flatten)]
    body: T,
}

impl<T> Success<T> {
    pub fn new(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}

impl<T: Serialize> IntoResponse for Success<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[derive(Debug)]
pub struct ApiError(pub TriviaError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            TriviaError::NotFound { .. } => StatusCode::NOT_FOUND,
            TriviaError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            TriviaError::BadRequest(_) => StatusCode::BAD_REQUEST,
            TriviaError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub fn error_body(status: StatusCode) -> Json<serde_json::Value> {
    let message = match status {
        StatusCode::NOT_FOUND => "resource not found",
        StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
        _ => "internal server error",
    };
    Json(json!({
        "success": false,
        "error": status.as_u16(),
        "message": message,
    }))
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self.0 {
            TriviaError::Database(error) => tracing::error!("Database error: {error}"),
            other => tracing::info!("Request failed: {other}"),
        }
        (status, error_body(status)).into_response()
    }
}

impl From<TriviaError> for ApiError {
    fn from(error: TriviaError) -> Self {
        ApiError(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_404_envelope() {
        let response = ApiError(TriviaError::NotFound {
            resource: "question",
            id: 7,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_of(response).await,
            json!({"success": false, "error": 404, "message": "resource not found"})
        );
    }

    #[tokio::test]
    async fn database_error_does_not_leak_detail() {
        let response = ApiError(TriviaError::Database(sqlx::Error::PoolTimedOut)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert_eq!(body["message"], "internal server error");
        assert_eq!(body["error"], 500);
    }

    #[tokio::test]
    async fn validation_errors_are_422_and_400() {
        let unprocessable = ApiError(TriviaError::missing_field("answer")).into_response();
        assert_eq!(unprocessable.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_of(unprocessable).await["message"], "unprocessable");

        let bad = ApiError(TriviaError::BadRequest("eof".into())).into_response();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn success_flattens_payload() {
        #[derive(Serialize)]
        struct Payload {
            deleted: i64,
        }
        let value = serde_json::to_value(Success::new(Payload { deleted: 3 })).unwrap();
        assert_eq!(value, json!({"success": true, "deleted": 3}));
    }
}
