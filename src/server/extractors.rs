use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Query, Request},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::trivia::TriviaError;

use super::deserializers::PageQuery;
use super::routes::{error_body, ApiError};

/// JSON body whose rejections use the API error envelope. Bodies that are not
/// JSON are bad requests, JSON of the wrong shape is unprocessable.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::JsonDataError(e)) => {
                Err(TriviaError::Unprocessable(e.body_text()).into())
            }
            Err(rejection) => Err(TriviaError::BadRequest(rejection.body_text()).into()),
        }
    }
}

/// The `page` query parameter, 1 when absent or unusable.
pub struct Page(pub usize);

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let page = Query::<PageQuery>::from_request_parts(parts, state)
            .await
            .map(|Query(q)| q.page)
            .unwrap_or(1);
        Ok(Self(page))
    }
}

/// Integer id from the path. Anything else does not name a resource.
pub struct Id(pub i64);

impl<S> FromRequestParts<S> for Id
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| (StatusCode::NOT_FOUND, error_body(StatusCode::NOT_FOUND)).into_response())?;
        Ok(Self(id))
    }
}
