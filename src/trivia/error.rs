use thiserror::Error;

pub type TriviaResult<T> = Result<T, TriviaError>;

#[derive(Error, Debug)]
pub enum TriviaError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    /// The request was understood but its content can not be acted on.
    #[error("unprocessable: {0}")]
    Unprocessable(String),

    /// The request body could not be parsed at all.
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl TriviaError {
    pub fn missing_field(field: &str) -> Self {
        Self::Unprocessable(format!("missing field `{field}`"))
    }
}
