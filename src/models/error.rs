use {
    thiserror::Error,
    crate::models::db::{CategoryId, QuestionId}
};

pub type TriviaResult<T> = Result<T, TriviaError>;

#[derive(Debug, Error)]
pub enum TriviaError {
    #[error("question {0} not found")]
    QuestionNotFound(QuestionId),

    #[error("category {0} not found")]
    CategoryNotFound(CategoryId),

    /// A required field is missing, empty or out of range.
    #[error("{0}")]
    Validation(String),

    #[error("store failure: {0}")]
    Internal(#[from] diesel::result::Error)
}

impl TriviaError {
    pub fn validation(msg: impl Into<String>) -> TriviaError {
        TriviaError::Validation(msg.into())
    }
}
