use {
    serde::{Serialize, Deserialize},
    rocket::{
        Request,
        response::{self, Responder},
        serde::json::Json,
        http::Status
    },
    crate::models::error::TriviaError
};

pub type ApiResult<T> = Result<T, TriviaError>;

/// The JSON body of every failed request.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String
}

impl ErrorBody {
    pub fn new(status: Status, message: impl Into<String>) -> ErrorBody {
        ErrorBody {
            success: false,
            error: status.code,
            message: message.into()
        }
    }
}

impl TriviaError {
    pub fn status(&self) -> Status {
        match self {
            TriviaError::QuestionNotFound(_) | TriviaError::CategoryNotFound(_) => Status::NotFound,
            TriviaError::Validation(_) => Status::UnprocessableEntity,
            TriviaError::Internal(_) => Status::InternalServerError
        }
    }
}

impl <'r> Responder<'r, 'static> for TriviaError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        let message = match &self {
            TriviaError::Internal(e) => {
                tracing::error!(error = %e, uri = %req.uri(), "request failed");
                "Internal server error".to_string()
            }
            other => {
                tracing::debug!(error = %other, uri = %req.uri(), "request rejected");
                other.to_string()
            }
        };

        (status, Json(ErrorBody::new(status, message))).respond_to(req)
    }
}

/// An integer id that clients may also send as a numeric string, e.g. `"category": "1"`.
#[derive(Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(try_from = "IdRepr")]
pub struct LenientId(pub i32);

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Int(i32),
    Text(String)
}

impl TryFrom<IdRepr> for LenientId {
    type Error = std::num::ParseIntError;

    fn try_from(repr: IdRepr) -> Result<Self, Self::Error> {
        match repr {
            IdRepr::Int(id) => Ok(LenientId(id)),
            IdRepr::Text(text) => text.trim().parse().map(LenientId)
        }
    }
}
