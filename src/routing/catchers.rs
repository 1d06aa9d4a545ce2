use rocket::{
    catch,
    Request,
    http::Status,
    serde::json::Json
};

use crate::models::web::ErrorBody;

#[catch(400)]
pub fn bad_request() -> Json<ErrorBody> {
    Json(ErrorBody::new(Status::BadRequest, "Bad request"))
}

#[catch(404)]
pub fn not_found() -> Json<ErrorBody> {
    Json(ErrorBody::new(Status::NotFound, "Not found"))
}

#[catch(405)]
pub fn method_not_allowed() -> Json<ErrorBody> {
    Json(ErrorBody::new(Status::MethodNotAllowed, "Method not allowed"))
}

#[catch(422)]
pub fn unprocessable() -> Json<ErrorBody> {
    Json(ErrorBody::new(Status::UnprocessableEntity, "Unprocessable resource"))
}

#[catch(500)]
pub fn internal_error() -> Json<ErrorBody> {
    Json(ErrorBody::new(Status::InternalServerError, "Internal server error"))
}

#[catch(default)]
pub fn fallback(status: Status, req: &Request<'_>) -> Json<ErrorBody> {
    tracing::debug!(code = status.code, uri = %req.uri(), "unhandled status");
    Json(ErrorBody::new(status, sentence_case(status.reason_lossy())))
}

/// "Payload Too Large" -> "Payload too large", matching the hand-written messages.
fn sentence_case(reason: &str) -> String {
    let mut chars = reason.chars();
    chars
        .next()
        .map(|first| first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
        )
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use {
        super::sentence_case,
        pretty_assertions::assert_eq
    };

    #[test]
    fn reasons_in_sentence_case() {
        assert_eq!(sentence_case("Method Not Allowed"), "Method not allowed");
        assert_eq!(sentence_case("Payload Too Large"), "Payload too large");
        assert_eq!(sentence_case(""), "");
    }
}
