//! Translation of domain errors into HTTP responses.
//!
//! Implements `ResponseError` for the domain [`Error`] so handlers return it
//! with `?` and Actix renders the JSON envelope. Validation failures surface
//! as `422 Unprocessable Entity`, the status the frontend already consumes.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Internal failures leave the process as a fixed message; only the trace
/// identifier survives so the matching log line can be found.
fn redact_if_internal(error: &Error) -> Error {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }
    let redacted = Error::internal("Internal server error");
    match error.trace_id() {
        Some(id) => redacted.with_trace_id(id.to_owned()),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Framework error text never reaches clients.
        error!(error = %err, "unhandled framework error");
        Error::internal("Internal server error")
    }
}

/// Map JSON payload extraction failures onto the shared error envelope.
///
/// Installed via `actix_web::web::JsonConfig` so a body that is not valid
/// JSON (or carries wrongly typed fields) yields the same `422` shape as
/// handler-level validation.
pub fn json_error_handler(error: JsonPayloadError, _request: &HttpRequest) -> actix_web::Error {
    Error::invalid_request("request body could not be parsed")
        .with_details(json!({
            "code": "invalid_body",
            "reason": error.to_string(),
        }))
        .into()
}

/// Map path parameter extraction failures onto the shared error envelope.
///
/// Installed via `actix_web::web::PathConfig` so a non-numeric appointment id
/// in the URL yields `422` rather than the framework default.
pub fn path_error_handler(error: PathError, _request: &HttpRequest) -> actix_web::Error {
    Error::invalid_request("path parameters could not be parsed")
        .with_details(json!({
            "code": "invalid_path",
            "reason": error.to_string(),
        }))
        .into()
}

#[cfg(test)]
mod tests;
