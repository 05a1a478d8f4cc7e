//! Error payload shared by every failing response.
//!
//! The frontend keys its handling off the `code` field, so the set of codes
//! and their snake_case wire names are part of the public contract. Adapters
//! translate [`Error`] into HTTP; nothing in this module knows about status
//! codes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::trace_id::TraceId;

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Machine-readable failure category.
///
/// Wire names are the snake_case variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Payload failed validation; `details` names the offending fields.
    InvalidRequest,
    /// Credentials were wrong or the session is missing.
    Unauthorized,
    /// The addressed record does not exist.
    NotFound,
    /// The database or another dependency cannot be reached.
    ServiceUnavailable,
    /// Anything unexpected. The message is redacted before leaving the
    /// process.
    InternalError,
}

/// Error payload attached to every non-2xx response.
///
/// `message` must be non-blank; `trace_id`, when set, must be non-blank too.
/// Constructors pick up the ambient [`TraceId`] automatically, so an error
/// raised inside a traced request matches the `trace-id` response header
/// without the call site doing anything.
///
/// # Examples
/// ```
/// use repair_backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("appointment 17 does not exist");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert!(err.trace_id().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ErrorRepr", into = "ErrorRepr")]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
    details: Option<Value>,
}

impl Error {
    /// Build an error, panicking on a blank message.
    ///
    /// Call sites pass literal messages, so the panic fires only on a
    /// programming mistake.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(value) => value,
            Err(err) => panic!("error payload construction failed: {err}"),
        }
    }

    /// Fallible constructor validating the message.
    ///
    /// # Errors
    /// Returns [`ErrorValidationError::EmptyMessage`] when the message is
    /// blank once trimmed.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            code,
            message,
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        })
    }

    /// Failure category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Trace identifier echoed into the response header.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Structured context, typically field-level validation findings.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach structured context to the payload.
    ///
    /// # Examples
    /// ```
    /// use repair_backend::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("missing required field: customer_name")
    ///     .with_details(json!({ "field": "customer_name" }));
    /// assert_eq!(err.details().unwrap()["field"], "customer_name");
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Replace the trace identifier, panicking on a blank value.
    pub fn with_trace_id(self, trace_id: impl Into<String>) -> Self {
        match self.try_with_trace_id(trace_id) {
            Ok(value) => value,
            Err(err) => panic!("trace identifier rejected: {err}"),
        }
    }

    /// Fallible variant of [`Error::with_trace_id`].
    ///
    /// # Errors
    /// Returns [`ErrorValidationError::EmptyTraceId`] when the identifier is
    /// blank once trimmed.
    pub fn try_with_trace_id(
        mut self,
        trace_id: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let trace_id = trace_id.into();
        if trace_id.trim().is_empty() {
            return Err(ErrorValidationError::EmptyTraceId);
        }
        self.trace_id = Some(trace_id);
        Ok(self)
    }

    /// Shorthand for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Shorthand for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Shorthand for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Shorthand for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Shorthand for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

/// Reasons an [`Error`] payload fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorValidationError {
    /// Message missing, or blank once trimmed.
    EmptyMessage,
    /// Trace identifier blank once trimmed.
    EmptyTraceId,
}

impl std::fmt::Display for ErrorValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Self::EmptyMessage => "error message must not be empty",
            Self::EmptyTraceId => "trace identifier must not be empty",
        };
        f.write_str(reason)
    }
}

impl std::error::Error for ErrorValidationError {}

/// Serde-facing shape of [`Error`] enforcing validation on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorRepr {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl From<Error> for ErrorRepr {
    fn from(value: Error) -> Self {
        Self {
            code: value.code,
            message: value.message,
            trace_id: value.trace_id,
            details: value.details,
        }
    }
}

impl TryFrom<ErrorRepr> for Error {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorRepr) -> Result<Self, Self::Error> {
        let ErrorRepr {
            code,
            message,
            trace_id,
            details,
        } = value;

        // Deserialized payloads carry their own trace identifier (or none);
        // the ambient one captured by try_new must not leak in.
        let mut error = Error::try_new(code, message)?;
        error.trace_id = match trace_id {
            Some(id) if id.trim().is_empty() => return Err(ErrorValidationError::EmptyTraceId),
            other => other,
        };
        error.details = details;
        Ok(error)
    }
}
