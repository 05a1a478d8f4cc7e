//! Field-level validation for inbound payloads.
//!
//! Failures become `invalid_request` errors whose `details` object names the
//! offending field and carries a stable `code` (`missing_field` or
//! `invalid_timestamp`) the frontend branches on.

use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime};
use serde_json::json;

use crate::domain::Error;

/// Field name as it appears in the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}"))
        .with_details(json!({ "field": field, "code": "missing_field" }))
}

pub(crate) fn invalid_timestamp_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be an ISO 8601 timestamp"))
        .with_details(json!({ "field": field, "value": value, "code": "invalid_timestamp" }))
}

/// Reject an absent (or JSON `null`) field with a field-level error.
pub(crate) fn require_field(value: Option<String>, field: FieldName) -> Result<String, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Parse a wall-clock timestamp such as `2024-06-01T09:00:00`.
///
/// Offset-carrying RFC 3339 values are accepted too and normalised to UTC
/// before the offset is dropped; stored timestamps are always naive.
pub(crate) fn parse_naive_timestamp(
    value: String,
    field: FieldName,
) -> Result<NaiveDateTime, Error> {
    if let Ok(timestamp) = NaiveDateTime::from_str(value.as_str()) {
        return Ok(timestamp);
    }

    DateTime::parse_from_rfc3339(value.as_str())
        .map(|timestamp| timestamp.naive_utc())
        .map_err(|_| invalid_timestamp_error(field, value.as_str()))
}

pub(crate) fn parse_optional_naive_timestamp(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<NaiveDateTime>, Error> {
    value
        .map(|raw| parse_naive_timestamp(raw, field))
        .transpose()
}
