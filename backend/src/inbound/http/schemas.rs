//! OpenAPI wrappers for domain types.
//!
//! Domain types do not derive `ToSchema`; these mirrors carry the OpenAPI
//! annotations instead, registered under the domain type's path via
//! `#[schema(as = ...)]`. They exist only for documentation output and are
//! never constructed.

use utoipa::ToSchema;

/// OpenAPI mirror of [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// Payload failed validation; `details` names the offending fields.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Credentials were wrong or the session is missing.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The addressed record does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The database or another dependency cannot be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// Anything unexpected; the message is redacted.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI mirror of [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Failure category.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "missing required field: customer_name")]
    message: String,
    /// Identifier correlating with the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Structured context, typically field-level validation findings.
    details: Option<serde_json::Value>,
}

/// OpenAPI mirror of [`crate::domain::Appointment`].
///
/// One stored repair-service appointment, returned whole by every write and
/// read endpoint.
#[derive(ToSchema)]
#[schema(as = crate::domain::Appointment)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AppointmentSchema {
    /// Store-assigned record identifier.
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Acme Construction")]
    customer_name: String,
    #[schema(example = "Sato")]
    contact_person: String,
    #[schema(example = "03-0000")]
    phone_number: String,
    #[schema(example = "EX200")]
    machine_model: String,
    #[schema(example = "SN1")]
    serial_number: String,
    #[schema(example = "oil leak under the boom cylinder")]
    failure_symptoms: String,
    #[schema(example = "Site A")]
    location: String,
    /// Scheduled visit, wall-clock without offset.
    #[schema(format = "date-time", example = "2024-06-01T09:00:00")]
    appointment_date: String,
    /// Workflow status; well-known values are `pending`, `assigned`,
    /// `in_progress`, and `completed`.
    #[schema(example = "pending")]
    status: String,
    #[schema(example = "Tanaka")]
    worker_name: Option<String>,
    completion_notes: Option<String>,
    #[schema(format = "date-time", example = "2024-06-02T10:00:00")]
    completed_at: Option<String>,
    received_by: Option<String>,
    is_own_lease: bool,
    lease_location: Option<String>,
    /// Delimiter-joined category tags, e.g. `engine,leak,noise`.
    #[schema(example = "engine,leak")]
    cause_categories: Option<String>,
    /// Server-assigned creation timestamp.
    #[schema(format = "date-time", example = "2024-05-30T15:04:05")]
    created_at: String,
}
