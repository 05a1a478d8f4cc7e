//! Appointment HTTP handlers.
//!
//! ```text
//! POST /appointments
//! GET /appointments?category=leak
//! PATCH /appointments/{id}
//! DELETE /appointments/{id}
//! ```
//!
//! The PATCH route is a full replace rather than a merge patch: every mutable
//! field is taken from the request body, so an optional field left out of the
//! payload erases the stored value. Clients changing one field must resend
//! the rest.

use actix_web::{delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{
    CreateAppointmentRequest, DeleteAppointmentRequest, ListAppointmentsRequest,
    UpdateAppointmentRequest,
};
use crate::domain::{Appointment, AppointmentChanges, AppointmentListFilter, Error, NewAppointment};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{AppointmentSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_naive_timestamp, parse_optional_naive_timestamp, require_field,
};

/// Request payload for creating an appointment.
///
/// Every field is optional at the serde layer so that missing values surface
/// as field-level validation errors instead of an opaque deserialisation
/// failure.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateAppointmentBody {
    #[schema(example = "Acme Construction")]
    pub customer_name: Option<String>,
    #[schema(example = "Sato")]
    pub contact_person: Option<String>,
    #[schema(example = "03-0000")]
    pub phone_number: Option<String>,
    #[schema(example = "EX200")]
    pub machine_model: Option<String>,
    #[schema(example = "SN1")]
    pub serial_number: Option<String>,
    #[schema(example = "oil leak")]
    pub failure_symptoms: Option<String>,
    #[schema(example = "Site A")]
    pub location: Option<String>,
    #[schema(format = "date-time", example = "2024-06-01T09:00:00")]
    pub appointment_date: Option<String>,
    pub received_by: Option<String>,
    /// Defaults to `false` when omitted.
    pub is_own_lease: Option<bool>,
    pub lease_location: Option<String>,
    #[schema(example = "engine,leak")]
    pub cause_categories: Option<String>,
}

/// Request payload for replacing an appointment.
///
/// Carries the full mutable field set, progress fields included.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UpdateAppointmentBody {
    pub customer_name: Option<String>,
    pub contact_person: Option<String>,
    pub phone_number: Option<String>,
    pub machine_model: Option<String>,
    pub serial_number: Option<String>,
    pub failure_symptoms: Option<String>,
    pub location: Option<String>,
    #[schema(format = "date-time", example = "2024-06-01T09:00:00")]
    pub appointment_date: Option<String>,
    #[schema(example = "completed")]
    pub status: Option<String>,
    #[schema(example = "Tanaka")]
    pub worker_name: Option<String>,
    pub completion_notes: Option<String>,
    #[schema(format = "date-time", example = "2024-06-02T10:00:00")]
    pub completed_at: Option<String>,
    pub received_by: Option<String>,
    /// Defaults to `false` when omitted.
    pub is_own_lease: Option<bool>,
    pub lease_location: Option<String>,
    pub cause_categories: Option<String>,
}

/// Confirmation payload returned by delete.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteConfirmationBody {
    #[schema(example = "Deleted")]
    pub message: String,
}

fn parse_new_appointment(body: CreateAppointmentBody) -> Result<NewAppointment, Error> {
    Ok(NewAppointment {
        customer_name: require_field(body.customer_name, FieldName::new("customer_name"))?,
        contact_person: require_field(body.contact_person, FieldName::new("contact_person"))?,
        phone_number: require_field(body.phone_number, FieldName::new("phone_number"))?,
        machine_model: require_field(body.machine_model, FieldName::new("machine_model"))?,
        serial_number: require_field(body.serial_number, FieldName::new("serial_number"))?,
        failure_symptoms: require_field(body.failure_symptoms, FieldName::new("failure_symptoms"))?,
        location: require_field(body.location, FieldName::new("location"))?,
        appointment_date: parse_naive_timestamp(
            require_field(body.appointment_date, FieldName::new("appointment_date"))?,
            FieldName::new("appointment_date"),
        )?,
        received_by: body.received_by,
        is_own_lease: body.is_own_lease.unwrap_or(false),
        lease_location: body.lease_location,
        cause_categories: body.cause_categories,
    })
}

fn parse_appointment_changes(body: UpdateAppointmentBody) -> Result<AppointmentChanges, Error> {
    Ok(AppointmentChanges {
        customer_name: require_field(body.customer_name, FieldName::new("customer_name"))?,
        contact_person: require_field(body.contact_person, FieldName::new("contact_person"))?,
        phone_number: require_field(body.phone_number, FieldName::new("phone_number"))?,
        machine_model: require_field(body.machine_model, FieldName::new("machine_model"))?,
        serial_number: require_field(body.serial_number, FieldName::new("serial_number"))?,
        failure_symptoms: require_field(body.failure_symptoms, FieldName::new("failure_symptoms"))?,
        location: require_field(body.location, FieldName::new("location"))?,
        appointment_date: parse_naive_timestamp(
            require_field(body.appointment_date, FieldName::new("appointment_date"))?,
            FieldName::new("appointment_date"),
        )?,
        status: require_field(body.status, FieldName::new("status"))?,
        worker_name: body.worker_name,
        completion_notes: body.completion_notes,
        completed_at: parse_optional_naive_timestamp(
            body.completed_at,
            FieldName::new("completed_at"),
        )?,
        received_by: body.received_by,
        is_own_lease: body.is_own_lease.unwrap_or(false),
        lease_location: body.lease_location,
        cause_categories: body.cause_categories,
    })
}

/// Record a new appointment.
#[utoipa::path(
    post,
    path = "/appointments",
    request_body = CreateAppointmentBody,
    responses(
        (status = 200, description = "Appointment recorded", body = AppointmentSchema),
        (status = 422, description = "Validation failure", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["appointments"],
    operation_id = "createAppointment",
    security([])
)]
#[post("/appointments")]
pub async fn create_appointment(
    state: web::Data<HttpState>,
    payload: web::Json<CreateAppointmentBody>,
) -> ApiResult<web::Json<Appointment>> {
    let appointment = parse_new_appointment(payload.into_inner())?;

    let response = state
        .appointments_command
        .create_appointment(CreateAppointmentRequest { appointment })
        .await?;

    Ok(web::Json(response.appointment))
}

/// List appointments, optionally filtered by cause category.
#[utoipa::path(
    get,
    path = "/appointments",
    params(
        (
            "category" = Option<String>,
            Query,
            description = "Substring matched against stored cause categories"
        )
    ),
    responses(
        (status = 200, description = "Ordered appointments", body = [AppointmentSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["appointments"],
    operation_id = "listAppointments",
    security([])
)]
#[get("/appointments")]
pub async fn list_appointments(
    state: web::Data<HttpState>,
    query: web::Query<ListAppointmentsQuery>,
) -> ApiResult<web::Json<Vec<Appointment>>> {
    let filter = AppointmentListFilter {
        cause_category: query.into_inner().category,
    };

    let response = state
        .appointments_query
        .list_appointments(ListAppointmentsRequest { filter })
        .await?;

    Ok(web::Json(response.appointments))
}

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListAppointmentsQuery {
    pub category: Option<String>,
}

/// Replace every mutable field of an appointment.
#[utoipa::path(
    patch,
    path = "/appointments/{id}",
    params(
        ("id" = i32, Path, description = "Appointment id")
    ),
    request_body = UpdateAppointmentBody,
    responses(
        (status = 200, description = "Updated appointment", body = AppointmentSchema),
        (status = 404, description = "Unknown appointment id", body = ErrorSchema),
        (status = 422, description = "Validation failure", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["appointments"],
    operation_id = "updateAppointment",
    security([])
)]
#[patch("/appointments/{id}")]
pub async fn update_appointment(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<UpdateAppointmentBody>,
) -> ApiResult<web::Json<Appointment>> {
    // Body validation runs before the id lookup, so a malformed payload for
    // an absent id reports 422, not 404.
    let changes = parse_appointment_changes(payload.into_inner())?;

    let response = state
        .appointments_command
        .update_appointment(UpdateAppointmentRequest {
            id: path.into_inner(),
            changes,
        })
        .await?;

    Ok(web::Json(response.appointment))
}

/// Delete an appointment permanently.
#[utoipa::path(
    delete,
    path = "/appointments/{id}",
    params(
        ("id" = i32, Path, description = "Appointment id")
    ),
    responses(
        (status = 200, description = "Appointment deleted", body = DeleteConfirmationBody),
        (status = 404, description = "Unknown appointment id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["appointments"],
    operation_id = "deleteAppointment",
    security([])
)]
#[delete("/appointments/{id}")]
pub async fn delete_appointment(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<DeleteConfirmationBody>> {
    state
        .appointments_command
        .delete_appointment(DeleteAppointmentRequest {
            id: path.into_inner(),
        })
        .await?;

    Ok(web::Json(DeleteConfirmationBody {
        message: "Deleted".to_owned(),
    }))
}

#[cfg(test)]
#[path = "appointments_tests.rs"]
mod tests;
