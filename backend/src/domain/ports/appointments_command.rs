//! Driving port for appointment mutations.
//!
//! Inbound adapters call this port to create, update, and delete appointment
//! records without knowing the backing store. Requests carry validated domain
//! values; payload parsing stays in the adapter.

use async_trait::async_trait;

use crate::domain::{Appointment, AppointmentChanges, Error, NewAppointment};

/// Request to create an appointment from validated intake fields.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAppointmentRequest {
    pub appointment: NewAppointment,
}

/// Response from creating an appointment.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAppointmentResponse {
    pub appointment: Appointment,
}

/// Request to replace every mutable field of an existing appointment.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAppointmentRequest {
    pub id: i32,
    pub changes: AppointmentChanges,
}

/// Response from updating an appointment.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAppointmentResponse {
    pub appointment: Appointment,
}

/// Request to delete an appointment permanently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteAppointmentRequest {
    pub id: i32,
}

/// Driving port for appointment write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentsCommand: Send + Sync {
    /// Create an appointment and return the stored record, including its
    /// assigned id, `pending` status, and creation timestamp.
    async fn create_appointment(
        &self,
        request: CreateAppointmentRequest,
    ) -> Result<CreateAppointmentResponse, Error>;

    /// Replace the mutable fields of an appointment. Fails with a not-found
    /// error when the id does not exist; no record is created in that case.
    async fn update_appointment(
        &self,
        request: UpdateAppointmentRequest,
    ) -> Result<UpdateAppointmentResponse, Error>;

    /// Delete an appointment permanently. Fails with a not-found error when
    /// the id does not exist, including on repeated deletes.
    async fn delete_appointment(&self, request: DeleteAppointmentRequest) -> Result<(), Error>;
}
