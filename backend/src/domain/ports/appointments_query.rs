//! Driving port for appointment reads.

use async_trait::async_trait;

use crate::domain::{Appointment, AppointmentListFilter, Error};

/// Request to list appointments, optionally filtered by cause category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAppointmentsRequest {
    pub filter: AppointmentListFilter,
}

/// Response from listing appointments.
#[derive(Debug, Clone, PartialEq)]
pub struct ListAppointmentsResponse {
    pub appointments: Vec<Appointment>,
}

/// Request to fetch a single appointment by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindAppointmentRequest {
    pub id: i32,
}

/// Response from fetching a single appointment.
#[derive(Debug, Clone, PartialEq)]
pub struct FindAppointmentResponse {
    pub appointment: Appointment,
}

/// Driving port for appointment read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentsQuery: Send + Sync {
    /// List appointments ordered ascending by `appointment_date`, ties broken
    /// by insertion order. An empty result is a valid success response.
    async fn list_appointments(
        &self,
        request: ListAppointmentsRequest,
    ) -> Result<ListAppointmentsResponse, Error>;

    /// Fetch one appointment by id, failing with a not-found error when the
    /// id does not exist.
    async fn find_appointment(
        &self,
        request: FindAppointmentRequest,
    ) -> Result<FindAppointmentResponse, Error>;
}
