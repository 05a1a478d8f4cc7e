//! Appointment domain services.
//!
//! These services implement the appointment driving ports over a repository,
//! mapping store failures onto domain errors. They hold no state of their own;
//! every request is handled independently against the shared repository.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::ports::{
    AppointmentRepository, AppointmentRepositoryError, AppointmentsCommand, AppointmentsQuery,
    CreateAppointmentRequest, CreateAppointmentResponse, DeleteAppointmentRequest,
    FindAppointmentRequest, FindAppointmentResponse, ListAppointmentsRequest,
    ListAppointmentsResponse, UpdateAppointmentRequest, UpdateAppointmentResponse,
};

fn map_repository_error(error: AppointmentRepositoryError) -> Error {
    match error {
        AppointmentRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("appointment store unavailable: {message}"))
        }
        AppointmentRepositoryError::Query { message } => {
            Error::internal(format!("appointment store error: {message}"))
        }
    }
}

fn not_found(id: i32) -> Error {
    Error::not_found(format!("appointment {id} not found"))
}

/// Appointment service implementing the command driving port.
#[derive(Clone)]
pub struct AppointmentCommandService<R> {
    appointment_repo: Arc<R>,
}

impl<R> AppointmentCommandService<R> {
    /// Create a new command service over the appointment repository.
    pub fn new(appointment_repo: Arc<R>) -> Self {
        Self { appointment_repo }
    }
}

#[async_trait]
impl<R> AppointmentsCommand for AppointmentCommandService<R>
where
    R: AppointmentRepository,
{
    async fn create_appointment(
        &self,
        request: CreateAppointmentRequest,
    ) -> Result<CreateAppointmentResponse, Error> {
        let appointment = self
            .appointment_repo
            .create(&request.appointment)
            .await
            .map_err(map_repository_error)?;

        Ok(CreateAppointmentResponse { appointment })
    }

    async fn update_appointment(
        &self,
        request: UpdateAppointmentRequest,
    ) -> Result<UpdateAppointmentResponse, Error> {
        let appointment = self
            .appointment_repo
            .update(request.id, &request.changes)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(request.id))?;

        Ok(UpdateAppointmentResponse { appointment })
    }

    async fn delete_appointment(&self, request: DeleteAppointmentRequest) -> Result<(), Error> {
        let deleted = self
            .appointment_repo
            .delete(request.id)
            .await
            .map_err(map_repository_error)?;

        if deleted {
            Ok(())
        } else {
            Err(not_found(request.id))
        }
    }
}

/// Appointment service implementing the query driving port.
#[derive(Clone)]
pub struct AppointmentQueryService<R> {
    appointment_repo: Arc<R>,
}

impl<R> AppointmentQueryService<R> {
    /// Create a new query service over the appointment repository.
    pub fn new(appointment_repo: Arc<R>) -> Self {
        Self { appointment_repo }
    }
}

#[async_trait]
impl<R> AppointmentsQuery for AppointmentQueryService<R>
where
    R: AppointmentRepository,
{
    async fn list_appointments(
        &self,
        request: ListAppointmentsRequest,
    ) -> Result<ListAppointmentsResponse, Error> {
        let appointments = self
            .appointment_repo
            .list(&request.filter)
            .await
            .map_err(map_repository_error)?;

        Ok(ListAppointmentsResponse { appointments })
    }

    async fn find_appointment(
        &self,
        request: FindAppointmentRequest,
    ) -> Result<FindAppointmentResponse, Error> {
        let appointment = self
            .appointment_repo
            .find_by_id(request.id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(request.id))?;

        Ok(FindAppointmentResponse { appointment })
    }
}

#[cfg(test)]
#[path = "appointment_service_tests.rs"]
mod tests;
