//! Domain ports and supporting types for the hexagonal boundary.

mod appointment_repository;
mod appointments_command;
mod appointments_query;
mod login_service;

#[cfg(test)]
pub use appointment_repository::MockAppointmentRepository;
pub use appointment_repository::{
    AppointmentRepository, AppointmentRepositoryError, InMemoryAppointmentRepository,
};
#[cfg(test)]
pub use appointments_command::MockAppointmentsCommand;
pub use appointments_command::{
    AppointmentsCommand, CreateAppointmentRequest, CreateAppointmentResponse,
    DeleteAppointmentRequest, UpdateAppointmentRequest, UpdateAppointmentResponse,
};
#[cfg(test)]
pub use appointments_query::MockAppointmentsQuery;
pub use appointments_query::{
    AppointmentsQuery, FindAppointmentRequest, FindAppointmentResponse, ListAppointmentsRequest,
    ListAppointmentsResponse,
};
pub use login_service::{LoginService, StaticAccount, StaticLoginService};
