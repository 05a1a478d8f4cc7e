//! Shared state injected into HTTP handlers.
//!
//! Handlers receive the bundle through `actix_web::web::Data` and talk only
//! to domain ports, so tests can swap in in-memory implementations.

use std::sync::Arc;

use crate::domain::ports::{AppointmentsCommand, AppointmentsQuery, LoginService};

/// Ports the HTTP surface depends on.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use repair_backend::domain::ports::{InMemoryAppointmentRepository, StaticLoginService};
/// use repair_backend::domain::{AppointmentCommandService, AppointmentQueryService};
/// use repair_backend::inbound::http::state::HttpState;
///
/// let repo = Arc::new(InMemoryAppointmentRepository::new());
/// let state = HttpState {
///     appointments_command: Arc::new(AppointmentCommandService::new(Arc::clone(&repo))),
///     appointments_query: Arc::new(AppointmentQueryService::new(repo)),
///     login: Arc::new(StaticLoginService::default()),
/// };
/// let _command = state.appointments_command.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub appointments_command: Arc<dyn AppointmentsCommand>,
    pub appointments_query: Arc<dyn AppointmentsQuery>,
    pub login: Arc<dyn LoginService>,
}
