//! Builders for HTTP state ports and repository-backed service pairs.

use std::env;
use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use repair_backend::domain::ports::{
    AppointmentRepository, AppointmentsCommand, AppointmentsQuery, InMemoryAppointmentRepository,
    LoginService, StaticAccount, StaticLoginService,
};
use repair_backend::domain::{AppointmentCommandService, AppointmentQueryService};
use repair_backend::inbound::http::state::HttpState;
use repair_backend::outbound::persistence::DieselAppointmentRepository;

use super::ServerConfig;

/// Wrap a repository in the command and query services, sharing one handle.
fn build_appointment_services<R>(
    repository: Arc<R>,
) -> (Arc<dyn AppointmentsCommand>, Arc<dyn AppointmentsQuery>)
where
    R: AppointmentRepository + 'static,
{
    (
        Arc::new(AppointmentCommandService::new(Arc::clone(&repository)))
            as Arc<dyn AppointmentsCommand>,
        Arc::new(AppointmentQueryService::new(repository)) as Arc<dyn AppointmentsQuery>,
    )
}

/// Build the appointment service pair using a database-backed repository when
/// a pool is available, otherwise using the in-memory store.
fn build_appointment_pair_with_pool<Pool, R>(
    pool: &Option<Pool>,
    make_repository: impl FnOnce(&Pool) -> R,
) -> (Arc<dyn AppointmentsCommand>, Arc<dyn AppointmentsQuery>)
where
    R: AppointmentRepository + 'static,
{
    match pool {
        Some(pool) => build_appointment_services(Arc::new(make_repository(pool))),
        None => {
            warn!("no database pool configured; appointments are stored in memory and lost on restart");
            build_appointment_services(Arc::new(InMemoryAppointmentRepository::new()))
        }
    }
}

fn build_appointment_pair(
    config: &ServerConfig,
) -> (Arc<dyn AppointmentsCommand>, Arc<dyn AppointmentsQuery>) {
    build_appointment_pair_with_pool(&config.db_pool, |pool| {
        DieselAppointmentRepository::new(pool.clone())
    })
}

/// Read one account from a pair of environment variables.
///
/// An account only exists when both variables are set and non-empty; a
/// half-configured pair is ignored with a warning rather than letting a
/// blank password through.
fn static_account_from_env(user_var: &str, password_var: &str) -> Option<StaticAccount> {
    let username = env::var(user_var).ok().filter(|value| !value.is_empty());
    let password = env::var(password_var).ok().filter(|value| !value.is_empty());
    match (username, password) {
        (Some(username), Some(password)) => Some(StaticAccount::new(username, password)),
        (None, None) => None,
        _ => {
            warn!("ignoring partially configured account: {user_var} and {password_var} must both be set");
            None
        }
    }
}

/// Build the login service from the `ADMIN_USER`/`ADMIN_PASSWORD` and
/// `USER_NAME`/`USER_PASSWORD` environment pairs.
fn login_service_from_env() -> Arc<dyn LoginService> {
    let admin = static_account_from_env("ADMIN_USER", "ADMIN_PASSWORD");
    let operator = static_account_from_env("USER_NAME", "USER_PASSWORD");
    if admin.is_none() && operator.is_none() {
        warn!("no login accounts configured; every login attempt will be rejected");
    }
    Arc::new(StaticLoginService::new(admin, operator))
}

/// Build the shared HTTP state from configured ports and in-memory fallbacks.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let (appointments_command, appointments_query) = build_appointment_pair(config);
    let login = login_service_from_env();

    web::Data::new(HttpState {
        appointments_command,
        appointments_query,
        login,
    })
}
