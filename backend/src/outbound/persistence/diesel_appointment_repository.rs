//! PostgreSQL-backed `AppointmentRepository` implementation using Diesel ORM.
//!
//! This adapter persists repair appointments and keeps the same observable
//! semantics as the in-memory store: sequential ids, server-assigned
//! `created_at`, and literal substring matching for the category filter.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{AppointmentRepository, AppointmentRepositoryError};
use crate::domain::{Appointment, AppointmentChanges, AppointmentListFilter, NewAppointment};

use super::models::{AppointmentChangeset, AppointmentRow, NewAppointmentRow};
use super::pool::{DbPool, PoolError};
use super::schema::appointments;

/// Status assigned to freshly created appointments.
const INITIAL_STATUS: &str = "pending";

/// Diesel-backed implementation of the appointment repository port.
#[derive(Clone)]
pub struct DieselAppointmentRepository {
    pool: DbPool,
}

impl DieselAppointmentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> AppointmentRepositoryError {
    let message = match error {
        PoolError::Checkout(message) | PoolError::Build(message) => message,
    };
    AppointmentRepositoryError::connection(message)
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> AppointmentRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => AppointmentRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => {
            AppointmentRepositoryError::query("database query error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            AppointmentRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => AppointmentRepositoryError::query("database error"),
        _ => AppointmentRepositoryError::query("database error"),
    }
}

/// Escape LIKE metacharacters so the category filter matches literally.
///
/// PostgreSQL treats backslash as the default LIKE escape character, so the
/// produced fragment is a plain substring pattern once wrapped in `%`.
fn escape_like(fragment: &str) -> String {
    fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Convert a database row into the domain appointment record.
fn row_to_appointment(row: AppointmentRow) -> Appointment {
    let AppointmentRow {
        id,
        customer_name,
        contact_person,
        phone_number,
        machine_model,
        serial_number,
        failure_symptoms,
        location,
        appointment_date,
        status,
        worker_name,
        completion_notes,
        completed_at,
        received_by,
        is_own_lease,
        lease_location,
        cause_categories,
        created_at,
    } = row;

    Appointment {
        id,
        customer_name,
        contact_person,
        phone_number,
        machine_model,
        serial_number,
        failure_symptoms,
        location,
        appointment_date,
        status,
        worker_name,
        completion_notes,
        completed_at,
        received_by,
        is_own_lease,
        lease_location,
        cause_categories,
        created_at,
    }
}

#[async_trait]
impl AppointmentRepository for DieselAppointmentRepository {
    async fn create(
        &self,
        appointment: &NewAppointment,
    ) -> Result<Appointment, AppointmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewAppointmentRow {
            customer_name: &appointment.customer_name,
            contact_person: &appointment.contact_person,
            phone_number: &appointment.phone_number,
            machine_model: &appointment.machine_model,
            serial_number: &appointment.serial_number,
            failure_symptoms: &appointment.failure_symptoms,
            location: &appointment.location,
            appointment_date: appointment.appointment_date,
            status: INITIAL_STATUS,
            received_by: appointment.received_by.as_deref(),
            is_own_lease: appointment.is_own_lease,
            lease_location: appointment.lease_location.as_deref(),
            cause_categories: appointment.cause_categories.as_deref(),
            created_at: Utc::now().naive_utc(),
        };

        let row = diesel::insert_into(appointments::table)
            .values(&new_row)
            .returning(AppointmentRow::as_returning())
            .get_result::<AppointmentRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_appointment(row))
    }

    async fn list(
        &self,
        filter: &AppointmentListFilter,
    ) -> Result<Vec<Appointment>, AppointmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = appointments::table
            .select(AppointmentRow::as_select())
            .order((appointments::appointment_date.asc(), appointments::id.asc()))
            .into_boxed();

        if let Some(category) = filter.cause_category.as_deref() {
            let pattern = format!("%{}%", escape_like(category));
            query = query.filter(appointments::cause_categories.like(pattern));
        }

        let rows = query
            .load::<AppointmentRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_appointment).collect())
    }

    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<Appointment>, AppointmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = appointments::table
            .find(id)
            .select(AppointmentRow::as_select())
            .first::<AppointmentRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_appointment))
    }

    async fn update(
        &self,
        id: i32,
        changes: &AppointmentChanges,
    ) -> Result<Option<Appointment>, AppointmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = AppointmentChangeset {
            customer_name: &changes.customer_name,
            contact_person: &changes.contact_person,
            phone_number: &changes.phone_number,
            machine_model: &changes.machine_model,
            serial_number: &changes.serial_number,
            failure_symptoms: &changes.failure_symptoms,
            location: &changes.location,
            appointment_date: changes.appointment_date,
            status: &changes.status,
            worker_name: changes.worker_name.as_deref(),
            completion_notes: changes.completion_notes.as_deref(),
            completed_at: changes.completed_at,
            received_by: changes.received_by.as_deref(),
            is_own_lease: changes.is_own_lease,
            lease_location: changes.lease_location.as_deref(),
            cause_categories: changes.cause_categories.as_deref(),
        };

        let row = diesel::update(appointments::table.find(id))
            .set(&changeset)
            .returning(AppointmentRow::as_returning())
            .get_result::<AppointmentRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_appointment))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppointmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(appointments::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
