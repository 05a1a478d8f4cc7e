//! Port for appointment persistence.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Appointment, AppointmentChanges, AppointmentListFilter, NewAppointment};

/// Errors raised by appointment store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentRepositoryError {
    /// Store connection could not be established.
    #[error("appointment store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("appointment store query failed: {message}")]
    Query { message: String },
}

impl AppointmentRepositoryError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for durable appointment storage, one operation per access pattern.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Persist a new appointment, assigning its id and creation timestamp.
    async fn create(
        &self,
        appointment: &NewAppointment,
    ) -> Result<Appointment, AppointmentRepositoryError>;

    /// List appointments ordered by `appointment_date` then id, optionally
    /// restricted to records whose categories contain the filter substring.
    async fn list(
        &self,
        filter: &AppointmentListFilter,
    ) -> Result<Vec<Appointment>, AppointmentRepositoryError>;

    /// Point lookup by primary key.
    async fn find_by_id(&self, id: i32)
    -> Result<Option<Appointment>, AppointmentRepositoryError>;

    /// Replace every mutable field of the identified record. Returns `None`
    /// when no record has that id.
    async fn update(
        &self,
        id: i32,
        changes: &AppointmentChanges,
    ) -> Result<Option<Appointment>, AppointmentRepositoryError>;

    /// Remove the identified record permanently. Returns `false` when no
    /// record has that id.
    async fn delete(&self, id: i32) -> Result<bool, AppointmentRepositoryError>;
}

#[derive(Debug, Default)]
struct InMemoryState {
    next_id: i32,
    records: Vec<Appointment>,
}

/// Table-backed store used when no database is configured, and as the
/// reference implementation in handler tests.
///
/// Semantics mirror the SQL adapter: ids are assigned sequentially and never
/// reused, `created_at` comes from the server clock, and list filtering is
/// case-sensitive substring containment on `cause_categories`.
#[derive(Debug, Default)]
pub struct InMemoryAppointmentRepository {
    state: Mutex<InMemoryState>,
}

impl InMemoryAppointmentRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, InMemoryState>, AppointmentRepositoryError> {
        self.state
            .lock()
            .map_err(|_| AppointmentRepositoryError::query("appointment store lock poisoned"))
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn create(
        &self,
        appointment: &NewAppointment,
    ) -> Result<Appointment, AppointmentRepositoryError> {
        let mut state = self.lock()?;
        state.next_id += 1;
        let record = Appointment {
            id: state.next_id,
            customer_name: appointment.customer_name.clone(),
            contact_person: appointment.contact_person.clone(),
            phone_number: appointment.phone_number.clone(),
            machine_model: appointment.machine_model.clone(),
            serial_number: appointment.serial_number.clone(),
            failure_symptoms: appointment.failure_symptoms.clone(),
            location: appointment.location.clone(),
            appointment_date: appointment.appointment_date,
            status: "pending".to_owned(),
            worker_name: None,
            completion_notes: None,
            completed_at: None,
            received_by: appointment.received_by.clone(),
            is_own_lease: appointment.is_own_lease,
            lease_location: appointment.lease_location.clone(),
            cause_categories: appointment.cause_categories.clone(),
            created_at: Utc::now().naive_utc(),
        };
        state.records.push(record.clone());
        Ok(record)
    }

    async fn list(
        &self,
        filter: &AppointmentListFilter,
    ) -> Result<Vec<Appointment>, AppointmentRepositoryError> {
        let state = self.lock()?;
        let mut records: Vec<Appointment> = match filter.cause_category.as_deref() {
            Some(needle) => state
                .records
                .iter()
                .filter(|record| record.matches_category(needle))
                .cloned()
                .collect(),
            None => state.records.clone(),
        };
        records.sort_by_key(|record| (record.appointment_date, record.id));
        Ok(records)
    }

    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<Appointment>, AppointmentRepositoryError> {
        let state = self.lock()?;
        Ok(state.records.iter().find(|record| record.id == id).cloned())
    }

    async fn update(
        &self,
        id: i32,
        changes: &AppointmentChanges,
    ) -> Result<Option<Appointment>, AppointmentRepositoryError> {
        let mut state = self.lock()?;
        let Some(record) = state.records.iter_mut().find(|record| record.id == id) else {
            return Ok(None);
        };
        *record = record.clone().with_changes(changes.clone());
        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppointmentRepositoryError> {
        let mut state = self.lock()?;
        let before = state.records.len();
        state.records.retain(|record| record.id != id);
        Ok(state.records.len() < before)
    }
}
