//! The appointment aggregate and the value sets used to mutate it.
//!
//! An appointment tracks one construction-machinery service call from intake
//! through completion. The aggregate is deliberately permissive: text fields
//! carry whatever the operator typed, and `status` is a free-form string whose
//! well-known values (`pending`, `assigned`, `in_progress`, `completed`) are a
//! workflow convention rather than an enforced transition graph.
//!
//! Timestamps are [`NaiveDateTime`]: the store records wall-clock values
//! without an offset and the wire format follows suit (`2024-06-01T09:00:00`).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored appointment record.
///
/// ## Invariants
/// - `id` is unique, assigned by the store on create, and never reused.
/// - `created_at` is server-assigned at creation and never mutated.
/// - `cause_categories`, when present, is a delimiter-joined set of category
///   tags held in one field; filtering matches on substring containment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i32,
    pub customer_name: String,
    pub contact_person: String,
    pub phone_number: String,
    pub machine_model: String,
    pub serial_number: String,
    pub failure_symptoms: String,
    pub location: String,
    pub appointment_date: NaiveDateTime,
    pub status: String,
    pub worker_name: Option<String>,
    pub completion_notes: Option<String>,
    pub completed_at: Option<NaiveDateTime>,
    pub received_by: Option<String>,
    pub is_own_lease: bool,
    pub lease_location: Option<String>,
    pub cause_categories: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Validated intake fields for creating an appointment.
///
/// `status` is absent on purpose: new records always start as `pending`, and
/// `id`/`created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub customer_name: String,
    pub contact_person: String,
    pub phone_number: String,
    pub machine_model: String,
    pub serial_number: String,
    pub failure_symptoms: String,
    pub location: String,
    pub appointment_date: NaiveDateTime,
    pub received_by: Option<String>,
    pub is_own_lease: bool,
    pub lease_location: Option<String>,
    pub cause_categories: Option<String>,
}

/// The full mutable field set applied by an update.
///
/// Updates replace every mutable field: an optional field left `None` here
/// erases whatever the record previously held. Callers who change one field
/// must resend the rest. `id` and `created_at` are never touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentChanges {
    pub customer_name: String,
    pub contact_person: String,
    pub phone_number: String,
    pub machine_model: String,
    pub serial_number: String,
    pub failure_symptoms: String,
    pub location: String,
    pub appointment_date: NaiveDateTime,
    pub status: String,
    pub worker_name: Option<String>,
    pub completion_notes: Option<String>,
    pub completed_at: Option<NaiveDateTime>,
    pub received_by: Option<String>,
    pub is_own_lease: bool,
    pub lease_location: Option<String>,
    pub cause_categories: Option<String>,
}

/// Filter parameters for list reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentListFilter {
    /// Case-sensitive substring matched against `cause_categories`. Records
    /// without categories never match.
    pub cause_category: Option<String>,
}

impl Appointment {
    /// Apply a full-replace update, preserving `id` and `created_at`.
    #[must_use]
    pub fn with_changes(self, changes: AppointmentChanges) -> Self {
        Self {
            id: self.id,
            customer_name: changes.customer_name,
            contact_person: changes.contact_person,
            phone_number: changes.phone_number,
            machine_model: changes.machine_model,
            serial_number: changes.serial_number,
            failure_symptoms: changes.failure_symptoms,
            location: changes.location,
            appointment_date: changes.appointment_date,
            status: changes.status,
            worker_name: changes.worker_name,
            completion_notes: changes.completion_notes,
            completed_at: changes.completed_at,
            received_by: changes.received_by,
            is_own_lease: changes.is_own_lease,
            lease_location: changes.lease_location,
            cause_categories: changes.cause_categories,
            created_at: self.created_at,
        }
    }

    /// Whether `cause_categories` contains `needle` as a substring.
    ///
    /// Matching is case-sensitive and not token-aware: filtering on `"leak"`
    /// matches a record whose categories read `"engine,leak,noise"` as well as
    /// one reading `"leakage"`.
    #[must_use]
    pub fn matches_category(&self, needle: &str) -> bool {
        self.cause_categories
            .as_deref()
            .is_some_and(|categories| categories.contains(needle))
    }
}
