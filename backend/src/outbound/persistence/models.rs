//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::appointments;

/// Row struct for reading from the appointments table.
///
/// Field order must match the column order in `schema.rs`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = appointments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AppointmentRow {
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

/// Insertable struct for creating new appointment records.
///
/// Leaves `id` to the database sequence. Progress fields (`worker_name`,
/// `completion_notes`, `completed_at`) are absent so new rows start NULL.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = appointments)]
pub(crate) struct NewAppointmentRow<'a> {
    pub customer_name: &'a str,
    pub contact_person: &'a str,
    pub phone_number: &'a str,
    pub machine_model: &'a str,
    pub serial_number: &'a str,
    pub failure_symptoms: &'a str,
    pub location: &'a str,
    pub appointment_date: NaiveDateTime,
    pub status: &'a str,
    pub received_by: Option<&'a str>,
    pub is_own_lease: bool,
    pub lease_location: Option<&'a str>,
    pub cause_categories: Option<&'a str>,
    pub created_at: NaiveDateTime,
}

/// Changeset struct for full-replace updates.
///
/// `treat_none_as_null` makes `None` write SQL NULL instead of skipping the
/// column, so an update erases any optional field the caller omitted.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = appointments)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct AppointmentChangeset<'a> {
    pub customer_name: &'a str,
    pub contact_person: &'a str,
    pub phone_number: &'a str,
    pub machine_model: &'a str,
    pub serial_number: &'a str,
    pub failure_symptoms: &'a str,
    pub location: &'a str,
    pub appointment_date: NaiveDateTime,
    pub status: &'a str,
    pub worker_name: Option<&'a str>,
    pub completion_notes: Option<&'a str>,
    pub completed_at: Option<NaiveDateTime>,
    pub received_by: Option<&'a str>,
    pub is_own_lease: bool,
    pub lease_location: Option<&'a str>,
    pub cause_categories: Option<&'a str>,
}
