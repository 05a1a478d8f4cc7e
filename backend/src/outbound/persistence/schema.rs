//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. Diesel uses
//! them for compile-time query validation and type-safe SQL generation.
//!
//! # Maintenance
//!
//! When migrations change the schema, regenerate this file with
//! `diesel print-schema` against a migrated database, or update it by hand
//! to match.

diesel::table! {
    /// Repair appointments for construction machinery service calls.
    ///
    /// One row per reported fault, from intake through completion. Timestamps
    /// are wall-clock local time without zone, matching the API contract.
    appointments (id) {
        /// Primary key: sequential serial, never reused.
        id -> Int4,
        /// Customer or company reporting the fault.
        customer_name -> Varchar,
        /// Person to reach on site.
        contact_person -> Varchar,
        /// Contact phone number, stored verbatim.
        phone_number -> Varchar,
        /// Machine model designation, e.g. an excavator series code.
        machine_model -> Varchar,
        /// Manufacturer serial number of the faulty machine.
        serial_number -> Varchar,
        /// Free-text description of the reported fault.
        failure_symptoms -> Text,
        /// Where the machine is located for the visit.
        location -> Varchar,
        /// Scheduled visit date and time.
        appointment_date -> Timestamp,
        /// Workflow state, free-form text. New rows start as `pending`.
        status -> Varchar,
        /// Technician assigned to the visit, once known.
        worker_name -> Nullable<Varchar>,
        /// Notes recorded when the repair is finished.
        completion_notes -> Nullable<Text>,
        /// When the repair was finished.
        completed_at -> Nullable<Timestamp>,
        /// Staff member who took the call.
        received_by -> Nullable<Varchar>,
        /// Whether the machine is from the company's own lease fleet.
        is_own_lease -> Bool,
        /// Lease depot the machine belongs to, for own-lease machines.
        lease_location -> Nullable<Varchar>,
        /// Comma-separated fault categories used by the list filter.
        cause_categories -> Nullable<Text>,
        /// Record creation timestamp, assigned by the server.
        created_at -> Timestamp,
    }
}
