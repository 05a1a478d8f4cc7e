//! Domain primitives and services for the repair appointment workflow.
//!
//! Purpose: define the appointment aggregate, the services that drive its
//! lifecycle, and the ports those services speak through. Transport and
//! persistence concerns stay in the inbound and outbound layers; types here
//! document their invariants and serde contracts in their own Rustdoc.

mod appointment;
mod appointment_service;
mod auth;
mod error;
pub mod ports;
mod trace_id;

pub use self::appointment::{Appointment, AppointmentChanges, AppointmentListFilter, NewAppointment};
pub use self::appointment_service::{AppointmentCommandService, AppointmentQueryService};
pub use self::auth::{LoginCredentials, LoginValidationError, OperatorIdentity};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
