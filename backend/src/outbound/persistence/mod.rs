//! Appointment storage on PostgreSQL via Diesel.
//!
//! Queries run through `diesel-async` on a `bb8` pool. The repository only
//! translates between row structs and domain types; row structs (`models`)
//! and table definitions (`schema`) stay private, and database failures map
//! to `AppointmentRepositoryError` variants so callers never see Diesel
//! error types.
//!
//! ```ignore
//! use repair_backend::outbound::persistence::{DbPool, DieselAppointmentRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/repair")).await?;
//! let repo = DieselAppointmentRepository::new(pool);
//! ```

mod diesel_appointment_repository;
pub mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_appointment_repository::DieselAppointmentRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
