//! REST endpoints, their schemas, and request plumbing.

pub mod appointments;
pub mod error;
pub mod health;
pub mod schemas;
pub mod session;
pub mod state;
pub mod status;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;
