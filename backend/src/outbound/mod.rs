//! Infrastructure-facing implementations of the domain ports.
//!
//! Adapters translate between domain types and whatever the infrastructure
//! speaks; they contain no business logic. The only adapter today is
//! [`persistence`], the PostgreSQL appointment store.

pub mod persistence;
