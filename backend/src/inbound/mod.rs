//! Adapters turning external requests into domain service calls.
//!
//! The only transport today is HTTP, under [`http`].

pub mod http;
