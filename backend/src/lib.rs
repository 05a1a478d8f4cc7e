//! Repair appointment backend library.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// OpenAPI document served by Swagger UI and dumped by tooling.
pub use doc::ApiDoc;
/// Request tracing middleware attached by the server.
pub use middleware::RequestTracing;
