//! OpenAPI document for the REST API.
//!
//! [`ApiDoc`] collects every route, the schema wrappers from
//! `inbound::http::schemas`, and the session cookie security scheme into one
//! document. Swagger UI serves it in debug builds at `/docs`, and
//! `cargo run --bin openapi-dump` prints it for external tooling.

use crate::inbound::http::schemas::{AppointmentSchema, ErrorCodeSchema, ErrorSchema};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Repair backend API",
        description = "HTTP interface for repair appointment intake and tracking, \
                       session-authenticated access, and health probes.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::status::api_status,
        crate::inbound::http::appointments::create_appointment,
        crate::inbound::http::appointments::list_appointments,
        crate::inbound::http::appointments::update_appointment,
        crate::inbound::http::appointments::delete_appointment,
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::current_session,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(AppointmentSchema, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "status", description = "Service status banner"),
        (name = "appointments", description = "Repair appointment intake and tracking"),
        (name = "auth", description = "Session login and logout"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
