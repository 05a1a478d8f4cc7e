//! HTTP server assembly.
//!
//! Builds the per-worker [`App`] with its middleware stack and all routes,
//! then binds and spawns the listener.

mod config;
mod settings;
mod state_builders;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use state_builders::build_http_state;

use actix_cors::Cors;
use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::body::{BoxBody, EitherBody};
use actix_web::cookie::time::Duration as CookieDuration;
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use repair_backend::RequestTracing;
#[cfg(debug_assertions)]
use repair_backend::doc::ApiDoc;
use repair_backend::inbound::http::appointments::{
    create_appointment, delete_appointment, list_appointments, update_appointment,
};
use repair_backend::inbound::http::error::{json_error_handler, path_error_handler};
use repair_backend::inbound::http::health::{HealthState, live, ready};
use repair_backend::inbound::http::state::HttpState;
use repair_backend::inbound::http::status::api_status;
use repair_backend::inbound::http::users::{current_session, login, logout};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the CORS layer for the configured frontend origin.
///
/// Credentialed requests require a literal origin; wildcards would make the
/// browser drop the session cookie.
fn build_cors(allowed_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(allowed_origin)
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

/// Build the cookie-session layer.
///
/// The frontend depends on these attributes: the cookie is named `session`,
/// scoped to `/`, HTTP-only, private (encrypted), and expires two hours after
/// the last write.
fn build_session_layer(
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(PersistentSession::default().session_ttl(CookieDuration::hours(2)))
        .build()
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    session: SessionMiddleware<CookieSessionStore>,
    cors: Cors,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    // Middleware runs outermost-last: requests pass tracing, then CORS, then
    // the session layer, before reaching a handler.
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .wrap(session)
        .wrap(cors)
        .wrap(RequestTracing)
        .service(api_status)
        .service(create_appointment)
        .service(list_appointments)
        .service(update_appointment)
        .service(delete_appointment)
        .service(login)
        .service(logout)
        .service(current_session)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind the listener and spawn the HTTP server.
///
/// Shared service state is built once from `config`; each worker then clones
/// it and rebuilds its own middleware layers. Readiness is flagged after a
/// successful bind, so the probe flips only when the socket is actually
/// accepting.
///
/// # Errors
/// Propagates [`std::io::Error`] when the socket cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let worker_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        allowed_origin,
        bind_addr,
        db_pool: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(
            worker_health_state.clone(),
            http_state.clone(),
            build_session_layer(key.clone(), cookie_secure, same_site),
            build_cors(&allowed_origin),
        )
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
