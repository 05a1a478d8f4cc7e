//! End-to-end tests for login, session echo, and logout.
//!
//! The app here carries the same cookie-session configuration as the real
//! server so the issued cookie attributes can be asserted, not just the
//! handler bodies.

use std::sync::Arc;

use actix_http::Request;
use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::{
    App,
    body::BoxBody,
    cookie::{Cookie, Key, SameSite, time::Duration},
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test::{self, TestRequest},
    web,
};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use repair_backend::domain::ports::{
    InMemoryAppointmentRepository, StaticAccount, StaticLoginService,
};
use repair_backend::domain::{AppointmentCommandService, AppointmentQueryService};
use repair_backend::inbound::http::state::HttpState;
use repair_backend::inbound::http::users::{current_session, login, logout};

#[fixture]
fn http_state() -> web::Data<HttpState> {
    let repository = Arc::new(InMemoryAppointmentRepository::new());
    web::Data::new(HttpState {
        appointments_command: Arc::new(AppointmentCommandService::new(Arc::clone(&repository))),
        appointments_query: Arc::new(AppointmentQueryService::new(repository)),
        login: Arc::new(StaticLoginService::new(
            Some(StaticAccount::new("admin", "admin-pass")),
            Some(StaticAccount::new("worker", "worker-pass")),
        )),
    })
}

/// Session layer configured exactly as the server builds it.
fn production_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(true)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .session_lifecycle(PersistentSession::default().session_ttl(Duration::hours(2)))
        .build()
}

async fn init_app(
    state: web::Data<HttpState>,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(state)
            .wrap(production_session_middleware())
            .service(login)
            .service(logout)
            .service(current_session),
    )
    .await
}

fn session_cookie(response: &ServiceResponse<BoxBody>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie set")
        .into_owned()
}

async fn login_as<S>(app: &S, username: &str, password: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    test::call_service(
        app,
        TestRequest::post()
            .uri("/login")
            .set_json(json!({"username": username, "password": password}))
            .to_request(),
    )
    .await
}

#[rstest]
fn login_issues_cookie_with_expected_attributes(http_state: web::Data<HttpState>) {
    actix_rt::System::new().block_on(async move {
        let app = init_app(http_state).await;

        let response = login_as(&app, "admin", "admin-pass").await;
        assert_eq!(response.status(), StatusCode::OK);

        let cookie = session_cookie(&response);
        assert!(!cookie.value().is_empty());
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(Duration::hours(2)));
    });
}

#[rstest]
#[case::admin("admin", "admin-pass", true)]
#[case::operator("worker", "worker-pass", false)]
fn session_identity_round_trips_across_requests(
    http_state: web::Data<HttpState>,
    #[case] username: &'static str,
    #[case] password: &'static str,
    #[case] is_admin: bool,
) {
    actix_rt::System::new().block_on(async move {
        let app = init_app(http_state).await;

        let response = login_as(&app, username, password).await;
        assert_eq!(response.status(), StatusCode::OK);
        let cookie = session_cookie(&response);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body, json!({"user": username, "is_admin": is_admin}));

        let echoed = test::call_service(
            &app,
            TestRequest::get().uri("/session").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(echoed.status(), StatusCode::OK);
        let echoed: Value = test::read_body_json(echoed).await;
        assert_eq!(echoed, json!({"user": username, "is_admin": is_admin}));
    });
}

#[rstest]
fn wrong_credentials_are_rejected(http_state: web::Data<HttpState>) {
    actix_rt::System::new().block_on(async move {
        let app = init_app(http_state).await;

        let response = login_as(&app, "admin", "wrong").await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["code"], "unauthorized");
    });
}

#[rstest]
fn session_without_login_is_rejected(http_state: web::Data<HttpState>) {
    actix_rt::System::new().block_on(async move {
        let app = init_app(http_state).await;

        let response =
            test::call_service(&app, TestRequest::get().uri("/session").to_request()).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["code"], "unauthorized");
    });
}

#[rstest]
fn logout_replaces_the_cookie_with_a_removal(http_state: web::Data<HttpState>) {
    actix_rt::System::new().block_on(async move {
        let app = init_app(http_state).await;

        let login_response = login_as(&app, "worker", "worker-pass").await;
        let cookie = session_cookie(&login_response);

        let logout_response = test::call_service(
            &app,
            TestRequest::post().uri("/logout").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(logout_response.status(), StatusCode::OK);
        let removal = session_cookie(&logout_response);
        assert!(removal.value().is_empty(), "cookie value should be cleared");
        let body: Value = test::read_body_json(logout_response).await;
        assert_eq!(body, json!({"message": "Logged out"}));

        let after = test::call_service(
            &app,
            TestRequest::get().uri("/session").to_request(),
        )
        .await;
        assert_eq!(after.status(), StatusCode::UNAUTHORIZED);
    });
}
