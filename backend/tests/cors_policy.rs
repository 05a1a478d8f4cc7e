//! Tests for the credentialed single-origin CORS policy.
//!
//! The layer under test mirrors the server wiring: one configured frontend
//! origin, any method, any header, credentials allowed.

use actix_cors::Cors;
use actix_http::Request;
use actix_web::{
    App,
    body::{BoxBody, EitherBody},
    dev::{Service, ServiceResponse},
    http::{StatusCode, header},
    test::{self, TestRequest},
};
use rstest::rstest;

use repair_backend::inbound::http::status::api_status;

const ALLOWED_ORIGIN: &str = "https://repair.go-pro-world.net";

fn frontend_cors() -> Cors {
    Cors::default()
        .allowed_origin(ALLOWED_ORIGIN)
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

async fn init_app() -> impl Service<
    Request,
    Response = ServiceResponse<EitherBody<BoxBody>>,
    Error = actix_web::Error,
> {
    test::init_service(App::new().wrap(frontend_cors()).service(api_status)).await
}

#[rstest]
fn preflight_allows_the_configured_origin() {
    actix_rt::System::new().block_on(async move {
        let app = init_app().await;

        let request = TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/")
            .insert_header((header::ORIGIN, ALLOWED_ORIGIN))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .expect("allow-origin header"),
            ALLOWED_ORIGIN
        );
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .expect("allow-credentials header"),
            "true"
        );
    });
}

#[rstest]
fn preflight_rejects_an_unlisted_origin() {
    actix_rt::System::new().block_on(async move {
        let app = init_app().await;

        let request = TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/")
            .insert_header((header::ORIGIN, "https://evil.example"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    });
}

#[rstest]
fn simple_request_carries_credentialed_origin_headers() {
    actix_rt::System::new().block_on(async move {
        let app = init_app().await;

        let request = TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, ALLOWED_ORIGIN))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .expect("allow-origin header"),
            ALLOWED_ORIGIN
        );
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .expect("allow-credentials header"),
            "true"
        );
    });
}
