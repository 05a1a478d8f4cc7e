//! Tests for HTTP error mapping.

use super::*;
use crate::domain::Error;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, ResponseError, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

const TRACE_ID: &str = "9f86d081-8848-4bd9-a0c4-8994fe32bd26";

/// Renders `error` through `ResponseError` and returns the status code, the
/// `trace-id` header when one was set, and the decoded JSON payload.
async fn rendered_parts(error: &Error) -> (StatusCode, Option<String>, Error) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let header = response.headers().get(TRACE_ID_HEADER).map(|value| {
        value
            .to_str()
            .expect("trace-id header is valid UTF-8")
            .to_owned()
    });
    let bytes = to_bytes(response.into_body())
        .await
        .expect("response body is readable");
    let payload = serde_json::from_slice(&bytes).expect("payload decodes as an Error");
    (status, header, payload)
}

#[rstest]
#[case::invalid_request(Error::invalid_request("bad"), StatusCode::UNPROCESSABLE_ENTITY)]
#[case::unauthorized(Error::unauthorized("no auth"), StatusCode::UNAUTHORIZED)]
#[case::not_found(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case::service_unavailable(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case::internal(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn each_code_owns_a_status(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[actix_web::test]
async fn internal_details_never_reach_the_client() {
    let error = Error::internal("boom")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"secret": "x"}));

    let (status, header, payload) = rendered_parts(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(payload.code(), ErrorCode::InternalError);
    assert_eq!(payload.message(), "Internal server error");
    assert!(payload.details().is_none());
}

#[actix_web::test]
async fn validation_failures_keep_their_details() {
    let error = Error::invalid_request("bad")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"field": "customer_name"}));

    let (status, header, payload) = rendered_parts(&error).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(payload.code(), ErrorCode::InvalidRequest);
    assert_eq!(payload.message(), "bad");
    assert_eq!(payload.details(), Some(&json!({"field": "customer_name"})));
}

#[actix_web::test]
async fn untraced_errors_send_no_trace_header() {
    let error = Error::invalid_request("bad");

    let (status, header, payload) = rendered_parts(&error).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(header, None);
    assert_eq!(payload.trace_id(), None);
}

#[test]
fn framework_errors_collapse_to_a_generic_internal_error() {
    let err: Error = actix_web::error::ErrorBadRequest("boom").into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Internal server error");
    assert_eq!(err.trace_id(), None);
    assert_eq!(err.details(), None);
}

#[actix_web::test]
async fn malformed_json_body_maps_to_unprocessable_entity() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route(
                "/echo",
                web::post().to(|_body: web::Json<Value>| async { HttpResponse::Ok().finish() }),
            ),
    )
    .await;

    let request = actix_test::TestRequest::post()
        .uri("/echo")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], "invalid_body");
}

#[actix_web::test]
async fn non_numeric_path_parameter_maps_to_unprocessable_entity() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .route(
                "/items/{id}",
                web::get().to(|id: web::Path<i32>| async move {
                    HttpResponse::Ok().body(id.to_string())
                }),
            ),
    )
    .await;

    let request = actix_test::TestRequest::get().uri("/items/abc").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], "invalid_path");
}
