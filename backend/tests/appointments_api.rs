//! End-to-end tests for the appointment endpoints.
//!
//! Each test drives the assembled HTTP surface through an in-memory store,
//! covering intake, listing, replacement, and deletion along with the error
//! payloads the middleware stack produces.

use std::sync::Arc;

use actix_http::Request;
use actix_web::{
    App,
    body::BoxBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test::{self, TestRequest},
    web,
};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use repair_backend::RequestTracing;
use repair_backend::domain::ports::{InMemoryAppointmentRepository, StaticLoginService};
use repair_backend::domain::{AppointmentCommandService, AppointmentQueryService, TRACE_ID_HEADER};
use repair_backend::inbound::http::appointments::{
    create_appointment, delete_appointment, list_appointments, update_appointment,
};
use repair_backend::inbound::http::error::{json_error_handler, path_error_handler};
use repair_backend::inbound::http::state::HttpState;
use repair_backend::inbound::http::status::api_status;

#[fixture]
fn http_state() -> web::Data<HttpState> {
    let repository = Arc::new(InMemoryAppointmentRepository::new());
    web::Data::new(HttpState {
        appointments_command: Arc::new(AppointmentCommandService::new(Arc::clone(&repository))),
        appointments_query: Arc::new(AppointmentQueryService::new(repository)),
        login: Arc::new(StaticLoginService::default()),
    })
}

async fn init_app(
    state: web::Data<HttpState>,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(state)
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .wrap(RequestTracing)
            .service(api_status)
            .service(create_appointment)
            .service(list_appointments)
            .service(update_appointment)
            .service(delete_appointment),
    )
    .await
}

fn intake_payload(customer: &str, date: &str, categories: Option<&str>) -> Value {
    json!({
        "customer_name": customer,
        "contact_person": "Sato",
        "phone_number": "03-0000",
        "machine_model": "EX200",
        "serial_number": "SN1",
        "failure_symptoms": "oil leak",
        "location": "Site A",
        "appointment_date": date,
        "cause_categories": categories,
    })
}

fn replacement_payload(status: &str) -> Value {
    json!({
        "customer_name": "Acme Construction",
        "contact_person": "Sato",
        "phone_number": "03-0000",
        "machine_model": "EX200",
        "serial_number": "SN1",
        "failure_symptoms": "oil leak",
        "location": "Site A",
        "appointment_date": "2024-06-01T09:00:00",
        "status": status,
        "worker_name": "Tanaka",
        "completion_notes": "replaced gasket",
        "completed_at": "2024-06-02T10:00:00",
    })
}

async fn create<S>(app: &S, payload: Value) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let response = test::call_service(
        app,
        TestRequest::post()
            .uri("/appointments")
            .set_json(payload)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    test::read_body_json(response).await
}

#[rstest]
fn status_banner_reports_live_service(http_state: web::Data<HttpState>) {
    actix_rt::System::new().block_on(async move {
        let app = init_app(http_state).await;

        let response = test::call_service(&app, TestRequest::get().uri("/").to_request()).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(TRACE_ID_HEADER));
        let body: Value = test::read_body_json(response).await;
        assert_eq!(
            body,
            json!({"status": "Success", "message": "Repair App API is live!"})
        );
    });
}

#[rstest]
fn appointment_lifecycle_from_intake_to_deletion(http_state: web::Data<HttpState>) {
    actix_rt::System::new().block_on(async move {
        let app = init_app(http_state).await;

        let created = create(
            &app,
            intake_payload("Acme Construction", "2024-06-01T09:00:00", None),
        )
        .await;
        assert_eq!(created["id"], 1);
        assert_eq!(created["status"], "pending");
        assert_eq!(created["worker_name"], Value::Null);
        assert!(created["created_at"].is_string());

        let listed = test::call_service(
            &app,
            TestRequest::get().uri("/appointments").to_request(),
        )
        .await;
        assert_eq!(listed.status(), StatusCode::OK);
        let listed: Value = test::read_body_json(listed).await;
        assert_eq!(listed.as_array().map(Vec::len), Some(1));

        let updated = test::call_service(
            &app,
            TestRequest::patch()
                .uri("/appointments/1")
                .set_json(replacement_payload("completed"))
                .to_request(),
        )
        .await;
        assert_eq!(updated.status(), StatusCode::OK);
        let updated: Value = test::read_body_json(updated).await;
        assert_eq!(updated["id"], 1);
        assert_eq!(updated["status"], "completed");
        assert_eq!(updated["worker_name"], "Tanaka");
        assert_eq!(updated["completed_at"], "2024-06-02T10:00:00");

        let deleted = test::call_service(
            &app,
            TestRequest::delete().uri("/appointments/1").to_request(),
        )
        .await;
        assert_eq!(deleted.status(), StatusCode::OK);
        let deleted: Value = test::read_body_json(deleted).await;
        assert_eq!(deleted, json!({"message": "Deleted"}));

        let missing = test::call_service(
            &app,
            TestRequest::delete().uri("/appointments/1").to_request(),
        )
        .await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        let missing: Value = test::read_body_json(missing).await;
        assert_eq!(missing["code"], "not_found");
    });
}

#[rstest]
fn category_filter_selects_matching_rows_in_date_order(http_state: web::Data<HttpState>) {
    actix_rt::System::new().block_on(async move {
        let app = init_app(http_state).await;

        create(
            &app,
            intake_payload("late", "2024-06-03T09:00:00", Some("engine,leak")),
        )
        .await;
        create(
            &app,
            intake_payload("early", "2024-06-01T09:00:00", Some("leakage")),
        )
        .await;
        create(
            &app,
            intake_payload("other", "2024-06-02T09:00:00", Some("brake")),
        )
        .await;

        let response = test::call_service(
            &app,
            TestRequest::get()
                .uri("/appointments?category=leak")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = test::read_body_json(response).await;
        let customers: Vec<&str> = body
            .as_array()
            .expect("list response")
            .iter()
            .filter_map(|record| record["customer_name"].as_str())
            .collect();
        assert_eq!(customers, ["early", "late"]);
    });
}

#[rstest]
#[case::missing_field(
    json!({"customer_name": "Acme"}),
    "missing_field"
)]
#[case::bad_timestamp(
    intake_payload("Acme", "next monday", None),
    "invalid_timestamp"
)]
fn rejected_intake_reports_field_details(
    http_state: web::Data<HttpState>,
    #[case] payload: Value,
    #[case] expected_code: &'static str,
) {
    actix_rt::System::new().block_on(async move {
        let app = init_app(http_state).await;

        let response = test::call_service(
            &app,
            TestRequest::post()
                .uri("/appointments")
                .set_json(payload)
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.headers().contains_key(TRACE_ID_HEADER));
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["code"], expected_code);
    });
}

#[rstest]
fn replacement_of_unknown_id_validates_body_first(http_state: web::Data<HttpState>) {
    actix_rt::System::new().block_on(async move {
        let app = init_app(http_state).await;

        // Invalid body on an absent id: validation wins over lookup.
        let invalid = test::call_service(
            &app,
            TestRequest::patch()
                .uri("/appointments/9999")
                .set_json(json!({"customer_name": "Acme"}))
                .to_request(),
        )
        .await;
        assert_eq!(invalid.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let valid = test::call_service(
            &app,
            TestRequest::patch()
                .uri("/appointments/9999")
                .set_json(replacement_payload("pending"))
                .to_request(),
        )
        .await;
        assert_eq!(valid.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(valid).await;
        assert_eq!(body["code"], "not_found");
    });
}
