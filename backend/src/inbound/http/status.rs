//! Root status endpoint.
//!
//! ```text
//! GET /
//! ```
//!
//! Deployment monitors poll this route, so the response body is fixed and
//! must not change shape.

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

/// Response payload confirming the API is reachable.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiStatusBody {
    #[schema(example = "Success")]
    pub status: String,
    #[schema(example = "Repair App API is live!")]
    pub message: String,
}

/// Report that the API is up.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API is reachable", body = ApiStatusBody)
    ),
    tags = ["status"],
    operation_id = "apiStatus",
    security([])
)]
#[get("/")]
pub async fn api_status() -> web::Json<ApiStatusBody> {
    web::Json(ApiStatusBody {
        status: "Success".to_owned(),
        message: "Repair App API is live!".to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test as actix_test};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn status_body_is_exact() {
        let app = actix_test::init_service(App::new().service(api_status)).await;

        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request())
                .await;
        assert!(response.status().is_success());

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body,
            json!({"status": "Success", "message": "Repair App API is live!"})
        );
    }
}
