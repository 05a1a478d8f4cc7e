//! Login and session handlers.
//!
//! ```text
//! POST /login {"username":"admin","password":"password"}
//! POST /logout
//! GET /session
//! ```
//!
//! Authentication compares credentials against two statically configured
//! accounts and stores the outcome in the session cookie; the appointment
//! routes themselves are open, so the session exists purely for the frontend
//! to decide which views to show.

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, LoginCredentials, LoginValidationError, OperatorIdentity};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Credentials posted to [`login`].
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "admin")]
    pub username: String,
    #[schema(example = "password")]
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

/// Session payload returned by login and session lookup.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionBody {
    /// Username the operator signed in with.
    #[schema(example = "admin")]
    pub user: String,
    /// Whether the operator used the administrative account.
    pub is_admin: bool,
}

impl From<OperatorIdentity> for SessionBody {
    fn from(identity: OperatorIdentity) -> Self {
        Self {
            user: identity.username().to_owned(),
            is_admin: identity.is_admin(),
        }
    }
}

/// Confirmation payload returned by logout.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LogoutBody {
    #[schema(example = "Logged out")]
    pub message: String,
}

/// Authenticate an operator and establish a session.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (
            status = 200,
            description = "Login success",
            body = SessionBody,
            headers(("Set-Cookie" = String, description = "Session cookie"))
        ),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 422, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<SessionBody>> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(missing_credential_error)?;
    let operator = state.login.authenticate(&credentials).await?;
    session.persist_operator(&operator)?;
    Ok(web::Json(SessionBody::from(operator)))
}

/// Turns a blank-credential failure into the 422 payload, with `details`
/// naming the offending field.
fn missing_credential_error(err: LoginValidationError) -> Error {
    let field = match err {
        LoginValidationError::EmptyUsername => "username",
        LoginValidationError::EmptyPassword => "password",
    };
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": field, "code": format!("empty_{field}") }))
}

/// Discard the current session.
#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 200, description = "Session discarded", body = LogoutBody)
    ),
    tags = ["auth"],
    operation_id = "logout",
    security([])
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> web::Json<LogoutBody> {
    session.clear();
    web::Json(LogoutBody {
        message: "Logged out".to_owned(),
    })
}

/// Report the signed-in operator, if any.
#[utoipa::path(
    get,
    path = "/session",
    responses(
        (status = 200, description = "Current session", body = SessionBody),
        (status = 401, description = "No session", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "currentSession",
    security(("SessionCookie" = []))
)]
#[get("/session")]
pub async fn current_session(session: SessionContext) -> ApiResult<web::Json<SessionBody>> {
    let operator = session.require_operator()?;
    Ok(web::Json(SessionBody::from(operator)))
}
