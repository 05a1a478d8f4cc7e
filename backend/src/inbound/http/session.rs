//! Session access for HTTP handlers.
//!
//! [`SessionContext`] wraps the Actix session so handlers speak in terms of
//! operators, not raw cookie keys. The cookie stores two entries: the
//! operator's username and the admin flag.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, OperatorIdentity};

pub(crate) const USER_KEY: &str = "user";
pub(crate) const IS_ADMIN_KEY: &str = "is_admin";

/// Operator-level view of the request session.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Wrap the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store the signed-in operator in the session cookie.
    pub fn persist_operator(&self, operator: &OperatorIdentity) -> Result<(), Error> {
        self.0
            .insert(USER_KEY, operator.username())
            .map_err(|error| Error::internal(format!("session write failed: {error}")))?;
        self.0
            .insert(IS_ADMIN_KEY, operator.is_admin())
            .map_err(|error| Error::internal(format!("session write failed: {error}")))
    }

    /// The signed-in operator, if the cookie holds one.
    ///
    /// A missing or unreadable admin flag downgrades to `false` rather than
    /// failing the request; the flag gates nothing on the appointment routes.
    pub fn operator(&self) -> Result<Option<OperatorIdentity>, Error> {
        let username = self
            .0
            .get::<String>(USER_KEY)
            .map_err(|error| Error::internal(format!("session read failed: {error}")))?;
        let Some(username) = username else {
            return Ok(None);
        };

        let is_admin = match self.0.get::<bool>(IS_ADMIN_KEY) {
            Ok(flag) => flag.unwrap_or(false),
            Err(error) => {
                tracing::warn!("invalid admin flag in session cookie: {error}");
                false
            }
        };

        Ok(Some(OperatorIdentity::new(username, is_admin)))
    }

    /// The signed-in operator, or `401 Unauthorized`.
    pub fn require_operator(&self) -> Result<OperatorIdentity, Error> {
        self.operator()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Drop every session key and instruct the browser to discard the cookie.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
