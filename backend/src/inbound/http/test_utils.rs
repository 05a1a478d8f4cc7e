//! Shared fixtures for HTTP handler tests.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;

/// Session layer backed by a throwaway signing key.
///
/// The cookie keeps its production name but drops the `Secure` flag so it
/// survives the plain-HTTP round trips made by the test client.
pub(crate) fn ephemeral_session_layer() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Pulls the `session` cookie out of a response, panicking when it is absent.
pub(crate) fn session_cookie_of<B>(res: &ServiceResponse<B>) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie in response")
        .into_owned()
}
