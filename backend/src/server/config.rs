//! Configuration consumed by [`create_server`](super::create_server).

use actix_web::cookie::{Key, SameSite};
use repair_backend::outbound::persistence::DbPool;
use std::net::SocketAddr;

/// Everything the server needs to start: session cookie policy, the frontend
/// origin allowed by CORS, the bind address, and an optional database pool.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) allowed_origin: String,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Assemble a configuration without persistence.
    #[must_use]
    pub fn new(
        key: Key,
        cookie_secure: bool,
        same_site: SameSite,
        allowed_origin: String,
        bind_addr: SocketAddr,
    ) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            allowed_origin,
            bind_addr,
            db_pool: None,
        }
    }

    /// Attach a database pool.
    ///
    /// With a pool present the server stores appointments in PostgreSQL;
    /// without one it falls back to the in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
