//! Connection pooling for the PostgreSQL store.
//!
//! Repositories borrow connections from a shared bb8 pool of `diesel-async`
//! connections. Checkout is bounded by a timeout, and every failure mode is
//! folded into [`PoolError`] so callers never handle `bb8` types directly.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_MIN_IDLE: u32 = 2;
const DEFAULT_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(30);

/// Failures raised by the connection pool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection became available within the checkout timeout, or the
    /// checked-out connection was broken.
    #[error("pool checkout failed: {0}")]
    Checkout(String),

    /// The pool itself could not be constructed.
    #[error("pool construction failed: {0}")]
    Build(String),
}

/// Tuning knobs for [`DbPool`].
///
/// `new` applies defaults that suit a small service: ten connections, two
/// kept idle, thirty seconds to wait for a checkout.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    checkout_timeout: Duration,
}

impl PoolConfig {
    /// Configuration with default sizing for the given database URL.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: DEFAULT_MAX_CONNECTIONS,
            min_idle: Some(DEFAULT_MIN_IDLE),
            checkout_timeout: DEFAULT_CHECKOUT_TIMEOUT,
        }
    }

    /// Cap the number of simultaneously open connections.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Number of idle connections to keep warm, or `None` to let the pool
    /// drain to zero.
    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    /// How long a checkout may wait before failing.
    pub fn with_checkout_timeout(mut self, timeout: Duration) -> Self {
        self.checkout_timeout = timeout;
        self
    }

    /// The configured database URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Shared pool of async Diesel connections.
///
/// Cloning is cheap; clones hand out connections from the same pool.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Open a pool against the configured database.
    ///
    /// # Errors
    /// Returns [`PoolError::Build`] when the URL is malformed or the initial
    /// connections cannot be established.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let inner = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.checkout_timeout)
            .build(AsyncDieselConnectionManager::<AsyncPgConnection>::new(
                &config.database_url,
            ))
            .await
            .map_err(|err| PoolError::Build(err.to_string()))?;
        Ok(Self { inner })
    }

    /// Borrow a connection, waiting at most the configured checkout timeout.
    ///
    /// # Errors
    /// Returns [`PoolError::Checkout`] when the wait expires or the pool is
    /// broken.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::Checkout(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn defaults_suit_a_small_service() {
        let config = PoolConfig::new("postgres://localhost/repair_test");
        assert_eq!(config.database_url(), "postgres://localhost/repair_test");
        assert_eq!(config.max_size, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.min_idle, Some(DEFAULT_MIN_IDLE));
        assert_eq!(config.checkout_timeout, DEFAULT_CHECKOUT_TIMEOUT);
    }

    #[rstest]
    fn every_knob_can_be_overridden() {
        let config = PoolConfig::new("postgres://localhost/repair_test")
            .with_max_size(4)
            .with_min_idle(None)
            .with_checkout_timeout(Duration::from_secs(5));
        assert_eq!(config.max_size, 4);
        assert_eq!(config.min_idle, None);
        assert_eq!(config.checkout_timeout, Duration::from_secs(5));
    }

    #[rstest]
    #[case::checkout(PoolError::Checkout("timed out".into()), "pool checkout failed: timed out")]
    #[case::build(PoolError::Build("bad url".into()), "pool construction failed: bad url")]
    fn errors_render_their_context(#[case] err: PoolError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }
}
