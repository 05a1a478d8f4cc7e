//! Backend entry-point: wires REST endpoints, session auth, and OpenAPI docs.

mod server;

use std::env;

use actix_web::cookie::{Key, SameSite};
use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use repair_backend::inbound::http::health::HealthState;
use repair_backend::outbound::persistence::{DbPool, PoolConfig, migrations};
use server::{ServerConfig, ServerSettings};

/// Read the session key file, falling back to an ephemeral key in development.
fn load_session_key(settings: &ServerSettings) -> std::io::Result<Key> {
    let key_path = settings.session_key_file();
    match std::fs::read(key_path) {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path.display(), error = %e, "using temporary session key (dev only)");
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {}: {e}",
                    key_path.display()
                )))
            }
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

/// Resolve the database URL from `DATABASE_URL`, or compose it from the
/// individual Postgres variables. `None` means no database is configured and
/// the server falls back to in-memory storage.
fn database_url_from_env() -> Option<String> {
    if let Some(url) = non_empty_var("DATABASE_URL") {
        return Some(url);
    }
    let user = non_empty_var("POSTGRES_USER")?;
    let password = non_empty_var("POSTGRES_PASSWORD")?;
    let host = non_empty_var("DB_HOST")?;
    let database = non_empty_var("POSTGRES_DB")?;
    Some(format!("postgresql://{user}:{password}@{host}/{database}"))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load server settings: {e}")))?;
    let key = load_session_key(&settings)?;

    // Migrations run before the listener binds so a broken schema stops the
    // server instead of serving errors.
    let db_pool = match database_url_from_env() {
        Some(database_url) => {
            migrations::run_pending(&database_url)
                .map_err(|e| std::io::Error::other(format!("database migration failed: {e}")))?;
            let pool = DbPool::new(PoolConfig::new(database_url))
                .await
                .map_err(|e| std::io::Error::other(format!("database pool init failed: {e}")))?;
            Some(pool)
        }
        None => None,
    };

    let mut config = ServerConfig::new(
        key,
        settings.cookie_secure,
        SameSite::Lax,
        settings.allowed_origin().to_owned(),
        settings.bind_addr(),
    );
    if let Some(pool) = db_pool {
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    server::create_server(health_state, config)?.await
}
