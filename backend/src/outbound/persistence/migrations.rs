//! Embedded Diesel migrations applied at server start-up.
//!
//! Migration SQL is compiled into the binary so deployments never depend on
//! a migrations directory being present next to the executable. The runner
//! uses a short-lived synchronous connection; it executes once during boot,
//! before the async pool and HTTP server exist.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying embedded migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The migration connection could not be established.
    #[error("migration connection failed: {message}")]
    Connection { message: String },

    /// A migration failed to apply.
    #[error("migration failed to apply: {message}")]
    Apply { message: String },
}

/// Apply all pending embedded migrations against the given database.
///
/// # Errors
///
/// Returns [`MigrationError::Connection`] when the database is unreachable
/// and [`MigrationError::Apply`] when a migration itself fails. Callers are
/// expected to treat either as fatal at boot.
pub fn run_pending(database_url: &str) -> Result<(), MigrationError> {
    let mut connection =
        PgConnection::establish(database_url).map_err(|error| MigrationError::Connection {
            message: error.to_string(),
        })?;

    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|error| MigrationError::Apply {
            message: error.to_string(),
        })?;

    for version in &applied {
        info!(%version, "applied migration");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn connection_error_formats_message() {
        let err = MigrationError::Connection {
            message: "no such host".to_owned(),
        };
        assert!(err.to_string().contains("no such host"));
    }

    #[rstest]
    fn apply_error_formats_message() {
        let err = MigrationError::Apply {
            message: "syntax error".to_owned(),
        };
        assert!(err.to_string().contains("syntax error"));
    }
}
