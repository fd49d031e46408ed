use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tracing::{info, instrument, warn};

use crate::application::ports::RepositoryError;

const CONNECT_ATTEMPTS: u32 = 6;
const FIRST_BACKOFF: Duration = Duration::from_millis(500);
const MAX_BACKOFF: Duration = Duration::from_secs(8);
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Connects to Postgres, waiting for a database that is still starting.
///
/// A malformed URL fails at once; only connection errors are retried.
#[instrument(skip(url))]
pub async fn create_pool(url: &str, max_connections: u32) -> Result<PgPool, RepositoryError> {
    let options: PgConnectOptions = url
        .parse()
        .map_err(|e| RepositoryError::ConnectionFailed(format!("invalid database url: {e}")))?;

    let pool_options = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT);

    let mut backoff = FIRST_BACKOFF;
    let mut attempt = 1;

    loop {
        let error = match pool_options.clone().connect_with(options.clone()).await {
            Ok(pool) => {
                info!(attempt, max_connections, "Connected to PostgreSQL");
                return Ok(pool);
            }
            Err(e) => e,
        };

        if attempt == CONNECT_ATTEMPTS {
            return Err(RepositoryError::ConnectionFailed(format!(
                "gave up after {CONNECT_ATTEMPTS} attempts: {error}"
            )));
        }

        warn!(
            error = %error,
            attempt,
            backoff_ms = backoff.as_millis(),
            "PostgreSQL unreachable, will retry"
        );
        tokio::time::sleep(backoff).await;
        backoff = (backoff * 2).min(MAX_BACKOFF);
        attempt += 1;
    }
}

/// Applies the embedded `migrations/` directory.
#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<(), RepositoryError> {
    sqlx::migrate!()
        .run(pool)
        .await
        .map_err(|e| RepositoryError::MigrationFailed(e.to_string()))?;

    info!("Database migrations applied");
    Ok(())
}
