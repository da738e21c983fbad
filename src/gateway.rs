//! One database connection per request. No pool, no reuse, no retry.

use crate::config::DbConfig;
use crate::error::ApiError;
use sqlx::{ConnectOptions, PgConnection};

/// Open a fresh connection for the current request. The connection is
/// owned by the caller and dropped on every exit path, so a failed query
/// cannot strand it. On failure the diagnostic goes to the log and the
/// caller gets `ConnectionFailed`.
pub async fn connect(db: &DbConfig) -> Result<PgConnection, ApiError> {
    match db.connect_options().connect().await {
        Ok(conn) => Ok(conn),
        Err(e) => {
            tracing::error!(error = %e, host = %db.host, "database connection error");
            Err(ApiError::ConnectionFailed)
        }
    }
}
