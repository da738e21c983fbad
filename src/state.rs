//! Shared state for all routes.

use crate::config::DbConfig;

#[derive(Clone)]
pub struct AppState {
    /// Each handler opens its own private connection from these settings.
    pub db: DbConfig,
}
