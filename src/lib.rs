//! trails-api: minimal REST access to a hiking-trails database.
//!
//! Every route follows the same shape: open a connection, run one fixed
//! statement, map the rows to JSON, respond. The service keeps no state
//! between requests; the database is the only source of truth.

pub mod config;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod routes;
pub mod rows;
pub mod sql;
pub mod state;

pub use config::DbConfig;
pub use error::ApiError;
pub use routes::app;
pub use state::AppState;
