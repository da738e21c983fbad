//! The five endpoint handlers: four full-table scans and one insert.

use crate::error::ApiError;
use crate::gateway;
use crate::rows::rows_to_json;
use crate::sql;
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::{http::StatusCode, Json};
use serde::Serialize;
use serde_json::Value;
use sqlx::Connection;

#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Scan one table with its fixed statement and map every row.
async fn scan(state: &AppState, statement: &str) -> Result<Json<Vec<Value>>, ApiError> {
    let mut conn = gateway::connect(&state.db).await?;
    tracing::debug!(sql = statement, "query");
    let rows = sqlx::query(statement).fetch_all(&mut conn).await?;
    conn.close().await?;
    Ok(Json(rows_to_json(&rows)))
}

pub async fn list_trails(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    scan(&state, sql::SELECT_TRAILS).await
}

pub async fn list_routes(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    scan(&state, sql::SELECT_ROUTES).await
}

pub async fn list_trail_features(
    State(state): State<AppState>,
) -> Result<Json<Vec<Value>>, ApiError> {
    scan(&state, sql::SELECT_TRAIL_FEATURES).await
}

pub async fn list_trail_feature_associations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Value>>, ApiError> {
    scan(&state, sql::SELECT_TRAIL_FEATURE_ASSOCIATIONS).await
}

/// Insert one trail from the request body. The body is taken as raw bytes
/// and parsed here so that malformed JSON surfaces as the uniform 500
/// rather than an extractor rejection. Field extraction happens after the
/// connection check, so an unreachable database wins over a bad payload,
/// same as the read paths.
pub async fn create_trail(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageBody>), ApiError> {
    let body: Value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadPayload(format!("invalid JSON body: {}", e)))?;

    let mut conn = gateway::connect(&state.db).await?;
    let params = sql::trail_params(&body)?;

    tracing::debug!(sql = sql::INSERT_TRAIL, "query");
    let mut query = sqlx::query(sql::INSERT_TRAIL);
    for p in params {
        query = query.bind(p);
    }
    query.execute(&mut conn).await?;
    conn.close().await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageBody {
            message: "Trail added successfully.",
        }),
    ))
}
