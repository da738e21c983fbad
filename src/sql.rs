//! Fixed statements for the four trails tables, and the bind values the
//! insert parameterizes from a request body.

use crate::error::ApiError;
use serde_json::Value;
use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::Database;

pub const SELECT_TRAILS: &str = "SELECT * FROM Trails";
pub const SELECT_ROUTES: &str = "SELECT * FROM Routes";
pub const SELECT_TRAIL_FEATURES: &str = "SELECT * FROM TrailFeatures";
pub const SELECT_TRAIL_FEATURE_ASSOCIATIONS: &str = "SELECT * FROM TrailFeatureAssociations";

pub const INSERT_TRAIL: &str = "INSERT INTO Trails \
    (TrailName, TrailSummary, TrailDescription, Difficulty, Location, Length, ElevationGain) \
    VALUES ($1, $2, $3, $4, $5, $6, $7)";

/// The trail columns a POST body must supply, in bind order.
pub const TRAIL_FIELDS: [&str; 7] = [
    "TrailName",
    "TrailSummary",
    "TrailDescription",
    "Difficulty",
    "Location",
    "Length",
    "ElevationGain",
];

/// Pull the seven insert parameters out of a request body, in statement
/// order. Every field is required and bound as-is; no coercion.
pub fn trail_params(body: &Value) -> Result<Vec<PgBindValue>, ApiError> {
    let obj = body
        .as_object()
        .ok_or_else(|| ApiError::BadPayload("body must be a JSON object".into()))?;
    TRAIL_FIELDS
        .iter()
        .map(|field| {
            let v = obj
                .get(*field)
                .ok_or_else(|| ApiError::BadPayload(format!("missing field '{}'", field)))?;
            PgBindValue::from_json(v)
        })
        .collect()
}

/// A JSON scalar bound to one PostgreSQL parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum PgBindValue {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    String(String),
}

impl PgBindValue {
    pub fn from_json(v: &Value) -> Result<Self, ApiError> {
        Ok(match v {
            Value::Null => PgBindValue::Null,
            Value::Bool(b) => PgBindValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    PgBindValue::I64(i)
                } else if let Some(f) = n.as_f64() {
                    PgBindValue::F64(f)
                } else {
                    return Err(ApiError::BadPayload(format!("unrepresentable number {}", n)));
                }
            }
            Value::String(s) => PgBindValue::String(s.clone()),
            Value::Array(_) | Value::Object(_) => {
                return Err(ApiError::BadPayload("field must be a scalar".into()))
            }
        })
    }
}

impl<'q> Encode<'q, Postgres> for PgBindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        Ok(match self {
            PgBindValue::Null => <Option<String> as Encode<Postgres>>::encode_by_ref(&None, buf)?,
            PgBindValue::Bool(b) => <bool as Encode<Postgres>>::encode_by_ref(b, buf)?,
            PgBindValue::I64(n) => <i64 as Encode<Postgres>>::encode_by_ref(n, buf)?,
            PgBindValue::F64(n) => <f64 as Encode<Postgres>>::encode_by_ref(n, buf)?,
            PgBindValue::String(s) => {
                let s_ref: &str = s.as_str();
                <&str as Encode<Postgres>>::encode_by_ref(&s_ref, buf)?
            }
        })
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        Some(match self {
            PgBindValue::Null | PgBindValue::String(_) => PgTypeInfo::with_name("TEXT"),
            PgBindValue::Bool(_) => PgTypeInfo::with_name("BOOL"),
            PgBindValue::I64(_) => PgTypeInfo::with_name("INT8"),
            PgBindValue::F64(_) => PgTypeInfo::with_name("FLOAT8"),
        })
    }
}

impl sqlx::Type<Postgres> for PgBindValue {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("TEXT")
    }
}
