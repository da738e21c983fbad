//! Success-path tests against a live PostgreSQL database. Ignored by
//! default; provide DB_SERVER, DB_NAME, DB_USERNAME and DB_PASSWORD (or a
//! .env file) and run with `cargo test -- --ignored`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::{ConnectOptions, Connection};
use tower::ServiceExt;
use trails_api::{app, AppState, DbConfig};

const TRAILS_DDL: &str = "CREATE TABLE Trails (
    TrailID SERIAL PRIMARY KEY,
    TrailName TEXT,
    TrailSummary TEXT,
    TrailDescription TEXT,
    Difficulty TEXT,
    Location TEXT,
    Length DOUBLE PRECISION,
    ElevationGain BIGINT
)";

async fn reset_tables(db: &DbConfig) {
    let mut conn = db
        .connect_options()
        .connect()
        .await
        .expect("connect for table setup");
    for ddl in [
        "DROP TABLE IF EXISTS Trails",
        "DROP TABLE IF EXISTS Routes",
        "DROP TABLE IF EXISTS TrailFeatures",
        "DROP TABLE IF EXISTS TrailFeatureAssociations",
        TRAILS_DDL,
        "CREATE TABLE Routes (RouteID SERIAL PRIMARY KEY, RouteName TEXT)",
        "CREATE TABLE TrailFeatures (TrailFeatureID SERIAL PRIMARY KEY, TrailFeature TEXT)",
        "CREATE TABLE TrailFeatureAssociations (TrailID INT, TrailFeatureID INT)",
    ] {
        sqlx::query(ddl).execute(&mut conn).await.expect(ddl);
    }
    conn.close().await.expect("close setup connection");
}

async fn get_json(state: &AppState, path: &str) -> (StatusCode, Value) {
    let resp = app(state.clone())
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_trail(state: &AppState, body: &Value) -> (StatusCode, Value) {
    let resp = app(state.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/trails")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn trail_body(name: &str) -> Value {
    json!({
        "TrailName": name,
        "TrailSummary": "A breezy ridge walk",
        "TrailDescription": "Follows the ridge from the north lot.",
        "Difficulty": "Easy",
        "Location": "Cascade Range",
        "Length": 5.2,
        "ElevationGain": 300
    })
}

#[tokio::test]
#[ignore = "needs a live PostgreSQL database"]
async fn read_write_round_trip_against_live_database() {
    dotenvy::dotenv().ok();
    let db = DbConfig::from_env().expect("DB_* environment variables");
    reset_tables(&db).await;
    let state = AppState { db };

    // Empty tables serialize as [] on every read endpoint.
    for path in [
        "/trails",
        "/routes",
        "/trail-features",
        "/trail-feature-associations",
    ] {
        let (status, body) = get_json(&state, path).await;
        assert_eq!(status, StatusCode::OK, "{}", path);
        assert_eq!(body, json!([]), "{}", path);
    }

    let (status, body) = post_trail(&state, &trail_body("Ridge Loop")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "message": "Trail added successfully." }));

    // Read back: one row, columns in table order, values unchanged.
    // Unquoted identifiers fold to lowercase in PostgreSQL and the
    // response mirrors the database's spelling.
    let (status, body) = get_json(&state, "/trails").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    let row = rows[0].as_object().unwrap();
    let keys: Vec<&str> = row.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        [
            "trailid",
            "trailname",
            "trailsummary",
            "traildescription",
            "difficulty",
            "location",
            "length",
            "elevationgain"
        ]
    );
    assert_eq!(row["trailname"], json!("Ridge Loop"));
    assert_eq!(row["trailsummary"], json!("A breezy ridge walk"));
    assert_eq!(row["difficulty"], json!("Easy"));
    assert_eq!(row["location"], json!("Cascade Range"));
    assert_eq!(row["length"], json!(5.2));
    assert_eq!(row["elevationgain"], json!(300));

    // Concurrent inserts with distinct payloads all persist; each request
    // holds its own connection.
    let mut tasks = Vec::new();
    for i in 0..5 {
        let state = state.clone();
        tasks.push(tokio::spawn(async move {
            post_trail(&state, &trail_body(&format!("Spur {}", i))).await
        }));
    }
    for task in tasks {
        let (status, _) = task.await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
    }
    let (_, body) = get_json(&state, "/trails").await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["trailname"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 6);
    for i in 0..5 {
        let name = format!("Spur {}", i);
        assert!(names.contains(&name.as_str()), "missing {}", name);
    }
}
