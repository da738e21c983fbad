//! Route table: five fixed method+path pairs.

use crate::handlers::{
    create_trail, list_routes, list_trail_feature_associations, list_trail_features, list_trails,
};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/trails", get(list_trails).post(create_trail))
        .route("/routes", get(list_routes))
        .route("/trail-features", get(list_trail_features))
        .route(
            "/trail-feature-associations",
            get(list_trail_feature_associations),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
