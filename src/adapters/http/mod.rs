//! HTTP adapters - REST API implementations.

pub mod assessment;

use axum::{http::header, http::HeaderValue, http::Method, routing::get, Json, Router};
use serde_json::json;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub use assessment::{assessment_routes, AssessmentHandlers};

/// Builds the complete application router.
///
/// `cors_origins` lists allowed browser origins; empty means same-origin only.
pub fn app_router(handlers: AssessmentHandlers, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest("/api/assessment", assessment_routes(handlers))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE])
}

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "ok": true, "service": "pinnacle-assessment" }))
}
