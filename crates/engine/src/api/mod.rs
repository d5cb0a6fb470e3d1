//! API layer - HTTP entry points.

pub mod http;

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::app::App;

/// Full router: routes, request tracing, and CORS when origins are configured.
pub fn router(app: Arc<App>, cors_allowed_origins: Option<&str>) -> Router {
    let mut router = http::routes()
        .with_state(app)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    if let Some(cors) = cors_allowed_origins.and_then(build_cors_layer) {
        router = router.layer(cors);
    }
    router
}

/// `*` allows any origin; otherwise a comma-separated origin list.
pub fn build_cors_layer(allowed_origins: &str) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins.trim();
    if allowed_origins.is_empty() {
        return None;
    }

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        return Some(cors.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        return None;
    }
    Some(cors.allow_origin(origins))
}
