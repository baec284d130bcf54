use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use state::StateStore;

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{filters, health, map_view, snapshot};

#[derive(Clone)]
pub struct AppState {
    pub store: StateStore,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, store: StateStore) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        store,
        config: config.clone(),
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Map view and filter intents, versioned under /api/v1
    let map_routes = Router::new()
        .route("/api/v1/map/view", get(map_view::get_map_view))
        .route(
            "/api/v1/map/filter",
            put(filters::set_filter).delete(filters::clear_all_filters),
        )
        .route("/api/v1/map/filter/:name", delete(filters::clear_filter));

    // State ingest: how the already-fetched monitoring state enters the store
    let state_routes = Router::new()
        .route("/api/v1/state/snapshot", put(snapshot::replace_snapshot))
        .route("/api/v1/state/tape", post(snapshot::append_tape))
        .route("/api/v1/state/loading", put(snapshot::set_loading));

    // Public routes (probes and metrics)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    // Merge all routes
    Router::new()
        .merge(public_routes)
        .merge(map_routes)
        .merge(state_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware)) // Prometheus metrics
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id)) // Request ID and logging
        .layer(cors)
        .with_state(state)
}
