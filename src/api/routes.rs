//! API Routes
//!
//! Configures the Axum router with all recipe endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_handler, add_many_handler, clear_cache_handler, delete_handler, favorite_handler,
    favorites_handler, get_handler, get_simulation_handler, health_handler, list_handler,
    search_handler, search_online_handler, set_simulation_handler, stats_handler,
    update_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/recipes", post(add_handler).get(list_handler))
        .route("/recipes/batch", post(add_many_handler))
        .route(
            "/recipes/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .route("/recipes/:id/favorite", put(favorite_handler))
        .route("/favorites", get(favorites_handler))
        .route("/search", get(search_handler))
        .route("/search/online", get(search_online_handler))
        .route("/stats", get(stats_handler))
        .route("/cache", delete(clear_cache_handler))
        .route(
            "/simulation",
            get(get_simulation_handler).put(set_simulation_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
