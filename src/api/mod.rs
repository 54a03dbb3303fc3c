//! API Module
//!
//! HTTP handlers and routing for the recipe repository.
//!
//! # Endpoints
//! - `POST /recipes`, `GET /recipes` - Create / list recipes
//! - `POST /recipes/batch` - Create several recipes at once
//! - `GET|PUT|DELETE /recipes/:id` - Read, replace, remove one recipe
//! - `PUT /recipes/:id/favorite` - Set the favorite flag
//! - `GET /favorites` - List favorite recipes
//! - `GET /search`, `GET /search/online` - Local and online search
//! - `GET /stats`, `DELETE /cache` - Cache statistics and reset
//! - `GET|PUT /simulation` - Fault, latency and network toggles
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
