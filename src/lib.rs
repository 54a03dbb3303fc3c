//! Recipe Cache - a cache-augmented recipe repository
//!
//! Fronts a backing store with a TTL cache, serializes store access behind a
//! single guard, and simulates faults, latency and network loss for testing.

pub mod api;
pub mod backing;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;

pub use api::AppState;
pub use backing::{DeleteOutcome, InMemoryStore, RecipeStore, UpdateOutcome};
pub use config::Config;
pub use error::{RepositoryError, Result};
pub use models::Recipe;
pub use repository::RecipeRepository;
