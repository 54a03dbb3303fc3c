//! Domain and transfer models
//!
//! `recipe` holds the entity; `requests` and `responses` hold the DTOs
//! serialized over the HTTP API.

pub mod recipe;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use recipe::{sample_recipes, Recipe, UNASSIGNED_ID};
pub use requests::{FavoriteRequest, RecipeRequest, SearchQuery, SimulationRequest};
pub use responses::{
    AddManyResponse, AddResponse, HealthResponse, MutationResponse, RecipeListResponse,
    SimulationResponse, StatsResponse,
};
