//! Response DTOs for the recipe API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::models::Recipe;

/// Response body for recipe creation (POST /recipes)
#[derive(Debug, Clone, Serialize)]
pub struct AddResponse {
    /// Success message
    pub message: String,
    /// The id assigned to the new recipe
    pub id: u64,
}

impl AddResponse {
    /// Creates a new AddResponse
    pub fn new(id: u64) -> Self {
        Self {
            message: format!("Recipe {} created successfully", id),
            id,
        }
    }
}

/// Response body for batch creation (POST /recipes/batch)
#[derive(Debug, Clone, Serialize)]
pub struct AddManyResponse {
    /// Number of recipes inserted
    pub count: usize,
}

/// Response body for update, favorite and delete operations
#[derive(Debug, Clone, Serialize)]
pub struct MutationResponse {
    /// Success message
    pub message: String,
    /// The affected recipe id
    pub id: u64,
}

impl MutationResponse {
    /// Creates a response for an applied update
    pub fn updated(id: u64) -> Self {
        Self {
            message: format!("Recipe {} updated successfully", id),
            id,
        }
    }

    /// Creates a response for a removed recipe
    pub fn deleted(id: u64) -> Self {
        Self {
            message: format!("Recipe {} deleted successfully", id),
            id,
        }
    }
}

/// Response body for list and search endpoints
#[derive(Debug, Clone, Serialize)]
pub struct RecipeListResponse {
    /// Number of recipes returned
    pub count: usize,
    /// The recipes
    pub recipes: Vec<Recipe>,
}

impl From<Vec<Recipe>> for RecipeListResponse {
    fn from(recipes: Vec<Recipe>) -> Self {
        Self {
            count: recipes.len(),
            recipes,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Current number of entries in cache, expired ones included
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Configured cache TTL in seconds
    pub ttl_secs: u64,
}

/// Response body for the simulation endpoints (GET/PUT /simulation)
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResponse {
    pub inject_errors: bool,
    pub latency_ms: u64,
    pub network_available: bool,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_response_serialize() {
        let resp = AddResponse::new(7);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"id\":7"));
        assert!(json.contains("successfully"));
    }

    #[test]
    fn test_list_response_counts_recipes() {
        let resp = RecipeListResponse::from(vec![
            Recipe::new("A", "", "", "").with_id(1),
            Recipe::new("B", "", "", "").with_id(2),
        ]);
        assert_eq!(resp.count, 2);
    }

    #[test]
    fn test_mutation_response_messages() {
        assert!(MutationResponse::updated(3).message.contains("updated"));
        assert!(MutationResponse::deleted(3).message.contains("deleted"));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
