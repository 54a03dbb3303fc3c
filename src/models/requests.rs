//! Request DTOs for the recipe API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::models::Recipe;

/// Maximum allowed recipe name length in characters
pub const MAX_NAME_LENGTH: usize = 256;

/// Request body for creating or replacing a recipe
///
/// # Fields
/// - `id`: Optional caller-supplied id (creation only; ignored on update)
/// - `name`: Display name, required
/// - `category`, `ingredients`, `instructions`: Free text
/// - `is_favorite`: Favorite flag
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeRequest {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub is_favorite: bool,
}

impl RecipeRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Name cannot be empty".to_string());
        }
        if self.name.chars().count() > MAX_NAME_LENGTH {
            return Some(format!(
                "Name exceeds maximum length of {} characters",
                MAX_NAME_LENGTH
            ));
        }
        None
    }

    /// Converts the request into a recipe, keeping any caller-supplied id.
    pub fn into_recipe(self) -> Recipe {
        Recipe::new(self.name, self.category, self.ingredients, self.instructions)
            .with_id(self.id.unwrap_or_default())
            .with_favorite(self.is_favorite)
    }
}

/// Request body for the favorite toggle (PUT /recipes/:id/favorite)
#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteRequest {
    pub favorite: bool,
}

/// Query string for the search endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Request body for updating the fault simulation (PUT /simulation)
///
/// Absent fields leave the current setting untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimulationRequest {
    #[serde(default)]
    pub inject_errors: Option<bool>,
    #[serde(default)]
    pub latency_ms: Option<u64>,
    #[serde(default)]
    pub network_available: Option<bool>,
}
