//! Recipe entity
//!
//! The single record type held by the backing store and the cache.

use serde::{Deserialize, Serialize};

/// Id value meaning "let the backing store assign one".
pub const UNASSIGNED_ID: u64 = 0;

// == Recipe ==
/// A recipe keyed by a stable integer id.
///
/// The text fields are opaque payload; they only matter to search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique key, assigned by the backing store on insert when left at `UNASSIGNED_ID`
    #[serde(default)]
    pub id: u64,
    /// Display name
    pub name: String,
    /// Category such as "Dessert" or "Main"
    #[serde(default)]
    pub category: String,
    /// Free-form ingredient list
    #[serde(default)]
    pub ingredients: String,
    /// Free-form preparation steps
    #[serde(default)]
    pub instructions: String,
    /// Favorite flag, mutable independently of the other fields
    #[serde(default)]
    pub is_favorite: bool,
}

impl Recipe {
    /// Creates a recipe without an id; the store assigns one on insert.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        ingredients: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            id: UNASSIGNED_ID,
            name: name.into(),
            category: category.into(),
            ingredients: ingredients.into(),
            instructions: instructions.into(),
            is_favorite: false,
        }
    }

    /// Sets a caller-supplied id.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Sets the favorite flag.
    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    /// Case-insensitive substring match against name, ingredients, category
    /// and instructions. `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        [
            &self.name,
            &self.ingredients,
            &self.category,
            &self.instructions,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Recipes used to seed a fresh store.
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "Spaghetti Carbonara",
            "Main",
            "spaghetti, eggs, pecorino, guanciale, black pepper",
            "Cook pasta. Fry guanciale. Toss with eggs and cheese off the heat.",
        ),
        Recipe::new(
            "Chicken Curry",
            "Main",
            "chicken thighs, onion, garlic, ginger, curry paste, coconut milk",
            "Brown the chicken, soften aromatics, simmer in coconut milk.",
        ),
        Recipe::new(
            "Greek Salad",
            "Salad",
            "tomato, cucumber, red onion, feta, olives, olive oil",
            "Chop vegetables, top with feta and olives, dress with oil.",
        ),
        Recipe::new(
            "Chocolate Chip Cookies",
            "Dessert",
            "flour, butter, brown sugar, eggs, chocolate chips",
            "Cream butter and sugar, fold in flour and chips, bake 12 minutes.",
        ),
        Recipe::new(
            "Pancakes",
            "Breakfast",
            "flour, milk, eggs, sugar, baking powder",
            "Whisk batter and cook on a hot griddle until golden.",
        ),
    ]
}
