//! Backing Store Module
//!
//! The persistent-side collaborator the repository fronts. Implementations are
//! synchronous; the repository provides mutual exclusion, latency and fault
//! injection around every call.

mod memory;

pub use memory::InMemoryStore;

use crate::error::Result;
use crate::models::Recipe;

// == Outcomes ==
/// Result of replacing a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Applied,
    NotFound,
}

/// Result of removing a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed,
    NotFound,
}

// == Recipe Store Trait ==
/// CRUD contract required of a backing store.
///
/// Iteration order of `find_all` is the store's insertion order.
pub trait RecipeStore: Send {
    /// Inserts a recipe and returns its id. A recipe carrying
    /// `UNASSIGNED_ID` gets the next free id.
    fn insert(&mut self, recipe: Recipe) -> Result<u64>;

    /// Inserts every recipe or none of them. Returns the stored copies with
    /// their final ids.
    fn insert_many(&mut self, recipes: Vec<Recipe>) -> Result<Vec<Recipe>>;

    fn find_by_id(&self, id: u64) -> Option<Recipe>;

    fn find_all(&self) -> Vec<Recipe>;

    /// Replaces the recipe with the same id.
    fn update(&mut self, recipe: Recipe) -> UpdateOutcome;

    fn delete(&mut self, id: u64) -> DeleteOutcome;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
