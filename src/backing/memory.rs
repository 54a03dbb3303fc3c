//! In-memory backing store.
//!
//! Keeps recipes in insertion order. Ids are allocated monotonically; a
//! caller-supplied id is honoured unless it is already taken.

use std::collections::HashSet;

use tracing::warn;

use crate::backing::{DeleteOutcome, RecipeStore, UpdateOutcome};
use crate::error::{RepositoryError, Result};
use crate::models::{Recipe, UNASSIGNED_ID};

/// Ordered in-memory recipe collection.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    recipes: Vec<Recipe>,
    next_id: u64,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            recipes: Vec::new(),
            next_id: 1,
        }
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.recipes.iter().position(|r| r.id == id)
    }

    /// Resolves the id a recipe would be stored under, given ids already
    /// claimed in the same batch.
    fn resolve_id(&self, requested: u64, next_id: u64, claimed: &HashSet<u64>) -> Result<u64> {
        if requested == UNASSIGNED_ID {
            return Ok(next_id);
        }
        if claimed.contains(&requested) || self.position(requested).is_some() {
            warn!(id = requested, "Rejected insert with duplicate id");
            return Err(RepositoryError::Storage(format!(
                "Recipe id {} already exists",
                requested
            )));
        }
        Ok(requested)
    }
}

impl RecipeStore for InMemoryStore {
    fn insert(&mut self, recipe: Recipe) -> Result<u64> {
        let mut stored = self.insert_many(vec![recipe])?;
        Ok(stored.pop().map(|r| r.id).unwrap_or(UNASSIGNED_ID))
    }

    fn insert_many(&mut self, recipes: Vec<Recipe>) -> Result<Vec<Recipe>> {
        // Resolve every id first so a rejected recipe leaves the store untouched
        let mut next_id = self.next_id;
        let mut claimed = HashSet::with_capacity(recipes.len());
        let mut prepared = Vec::with_capacity(recipes.len());

        for mut recipe in recipes {
            let id = self.resolve_id(recipe.id, next_id, &claimed)?;
            let after = id.checked_add(1).ok_or_else(|| {
                warn!(id, "Rejected insert with id at the end of the id space");
                RepositoryError::Storage(format!("Recipe id {} is out of range", id))
            })?;
            recipe.id = id;
            claimed.insert(id);
            next_id = next_id.max(after);
            prepared.push(recipe);
        }

        self.next_id = next_id;
        self.recipes.extend(prepared.iter().cloned());
        Ok(prepared)
    }

    fn find_by_id(&self, id: u64) -> Option<Recipe> {
        self.recipes.iter().find(|r| r.id == id).cloned()
    }

    fn find_all(&self) -> Vec<Recipe> {
        self.recipes.clone()
    }

    fn update(&mut self, recipe: Recipe) -> UpdateOutcome {
        match self.position(recipe.id) {
            Some(index) => {
                self.recipes[index] = recipe;
                UpdateOutcome::Applied
            }
            None => UpdateOutcome::NotFound,
        }
    }

    fn delete(&mut self, id: u64) -> DeleteOutcome {
        match self.position(id) {
            Some(index) => {
                self.recipes.remove(index);
                DeleteOutcome::Removed
            }
            None => DeleteOutcome::NotFound,
        }
    }

    fn len(&self) -> usize {
        self.recipes.len()
    }
}
