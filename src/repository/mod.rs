//! Repository Module
//!
//! Arbitrates between the recipe cache and the backing store, and hosts the
//! fault/latency simulation and search helpers.

mod recipes;
pub mod search;
mod simulation;


pub use recipes::{RecipeRepository, RepositorySnapshot};
pub use search::{strip_online_prefix, DEFAULT_SEARCH_LIMIT, ONLINE_PREFIX};
pub use simulation::{Simulation, SimulationSettings};
