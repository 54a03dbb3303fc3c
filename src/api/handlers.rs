//! API Handlers
//!
//! HTTP request handlers exposing the recipe repository.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::backing::{DeleteOutcome, UpdateOutcome};
use crate::error::{RepositoryError, Result};
use crate::models::{
    sample_recipes, AddManyResponse, AddResponse, FavoriteRequest, HealthResponse,
    MutationResponse, Recipe, RecipeListResponse, RecipeRequest, SearchQuery,
    SimulationRequest, SimulationResponse, StatsResponse,
};
use crate::repository::{RecipeRepository, SimulationSettings, DEFAULT_SEARCH_LIMIT};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared repository; it synchronizes internally
    pub repository: Arc<RecipeRepository>,
}

impl AppState {
    /// Creates a new AppState around the given repository.
    pub fn new(repository: RecipeRepository) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Creates a new AppState from configuration, seeding sample recipes
    /// when enabled.
    pub async fn from_config(config: &crate::config::Config) -> Result<Self> {
        let repository = RecipeRepository::from_config(config);
        if config.seed_sample_data {
            repository.add_many(sample_recipes()).await?;
        }
        Ok(Self::new(repository))
    }
}

fn validated(req: RecipeRequest) -> Result<Recipe> {
    if let Some(error_msg) = req.validate() {
        return Err(RepositoryError::InvalidRequest(error_msg));
    }
    Ok(req.into_recipe())
}

fn not_found(id: u64) -> RepositoryError {
    RepositoryError::NotFound(id.to_string())
}

/// Handler for POST /recipes
pub async fn add_handler(
    State(state): State<AppState>,
    Json(req): Json<RecipeRequest>,
) -> Result<Json<AddResponse>> {
    let recipe = validated(req)?;
    let id = state.repository.add(recipe).await?;

    Ok(Json(AddResponse::new(id)))
}

/// Handler for POST /recipes/batch
pub async fn add_many_handler(
    State(state): State<AppState>,
    Json(reqs): Json<Vec<RecipeRequest>>,
) -> Result<Json<AddManyResponse>> {
    let recipes = reqs
        .into_iter()
        .map(validated)
        .collect::<Result<Vec<_>>>()?;
    let count = state.repository.add_many(recipes).await?;

    Ok(Json(AddManyResponse { count }))
}

/// Handler for GET /recipes
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<RecipeListResponse>> {
    let recipes = state.repository.get_all().await?;
    Ok(Json(recipes.into()))
}

/// Handler for GET /recipes/:id
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Recipe>> {
    state
        .repository
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// Handler for PUT /recipes/:id
///
/// The path id wins over any id in the body.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<RecipeRequest>,
) -> Result<Json<MutationResponse>> {
    let recipe = validated(req)?.with_id(id);

    match state.repository.update(recipe).await? {
        UpdateOutcome::Applied => Ok(Json(MutationResponse::updated(id))),
        UpdateOutcome::NotFound => Err(not_found(id)),
    }
}

/// Handler for DELETE /recipes/:id
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<MutationResponse>> {
    match state.repository.delete(id).await? {
        DeleteOutcome::Removed => Ok(Json(MutationResponse::deleted(id))),
        DeleteOutcome::NotFound => Err(not_found(id)),
    }
}

/// Handler for PUT /recipes/:id/favorite
pub async fn favorite_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<FavoriteRequest>,
) -> Result<Json<MutationResponse>> {
    match state.repository.set_favorite(id, req.favorite).await? {
        UpdateOutcome::Applied => Ok(Json(MutationResponse::updated(id))),
        UpdateOutcome::NotFound => Err(not_found(id)),
    }
}

/// Handler for GET /favorites
pub async fn favorites_handler(
    State(state): State<AppState>,
) -> Result<Json<RecipeListResponse>> {
    let recipes = state.repository.get_favorites().await?;
    Ok(Json(recipes.into()))
}

/// Handler for GET /search?q=&limit=
pub async fn search_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<RecipeListResponse>> {
    let limit = query.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let recipes = state.repository.search(&query.q, limit).await?;
    Ok(Json(recipes.into()))
}

/// Handler for GET /search/online?q=
pub async fn search_online_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<RecipeListResponse>> {
    let recipes = state.repository.search_online(&query.q).await?;
    Ok(Json(recipes.into()))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.repository.stats().await;

    Json(StatsResponse {
        hits: stats.hits,
        misses: stats.misses,
        total_entries: stats.total_entries,
        hit_rate: stats.hit_rate(),
        ttl_secs: state.repository.cache_ttl().as_secs(),
    })
}

/// Handler for DELETE /cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    state.repository.clear_cache().await;
    stats_handler(State(state)).await
}

fn simulation_response(settings: SimulationSettings) -> Json<SimulationResponse> {
    Json(SimulationResponse {
        inject_errors: settings.inject_errors,
        latency_ms: settings.latency_ms,
        network_available: settings.network_available,
    })
}

/// Handler for GET /simulation
pub async fn get_simulation_handler(State(state): State<AppState>) -> Json<SimulationResponse> {
    simulation_response(state.repository.simulation())
}

/// Handler for PUT /simulation
pub async fn set_simulation_handler(
    State(state): State<AppState>,
    Json(req): Json<SimulationRequest>,
) -> Json<SimulationResponse> {
    let repository = &state.repository;
    if let Some(enabled) = req.inject_errors {
        repository.inject_errors(enabled);
    }
    if let Some(ms) = req.latency_ms {
        repository.set_latency(Duration::from_millis(ms));
    }
    if let Some(available) = req.network_available {
        repository.set_network_available(available);
    }

    simulation_response(repository.simulation())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backing::InMemoryStore;

    fn test_state() -> AppState {
        AppState::new(RecipeRepository::new(InMemoryStore::new()))
    }

    fn request(name: &str) -> RecipeRequest {
        RecipeRequest {
            id: None,
            name: name.to_string(),
            category: "Main".to_string(),
            ingredients: "salt".to_string(),
            instructions: "stir".to_string(),
            is_favorite: false,
        }
    }

    #[tokio::test]
    async fn test_add_and_get_handler() {
        let state = test_state();

        let added = add_handler(State(state.clone()), Json(request("Soup")))
            .await
            .unwrap();

        let fetched = get_handler(State(state), Path(added.id)).await.unwrap();
        assert_eq!(fetched.name, "Soup");
    }

    #[tokio::test]
    async fn test_get_nonexistent_recipe() {
        let state = test_state();

        let result = get_handler(State(state), Path(404)).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_add_invalid_request() {
        let state = test_state();

        let result = add_handler(State(state), Json(request(""))).await;
        assert!(matches!(result, Err(RepositoryError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_add_many_rejects_whole_batch_on_invalid_entry() {
        let state = test_state();

        let result = add_many_handler(
            State(state.clone()),
            Json(vec![request("Good"), request(" ")]),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(state.repository.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_uses_path_id() {
        let state = test_state();
        let id = state.repository.add(request("Old").into_recipe()).await.unwrap();

        let mut body = request("New");
        body.id = Some(999);
        update_handler(State(state.clone()), Path(id), Json(body))
            .await
            .unwrap();

        let fetched = state.repository.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "New");
        assert!(state.repository.get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let state = test_state();

        let result = delete_handler(State(state), Path(1)).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_simulation_handler_updates_toggles() {
        let state = test_state();

        let response = set_simulation_handler(
            State(state.clone()),
            Json(SimulationRequest {
                inject_errors: Some(true),
                latency_ms: None,
                network_available: Some(false),
            }),
        )
        .await;

        assert!(response.inject_errors);
        assert!(!response.network_available);
        assert_eq!(response.latency_ms, 0);

        let result = list_handler(State(state)).await;
        assert!(matches!(result, Err(RepositoryError::SimulatedFault(_))));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
        assert_eq!(response.ttl_secs, 600);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
