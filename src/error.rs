//! Error types for the recipe repository
//!
//! Provides unified error handling using thiserror.
//!
//! Absence is not an error inside the repository: lookups return `Option`
//! and mutations return an outcome enum. `NotFound` and `InvalidRequest`
//! are only produced by the HTTP layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Repository Error Enum ==
/// Unified error type for the repository and its HTTP surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Failure injected by the fault simulation
    #[error("Simulated fault during {0}")]
    SimulatedFault(String),

    /// The backing store rejected the operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// Recipe not found (HTTP layer only)
    #[error("Recipe not found: {0}")]
    NotFound(String),

    /// Invalid request data (HTTP layer only)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl RepositoryError {
    /// Returns true if this error was injected by the fault simulation.
    pub fn is_simulated(&self) -> bool {
        matches!(self, RepositoryError::SimulatedFault(_))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for RepositoryError {
    fn into_response(self) -> Response {
        let status = match &self {
            RepositoryError::SimulatedFault(_) => StatusCode::SERVICE_UNAVAILABLE,
            RepositoryError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RepositoryError::NotFound(_) => StatusCode::NOT_FOUND,
            RepositoryError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the repository.
pub type Result<T> = std::result::Result<T, RepositoryError>;
