//! Web API for the configuration editor.
//!
//! Serves the nested configuration document that the editor renders and
//! accepts the collected document back, persisting it to a YAML file.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/config` - Get the configuration document as JSON
//! - `POST /api/config` - Replace the configuration document

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

// ============================================================================
// Config Store
// ============================================================================

/// File-backed store for the configuration document.
///
/// The document lives on disk as YAML and crosses the wire as JSON; the
/// store converts between the two on every load and save.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Creates a store backed by the YAML file at `path`.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub fn load(&self) -> Result<Value> {
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        serde_yml::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    /// Replaces the document on disk.
    ///
    /// Writes to a sibling temp file first and renames it into place, so a
    /// failed save never truncates the existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or either filesystem step fails.
    pub fn save(&self, doc: &Value) -> Result<()> {
        let raw = serde_yml::to_string(doc).context("Failed to serialize configuration")?;
        let tmp = self.path.with_extension("yaml.tmp");
        std::fs::write(&tmp, raw)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Configuration store (one per server)
    store: Arc<ConfigStore>,
}

impl AppState {
    /// Creates a new application state for the config file at `config_path`.
    #[must_use]
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            store: Arc::new(ConfigStore::new(config_path)),
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Envelope returned for save requests.
///
/// The editor checks `status == "success"`; anything else surfaces
/// `message` as an error notification.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    /// "success" or "error"
    pub status: String,
    /// Detail for non-success outcomes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SaveResponse {
    fn success() -> Self {
        Self {
            status: "success".to_string(),
            message: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/config - Get the configuration document.
async fn get_config(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<ApiError>)> {
    let doc = state.store.load().map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::new(format!("{e:#}"))),
        )
    })?;
    Ok(Json(doc))
}

/// POST /api/config - Replace the configuration document.
///
/// Always answers 200 with a `{status, message?}` envelope; the editor
/// inspects the envelope rather than the status code.
async fn save_config(State(state): State<AppState>, Json(doc): Json<Value>) -> Json<SaveResponse> {
    match state.store.save(&doc) {
        Ok(()) => Json(SaveResponse::success()),
        Err(e) => Json(SaveResponse::error(format!("{e:#}"))),
    }
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
///
/// CORS is wide open: the server runs locally on the user's machine
/// alongside the editor.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/config", get(get_config).post(save_config))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the server fails to bind or serve.
pub async fn run_server(config_path: PathBuf, addr: SocketAddr) -> Result<()> {
    let state = AppState::new(config_path);
    let app = create_router(state);

    info!("Starting config API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_store_round_trips_yaml() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("config.yaml");
        let store = ConfigStore::new(path);

        let doc = json!({"SETTINGS": {"THREADS": 5, "SHUFFLE_WALLETS": true}});
        store.save(&doc).expect("save");
        assert_eq!(store.load().expect("load"), doc);
    }

    #[test]
    fn test_store_load_missing_file_fails() {
        let dir = TempDir::new().expect("temp dir");
        let store = ConfigStore::new(dir.path().join("missing.yaml"));
        assert!(store.load().is_err());
    }

    #[test]
    fn test_save_response_envelope_shape() {
        let ok = serde_json::to_value(SaveResponse::success()).expect("serialize");
        assert_eq!(ok, json!({"status": "success"}));

        let err = serde_json::to_value(SaveResponse::error("disk full")).expect("serialize");
        assert_eq!(err, json!({"status": "error", "message": "disk full"}));
    }
}
