//! Axum route handlers for the mood-to-music HTTP server.
//!
//! # Routes
//!
//! - `GET  /health`        - Returns `{"status": "ok", "version": ..., "fallback": bool}`
//! - `GET  /moods`         - The closed mood label set
//! - `POST /mood`          - Classify `{"text": ...}` and suggest genres
//! - `GET  /genres/:mood`  - Genre suggestions for a mood label

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::classifier::{DecisionPath, HybridMoodClassifier, MoodClassifier};
use crate::genres::{GenreCatalog, JsonGenreCatalog};
use crate::mood::Mood;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn MoodClassifier>,
    pub catalog: Arc<dyn GenreCatalog>,
}

impl AppState {
    pub fn new(classifier: Arc<dyn MoodClassifier>, catalog: Arc<dyn GenreCatalog>) -> Self {
        Self {
            classifier,
            catalog,
        }
    }
}

impl Default for AppState {
    /// Keyword-only classifier with the bundled genre mapping.
    fn default() -> Self {
        Self::new(
            Arc::new(HybridMoodClassifier::keyword_only()),
            Arc::new(JsonGenreCatalog::builtin()),
        )
    }
}

/// Body of `POST /mood`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodRequest {
    pub text: String,
}

/// Response of `POST /mood`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodResponse {
    pub mood: Mood,
    /// Keyword scorer confidence.
    pub confidence: f64,
    pub path: DecisionPath,
    pub genres: Vec<String>,
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/moods", get(moods_handler))
        .route("/mood", post(mood_handler))
        .route("/genres/:mood", get(genres_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - liveness probe.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "mood-to-music",
        "fallback": state.classifier.has_fallback(),
    }))
}

/// GET /moods - list the closed label set.
async fn moods_handler() -> Json<Value> {
    Json(serde_json::json!({ "moods": Mood::ALL }))
}

/// POST /mood - classify text and attach genre suggestions.
///
/// Always answers 200 for a well-formed body; classification has no error
/// path.
async fn mood_handler(
    State(state): State<AppState>,
    Json(request): Json<MoodRequest>,
) -> Json<MoodResponse> {
    let decision = state.classifier.classify(&request.text).await;
    tracing::info!(mood = %decision.mood, path = ?decision.path, "classified text");

    Json(MoodResponse {
        mood: decision.mood,
        confidence: decision.local.confidence,
        genres: state.catalog.genres_for(decision.mood),
        path: decision.path,
    })
}

/// GET /genres/:mood - genre suggestions; unknown moods get the default.
async fn genres_handler(
    State(state): State<AppState>,
    Path(mood): Path<String>,
) -> Json<Value> {
    let genres = state.catalog.genres_for_mood(&mood);
    Json(serde_json::json!({
        "mood": mood,
        "genres": genres,
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
