//! HTTP server exposing the classifier and the genre catalog.
//!
//! # Endpoints
//!
//! - `GET  /health`       - Liveness probe
//! - `GET  /moods`        - Mood label set
//! - `POST /mood`         - Classify text
//! - `GET  /genres/:mood` - Genre lookup

pub mod routes;

pub use routes::{app_router, AppState, MoodRequest, MoodResponse};
