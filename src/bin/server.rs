//! mood-to-music HTTP server binary.
//!
//! Starts an axum HTTP server that classifies text moods and suggests genres.
//!
//! # Environment Variables
//!
//! - `PORT` - HTTP port (default: 8080)
//! - `MOOD_BIND_HOST` - Bind address (default: 0.0.0.0)
//! - `GOOGLE_API_KEY` / `GEMINI_API_KEY` - Enables the Gemini fallback
//! - `MOOD_FALLBACK_ENABLED` - Set to `false` to force keyword-only mode
//! - `MOOD_FALLBACK_MODEL` - Gemini model (default: gemini-2.0-flash)
//! - `MOOD_FALLBACK_TIMEOUT_SECS` - Fallback call timeout (default: 10)
//! - `MOOD_GENRES_PATH` - Mood-to-genre JSON mapping (default: bundled)
//! - `MOOD_LEXICON_PATH` - Lexicon JSON (default: standard lexicon)
//! - `GOOGLE_GENAI_USE_VERTEXAI` - Call Gemini through Vertex AI (default: false)
//! - `GOOGLE_CLOUD_PROJECT` / `GOOGLE_CLOUD_LOCATION` - Vertex AI project and location
//! - `RUST_LOG` - Tracing filter (default: "info,mood_to_music=debug")
//!
//! # Usage
//!
//! ```bash
//! GOOGLE_API_KEY=... cargo run --bin server
//! ```

use std::sync::Arc;

use anyhow::Context;
use mood_to_music::server::{app_router, AppState};
use mood_to_music::{
    AppConfig, FallbackClassifier, GeminiGenerator, HybridMoodClassifier, JsonGenreCatalog,
    KeywordScorer, Lexicon,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,mood_to_music=debug".into()),
        )
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    // Lives for the whole process; the scorer borrows it.
    let lexicon: &'static Lexicon = match &config.lexicon_path {
        Some(path) => {
            let lexicon = Lexicon::load(path)
                .with_context(|| format!("failed to load lexicon {}", path.display()))?;
            tracing::info!("Using lexicon from {}", path.display());
            Box::leak(Box::new(lexicon))
        }
        None => Lexicon::standard(),
    };

    let fallback = if config.fallback_active() {
        let mut gemini = GeminiGenerator::new(
            config.fallback_model.clone(),
            config.api_key.clone(),
            config.fallback_timeout,
        )
        .context("failed to build Gemini client")?;
        if let (true, Some(project)) = (config.use_vertexai, &config.vertex_project) {
            gemini = gemini.with_vertex_ai(project.clone(), Some(config.vertex_location.clone()));
        }
        tracing::info!(
            "Fallback classifier: gemini/{} (vertexai={}, timeout {:?})",
            config.fallback_model,
            gemini.uses_vertex_ai(),
            config.fallback_timeout
        );
        Some(FallbackClassifier::new(Arc::new(gemini)).with_timeout(config.fallback_timeout))
    } else if config.fallback_enabled {
        tracing::warn!("GOOGLE_API_KEY not set; running in keyword-only mode");
        None
    } else {
        tracing::info!("Fallback classifier disabled; running in keyword-only mode");
        None
    };

    let catalog = match &config.genres_path {
        Some(path) => JsonGenreCatalog::load(path),
        None => JsonGenreCatalog::builtin(),
    };

    let classifier = HybridMoodClassifier::new(KeywordScorer::new(lexicon), fallback);
    let state = AppState::new(Arc::new(classifier), Arc::new(catalog));
    let app = app_router(state);

    let bind_addr = config.bind_addr();
    tracing::info!("mood-to-music server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health        - liveness probe");
    tracing::info!("  GET  /moods         - mood labels");
    tracing::info!("  POST /mood          - classify text");
    tracing::info!("  GET  /genres/:mood  - genre suggestions");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
