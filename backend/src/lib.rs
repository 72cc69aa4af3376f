//! Crop Recommendation Service - Backend
//!
//! Serves a form that takes seven soil and climate measurements and answers
//! with the crop a pre-trained model recommends for them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod handlers;
pub mod inference;
pub mod routes;
pub mod services;
pub mod view;

pub use config::Config;

use inference::CropPipeline;
use view::Views;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pipeline: CropPipeline,
    pub views: Views,
    pub config: Arc<Config>,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.assets.static_dir);

    Router::new()
        .merge(routes::app_routes())
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Make sure the static directory and its images folder exist.
///
/// Returns the directories that had to be created.
pub fn ensure_static_dirs(static_dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut created = Vec::new();
    for dir in [static_dir.to_path_buf(), static_dir.join("images")] {
        if !dir.is_dir() {
            std::fs::create_dir_all(&dir)?;
            tracing::info!("Created static folder at: {}", dir.display());
            created.push(dir);
        }
    }
    Ok(created)
}
