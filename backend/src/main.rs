//! Crop Recommendation Service - Server binary

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crop_recommendation_backend::{
    create_app, ensure_static_dirs, inference::CropPipeline, view::Views, AppState, Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "crop_server=debug,crop_recommendation_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Crop Recommendation Server");
    tracing::info!("Environment: {}", config.environment);

    // Models must be ready before the listener is bound
    let pipeline = CropPipeline::load(&config.artifacts).with_context(|| {
        format!(
            "Please ensure '{}' and '{}' exist and hold valid model artifacts",
            config.artifacts.model_path.display(),
            config.artifacts.scaler_path.display()
        )
    })?;
    tracing::info!("Model and MinMaxScaler loaded successfully");

    ensure_static_dirs(&config.assets.static_dir).with_context(|| {
        format!(
            "Could not create static folder {}",
            config.assets.static_dir.display()
        )
    })?;

    let views = Views::new().context("Could not compile page template")?;

    // Create application state
    let state = AppState {
        pipeline,
        views,
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
