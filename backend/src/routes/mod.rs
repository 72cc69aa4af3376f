//! Route definitions for the Crop Recommendation service

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Form and health routes
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/predict",
            get(handlers::predict_form).post(handlers::predict),
        )
        .route("/health", get(handlers::health_check))
}
