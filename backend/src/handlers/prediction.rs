//! HTTP handlers for the recommendation form

use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    Form,
};
use shared::{CropForm, PredictionOutcome};

use crate::error::AppResult;
use crate::services::PredictionService;
use crate::AppState;

/// Render the empty form
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(Html(state.views.render_index(None)?))
}

/// GET /predict shows the bare form; nothing is processed
pub async fn predict_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(Html(state.views.render_index(None)?))
}

/// Handle a form submission and render the result into the page.
///
/// Every outcome, including invalid input, is a 200 with the message embedded.
pub async fn predict(
    State(state): State<AppState>,
    form: Result<Form<CropForm>, FormRejection>,
) -> AppResult<Html<String>> {
    let outcome = match form {
        Ok(Form(input)) => PredictionService::new(state.pipeline).predict(&input),
        Err(rejection) => {
            tracing::debug!("Unreadable form body: {}", rejection);
            PredictionOutcome::InvalidInput
        }
    };

    let result = outcome.message();
    Ok(Html(state.views.render_index(Some(result.as_str()))?))
}
