//! Energy Consumption Predictor
//!
//! Serves a small web form that collects hour, day, month and day of week,
//! runs them through a pre-trained regression model and shows the predicted
//! consumption in kWh. Also exposes:
//! - A JSON prediction API (single and batch)
//! - Model metadata and health probes
//! - A one-shot `predict` CLI command

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::form::PageRenderer;
use api::state::AppState;
use infrastructure::regressor::RegressorFactory;
use infrastructure::services::PredictionService;
use tracing::info;

/// Create the application state: load the model once and share it
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    info!(path = %config.model.path, "Loading model");

    let regressor = RegressorFactory::load(&config.model.path)?;
    let prediction_service = PredictionService::new(regressor, config.model.path.clone());
    let pages = PageRenderer::new()?;

    Ok(AppState::new(
        Arc::new(prediction_service),
        Arc::new(pages),
        config.model.max_batch_size,
    ))
}
