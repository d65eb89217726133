//! Application state for shared services

use std::sync::Arc;

use super::form::PageRenderer;
use crate::infrastructure::services::PredictionService;

/// Application state shared by all handlers. Everything in it is immutable
/// after startup.
#[derive(Clone)]
pub struct AppState {
    pub prediction_service: Arc<PredictionService>,
    pub pages: Arc<PageRenderer>,
    pub max_batch_size: usize,
}

impl AppState {
    pub fn new(
        prediction_service: Arc<PredictionService>,
        pages: Arc<PageRenderer>,
        max_batch_size: usize,
    ) -> Self {
        Self {
            prediction_service,
            pages,
            max_batch_size,
        }
    }
}
