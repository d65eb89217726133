//! Model metadata endpoint

use axum::extract::State;

use crate::api::state::AppState;
use crate::api::types::Json;
use crate::infrastructure::services::ModelInfo;

/// GET /api/v1/model
pub async fn get_model_info(State(state): State<AppState>) -> Json<ModelInfo> {
    Json(state.prediction_service.model_info())
}
