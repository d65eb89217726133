//! JSON prediction endpoints

use axum::extract::State;
use tracing::{debug, info};

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, BatchPredictionResponse, Json, PredictionInput, PredictionResponse,
};
use crate::domain::prediction::PredictionRequest;

/// POST /api/v1/predict
pub async fn predict(
    State(state): State<AppState>,
    Json(input): Json<PredictionInput>,
) -> Result<Json<PredictionResponse>, ApiError> {
    debug!(input = ?input, "Prediction requested");

    let request = PredictionRequest::try_from(input)?;
    let prediction = state.prediction_service.predict(&request)?;

    info!(prediction = prediction.value(), "Prediction served");

    Ok(Json(PredictionResponse::new(request, prediction)))
}

/// POST /api/v1/predict/batch
pub async fn predict_batch(
    State(state): State<AppState>,
    Json(inputs): Json<Vec<PredictionInput>>,
) -> Result<Json<BatchPredictionResponse>, ApiError> {
    if inputs.is_empty() {
        return Err(ApiError::bad_request("Batch must contain at least one request"));
    }

    if inputs.len() > state.max_batch_size {
        return Err(ApiError::bad_request(format!(
            "Batch of {} requests exceeds the limit of {}",
            inputs.len(),
            state.max_batch_size
        )));
    }

    let requests = inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| {
            PredictionRequest::try_from(input).map_err(|e| {
                ApiError::unprocessable(format!("Request {}: {}", index, e)).with_param(e.field())
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let predictions = state.prediction_service.predict_batch(&requests)?;

    info!(count = predictions.len(), "Batch prediction served");

    let predictions = requests
        .into_iter()
        .zip(predictions)
        .map(|(request, prediction)| PredictionResponse::new(request, prediction))
        .collect();

    Ok(Json(BatchPredictionResponse { predictions }))
}
