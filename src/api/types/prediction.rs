//! Prediction API request/response bodies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::prediction::{
    Prediction, PredictionRequest, PredictionValidationError, ENERGY_UNIT,
};

/// Raw prediction input. Values are checked against the field bounds when
/// converted into a [`PredictionRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionInput {
    pub hour: i64,
    pub day: i64,
    pub month: i64,
    pub day_of_week: i64,
}

impl TryFrom<PredictionInput> for PredictionRequest {
    type Error = PredictionValidationError;

    fn try_from(input: PredictionInput) -> Result<Self, Self::Error> {
        PredictionRequest::new(input.hour, input.day, input.month, input.day_of_week)
    }
}

impl From<PredictionRequest> for PredictionInput {
    fn from(request: PredictionRequest) -> Self {
        Self {
            hour: i64::from(request.hour()),
            day: i64::from(request.day()),
            month: i64::from(request.month()),
            day_of_week: i64::from(request.day_of_week()),
        }
    }
}

/// Response for `POST /api/v1/predict`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Raw model output
    pub prediction: f64,
    /// Output rounded to two decimal places
    pub rounded: f64,
    pub unit: String,
    pub message: String,
    pub features: PredictionInput,
    pub predicted_at: DateTime<Utc>,
}

impl PredictionResponse {
    pub fn new(request: PredictionRequest, prediction: Prediction) -> Self {
        Self {
            prediction: prediction.value(),
            rounded: prediction.rounded(),
            unit: ENERGY_UNIT.to_string(),
            message: prediction.message(),
            features: request.into(),
            predicted_at: Utc::now(),
        }
    }
}

/// Response for `POST /api/v1/predict/batch`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPredictionResponse {
    pub predictions: Vec<PredictionResponse>,
}
