//! Prediction service - runs requests through the loaded model

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::prediction::{
    FieldBounds, Prediction, PredictionRequest, Regressor, RegressorKind, FEATURE_NAMES, FIELDS,
};
use crate::domain::DomainError;

/// Description of the loaded model
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub kind: RegressorKind,
    pub path: String,
    pub features: Vec<&'static str>,
    pub inputs: Vec<FieldBounds>,
}

/// Prediction service over one immutable model handle
pub struct PredictionService {
    regressor: Arc<dyn Regressor>,
    model_path: String,
}

impl PredictionService {
    /// Create a new PredictionService around an already loaded model
    pub fn new(regressor: Arc<dyn Regressor>, model_path: impl Into<String>) -> Self {
        Self {
            regressor,
            model_path: model_path.into(),
        }
    }

    /// Run one request through the model
    pub fn predict(&self, request: &PredictionRequest) -> Result<Prediction, DomainError> {
        let features = request.to_features();
        let value = self.regressor.predict(&features)?;

        debug!(features = ?features.as_array(), value, "Prediction computed");

        Ok(Prediction::new(value))
    }

    /// Run several requests, preserving order. Fails on the first error.
    pub fn predict_batch(
        &self,
        requests: &[PredictionRequest],
    ) -> Result<Vec<Prediction>, DomainError> {
        requests.iter().map(|request| self.predict(request)).collect()
    }

    pub fn model_info(&self) -> ModelInfo {
        ModelInfo {
            kind: self.regressor.kind(),
            path: self.model_path.clone(),
            features: FEATURE_NAMES.to_vec(),
            inputs: FIELDS.to_vec(),
        }
    }
}
