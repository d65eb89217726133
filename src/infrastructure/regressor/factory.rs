use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{LinearRegressor, TreeEnsembleRegressor};
use crate::domain::prediction::Regressor;
use crate::domain::DomainError;

/// Self-describing JSON model artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear(LinearRegressor),
    TreeEnsemble(TreeEnsembleRegressor),
}

impl ModelArtifact {
    fn into_regressor(self) -> Arc<dyn Regressor> {
        match self {
            Self::Linear(model) => Arc::new(model),
            Self::TreeEnsemble(model) => Arc::new(model),
        }
    }
}

/// Factory for loading regressors from disk
#[derive(Debug)]
pub struct RegressorFactory;

impl RegressorFactory {
    /// Load the model artifact at `path`, choosing the format by extension
    pub fn load(path: impl AsRef<Path>) -> Result<Arc<dyn Regressor>, DomainError> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        debug!(path = %shown, extension = ?extension, "Loading model artifact");

        let regressor = match extension.as_deref() {
            Some("json") => Self::load_json(path)?,
            Some("onnx") => Self::load_onnx(path)?,
            _ => {
                return Err(DomainError::model_load(
                    shown,
                    "unsupported model format, expected a .json or .onnx file",
                ));
            }
        };

        info!(path = %shown, kind = %regressor.kind(), "Model loaded");
        Ok(regressor)
    }

    /// Parse a JSON artifact from a string
    pub fn from_json_str(json: &str) -> Result<Arc<dyn Regressor>, DomainError> {
        let artifact: ModelArtifact = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("invalid model artifact: {}", e)))?;

        Ok(artifact.into_regressor())
    }

    fn load_json(path: &Path) -> Result<Arc<dyn Regressor>, DomainError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DomainError::model_load(path.display().to_string(), e.to_string()))?;

        Self::from_json_str(&contents).map_err(|e| match e {
            DomainError::Validation { message } => {
                DomainError::model_load(path.display().to_string(), message)
            }
            other => other,
        })
    }

    #[cfg(feature = "onnx")]
    fn load_onnx(path: &Path) -> Result<Arc<dyn Regressor>, DomainError> {
        Ok(Arc::new(super::OnnxRegressor::load(path)?))
    }

    #[cfg(not(feature = "onnx"))]
    fn load_onnx(path: &Path) -> Result<Arc<dyn Regressor>, DomainError> {
        Err(DomainError::model_load(
            path.display().to_string(),
            "ONNX models require building with the `onnx` feature",
        ))
    }
}
