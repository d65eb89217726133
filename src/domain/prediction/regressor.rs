//! Regressor trait - the seam between the service and a loaded model artifact

use std::fmt;

use serde::Serialize;

use super::FeatureVector;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Kind of model behind a regressor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegressorKind {
    Linear,
    TreeEnsemble,
    Onnx,
}

impl fmt::Display for RegressorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::TreeEnsemble => write!(f, "tree_ensemble"),
            Self::Onnx => write!(f, "onnx"),
        }
    }
}

/// A pre-trained regression model
#[cfg_attr(test, automock)]
pub trait Regressor: Send + Sync {
    /// Predict a single scalar from one feature row
    fn predict(&self, features: &FeatureVector) -> Result<f64, DomainError>;

    /// The kind of model
    fn kind(&self) -> RegressorKind;
}
