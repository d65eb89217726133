//! Linear regression artifact

use serde::{Deserialize, Serialize};

use crate::domain::prediction::{FeatureVector, Regressor, RegressorKind, FEATURE_COUNT};
use crate::domain::DomainError;

#[derive(Deserialize)]
struct RawLinear {
    intercept: f64,
    coefficients: Vec<f64>,
}

/// `intercept + Σ coefficients[i] * x[i]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLinear")]
pub struct LinearRegressor {
    intercept: f64,
    coefficients: Vec<f64>,
}

impl TryFrom<RawLinear> for LinearRegressor {
    type Error = DomainError;

    fn try_from(raw: RawLinear) -> Result<Self, Self::Error> {
        Self::new(raw.intercept, raw.coefficients)
    }
}

impl LinearRegressor {
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> Result<Self, DomainError> {
        let regressor = Self {
            intercept,
            coefficients,
        };
        regressor.validate()?;
        Ok(regressor)
    }

    /// Check the artifact matches the feature vector width
    fn validate(&self) -> Result<(), DomainError> {
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(DomainError::validation(format!(
                "linear model has {} coefficients, expected {}",
                self.coefficients.len(),
                FEATURE_COUNT
            )));
        }

        Ok(())
    }
}

impl Regressor for LinearRegressor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, DomainError> {
        let sum: f64 = self
            .coefficients
            .iter()
            .zip(features.as_array())
            .map(|(c, x)| c * x)
            .sum();

        Ok(self.intercept + sum)
    }

    fn kind(&self) -> RegressorKind {
        RegressorKind::Linear
    }
}
