//! Prediction domain - request, feature vector, regressor seam and result

mod regressor;
mod request;
mod result;
mod validation;

#[cfg(test)]
pub use regressor::MockRegressor;
pub use regressor::{Regressor, RegressorKind};
pub use request::{FeatureVector, PredictionRequest, FEATURE_COUNT, FEATURE_NAMES};
pub use result::{Prediction, ENERGY_UNIT};
pub use validation::{
    FieldBounds, PredictionValidationError, DAY, DAY_OF_WEEK, FIELDS, HOUR, MONTH,
};
