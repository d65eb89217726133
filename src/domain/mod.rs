//! Domain layer - core types and the model seam

pub mod error;
pub mod prediction;

pub use error::DomainError;
pub use prediction::{
    FeatureVector, Prediction, PredictionRequest, PredictionValidationError, Regressor,
    RegressorKind,
};
