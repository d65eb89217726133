//! ONNX artifact executed with tract

use std::path::Path;

use tract_onnx::prelude::*;

use crate::domain::prediction::{FeatureVector, Regressor, RegressorKind, FEATURE_COUNT};
use crate::domain::DomainError;

type OnnxPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// Graph with one `f32[1, 4]` input and a single scalar output per row
pub struct OnnxRegressor {
    plan: OnnxPlan,
}

impl OnnxRegressor {
    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|model| {
                model.with_input_fact(
                    0,
                    InferenceFact::dt_shape(f32::datum_type(), tvec!(1, FEATURE_COUNT)),
                )
            })
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| DomainError::model_load(path.display().to_string(), e.to_string()))?;

        Ok(Self { plan })
    }
}

impl Regressor for OnnxRegressor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, DomainError> {
        let row = features.to_f32();
        let input = Tensor::from_shape(&[1, FEATURE_COUNT], &row)
            .map_err(|e| DomainError::inference(e.to_string()))?;

        let outputs = self
            .plan
            .run(tvec!(input.into()))
            .map_err(|e| DomainError::inference(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| DomainError::inference("model produced no outputs"))?;

        let view = output
            .to_array_view::<f32>()
            .map_err(|e| DomainError::inference(e.to_string()))?;

        view.iter()
            .next()
            .map(|value| f64::from(*value))
            .ok_or_else(|| DomainError::inference("model produced an empty output tensor"))
    }

    fn kind(&self) -> RegressorKind {
        RegressorKind::Onnx
    }
}
