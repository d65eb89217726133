//! Regressor implementations - model artifacts the service can load

mod factory;
mod linear;
#[cfg(feature = "onnx")]
mod onnx;
mod tree_ensemble;

pub use factory::{ModelArtifact, RegressorFactory};
pub use linear::LinearRegressor;
#[cfg(feature = "onnx")]
pub use onnx::OnnxRegressor;
pub use tree_ensemble::{Aggregation, Tree, TreeEnsembleRegressor, TreeNode};
