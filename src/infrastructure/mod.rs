//! Infrastructure layer - model loading, services and logging

pub mod logging;
pub mod regressor;
pub mod services;
