//! Prediction result and its display form

use serde::Serialize;

/// Unit of the predicted value
pub const ENERGY_UNIT: &str = "kWh";

/// Raw model output for one request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    value: f64,
}

impl Prediction {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Raw scalar as returned by the model
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value rounded to two decimal places, the same way [`Self::formatted`]
    /// rounds it (on the exact binary value, so 2.675 becomes 2.67)
    pub fn rounded(&self) -> f64 {
        format!("{:.2}", self.value).parse().unwrap_or(self.value)
    }

    /// Value with exactly two decimals and the unit, e.g. `37.46 kWh`
    pub fn formatted(&self) -> String {
        format!("{:.2} {}", self.value, ENERGY_UNIT)
    }

    /// Full result line shown to the user
    pub fn message(&self) -> String {
        format!("Predicted Energy Consumption: {}", self.formatted())
    }
}

impl From<f64> for Prediction {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}
