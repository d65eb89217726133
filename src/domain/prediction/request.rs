//! Prediction request and the feature vector handed to the model

use serde::Serialize;

use super::validation::{PredictionValidationError, DAY, DAY_OF_WEEK, HOUR, MONTH};

/// Number of model input features
pub const FEATURE_COUNT: usize = 4;

/// Feature names, in the order the model was trained on
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = ["hour", "day", "month", "dayofweek"];

/// One prediction request. Each field is within its own bounds; combinations
/// such as the 31st of February are not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PredictionRequest {
    hour: u8,
    day: u8,
    month: u8,
    day_of_week: u8,
}

impl PredictionRequest {
    /// Build a request, checking every field against its bounds
    pub fn new(
        hour: i64,
        day: i64,
        month: i64,
        day_of_week: i64,
    ) -> Result<Self, PredictionValidationError> {
        Ok(Self {
            hour: HOUR.check(hour)?,
            day: DAY.check(day)?,
            month: MONTH.check(month)?,
            day_of_week: DAY_OF_WEEK.check(day_of_week)?,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day_of_week(&self) -> u8 {
        self.day_of_week
    }

    /// Single-row feature vector: `[hour, day, month, day_of_week]`
    pub fn to_features(&self) -> FeatureVector {
        FeatureVector([
            f64::from(self.hour),
            f64::from(self.day),
            f64::from(self.month),
            f64::from(self.day_of_week),
        ])
    }
}

impl Default for PredictionRequest {
    fn default() -> Self {
        Self {
            hour: HOUR.default,
            day: DAY.default,
            month: MONTH.default,
            day_of_week: DAY_OF_WEEK.default,
        }
    }
}

/// Model input row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector(pub [f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn to_f32(&self) -> [f32; FEATURE_COUNT] {
        self.0.map(|v| v as f32)
    }
}
