//! Field bounds and request validation

use std::fmt;

use serde::Serialize;

/// Inclusive bounds for one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldBounds {
    /// Form/JSON field name
    pub name: &'static str,
    /// Human-readable label shown next to the input
    pub label: &'static str,
    pub min: u8,
    pub max: u8,
    /// Initial widget value; a number widget without an explicit value starts at its minimum
    pub default: u8,
}

impl FieldBounds {
    const fn new(name: &'static str, label: &'static str, min: u8, max: u8) -> Self {
        Self {
            name,
            label,
            min,
            max,
            default: min,
        }
    }

    /// Check a raw value against the bounds
    pub fn check(&self, value: i64) -> Result<u8, PredictionValidationError> {
        if value < i64::from(self.min) || value > i64::from(self.max) {
            return Err(PredictionValidationError::OutOfRange {
                field: self.name,
                value,
                min: self.min,
                max: self.max,
            });
        }

        Ok(value as u8)
    }
}

pub const HOUR: FieldBounds = FieldBounds::new("hour", "Hour (0–23)", 0, 23);
pub const DAY: FieldBounds = FieldBounds::new("day", "Day (1–31)", 1, 31);
pub const MONTH: FieldBounds = FieldBounds::new("month", "Month (1–12)", 1, 12);
pub const DAY_OF_WEEK: FieldBounds =
    FieldBounds::new("day_of_week", "Day of Week (0=Mon, 6=Sun)", 0, 6);

/// All fields, in feature-vector order
pub const FIELDS: [FieldBounds; 4] = [HOUR, DAY, MONTH, DAY_OF_WEEK];

/// Prediction request validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionValidationError {
    /// Field value outside its inclusive bounds
    OutOfRange {
        field: &'static str,
        value: i64,
        min: u8,
        max: u8,
    },
}

impl fmt::Display for PredictionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(
                f,
                "Invalid {} {}: must be between {} and {}",
                field, value, min, max
            ),
        }
    }
}

impl std::error::Error for PredictionValidationError {}

impl PredictionValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            Self::OutOfRange { field, .. } => field,
        }
    }
}

impl From<PredictionValidationError> for crate::domain::DomainError {
    fn from(err: PredictionValidationError) -> Self {
        crate::domain::DomainError::validation(err.to_string())
    }
}
