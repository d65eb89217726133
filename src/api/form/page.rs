//! HTML rendering for the prediction form

use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::prediction::{FieldBounds, FIELDS};
use crate::domain::DomainError;

const TEMPLATE_NAME: &str = "index.html";
const TEMPLATE: &str = include_str!("../../../templates/index.html");

const PAGE_TITLE: &str = "Energy Consumption Predictor";
const PAGE_HEADING: &str = "Energy Consumption Prediction";

/// One input widget
#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub min: u8,
    pub max: u8,
    pub value: String,
}

impl FieldView {
    fn new(bounds: &FieldBounds, value: String) -> Self {
        Self {
            name: bounds.name,
            label: bounds.label,
            min: bounds.min,
            max: bounds.max,
            value,
        }
    }
}

/// Everything the page shows
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub title: &'static str,
    pub heading: &'static str,
    pub fields: Vec<FieldView>,
    pub result: Option<String>,
    pub error: Option<String>,
}

impl FormView {
    /// Form with the given widget values, in field order
    pub fn with_values(values: [String; 4]) -> Self {
        let fields = FIELDS
            .iter()
            .zip(values)
            .map(|(bounds, value)| FieldView::new(bounds, value))
            .collect();

        Self {
            title: PAGE_TITLE,
            heading: PAGE_HEADING,
            fields,
            result: None,
            error: None,
        }
    }

    pub fn with_result(mut self, result: impl Into<String>) -> Self {
        self.result = Some(result.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

impl Default for FormView {
    /// Fresh form: every widget at its default and no result
    fn default() -> Self {
        Self::with_values(FIELDS.map(|field| field.default.to_string()))
    }
}

/// Renders the form page from the embedded template
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self, DomainError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)
            .map_err(|e| DomainError::template(e.to_string()))?;

        Ok(Self { tera })
    }

    pub fn render(&self, view: &FormView) -> Result<String, DomainError> {
        let context =
            Context::from_serialize(view).map_err(|e| DomainError::template(e.to_string()))?;

        self.tera
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| DomainError::template(e.to_string()))
    }
}
