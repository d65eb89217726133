//! HTML prediction form
//!
//! `GET /` renders a fresh form. `POST /` runs one prediction and renders the
//! form again with the submitted values and the result line.

mod page;

pub use page::{FieldView, FormView, PageRenderer};

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::prediction::{PredictionRequest, FIELDS};
use crate::domain::DomainError;

/// Raw form submission. Fields stay as text so unparsable input can be
/// echoed back with an error instead of rejected outright.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PredictionForm {
    pub hour: String,
    pub day: String,
    pub month: String,
    pub day_of_week: String,
}

impl PredictionForm {
    fn values(&self) -> [String; 4] {
        [
            self.hour.clone(),
            self.day.clone(),
            self.month.clone(),
            self.day_of_week.clone(),
        ]
    }

    /// Parse and bound-check the submission
    pub fn to_request(&self) -> Result<PredictionRequest, DomainError> {
        let values = self.values();
        let mut parsed = [0i64; 4];

        for ((slot, raw), field) in parsed.iter_mut().zip(&values).zip(&FIELDS) {
            *slot = raw.trim().parse::<i64>().map_err(|_| {
                DomainError::validation(format!(
                    "Invalid {}: '{}' is not a whole number",
                    field.name, raw
                ))
            })?;
        }

        let [hour, day, month, day_of_week] = parsed;
        Ok(PredictionRequest::new(hour, day, month, day_of_week)?)
    }
}

pub fn create_form_router() -> Router<AppState> {
    Router::new().route("/", get(show_form).post(submit_form))
}

/// GET /
pub async fn show_form(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let page = state.pages.render(&FormView::default())?;
    Ok(Html(page))
}

/// POST /
pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<PredictionForm>,
) -> Result<(StatusCode, Html<String>), ApiError> {
    let view = FormView::with_values(form.values());

    let (status, view) = match form.to_request() {
        Err(e) => {
            warn!(error = %e, "Rejected form submission");
            (StatusCode::UNPROCESSABLE_ENTITY, view.with_error(display_message(&e)))
        }
        Ok(request) => match state.prediction_service.predict(&request) {
            Ok(prediction) => {
                info!(
                    hour = request.hour(),
                    day = request.day(),
                    month = request.month(),
                    day_of_week = request.day_of_week(),
                    prediction = prediction.value(),
                    "Prediction served"
                );
                (StatusCode::OK, view.with_result(prediction.message()))
            }
            Err(e) => {
                error!(error = %e, "Prediction failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    view.with_error(display_message(&e)),
                )
            }
        },
    };

    let page = state.pages.render(&view)?;
    Ok((status, Html(page)))
}

/// User-facing text for a domain error
fn display_message(err: &DomainError) -> String {
    match err {
        DomainError::Validation { message } => message.clone(),
        DomainError::Inference { message } => format!("Prediction failed: {}", message),
        other => other.to_string(),
    }
}
