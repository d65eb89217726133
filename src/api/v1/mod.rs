//! Versioned JSON API

mod model;
mod predict;

pub use model::get_model_info;
pub use predict::{predict, predict_batch};

use axum::{
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/predict", post(predict))
        .route("/predict/batch", post(predict_batch))
        .route("/model", get(get_model_info))
}
