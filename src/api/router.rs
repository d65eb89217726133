use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::form;
use super::health;
use super::middleware::{logging_middleware, security_headers_middleware};
use super::state::AppState;
use super::v1;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // JSON API
        .nest("/api/v1", v1::create_v1_router())
        // HTML form
        .merge(form::create_form_router())
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use mockall::predicate::eq;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::api::state::test_support::state_with;
    use crate::domain::prediction::{FeatureVector, MockRegressor, RegressorKind};
    use crate::domain::DomainError;
    use crate::infrastructure::regressor::LinearRegressor;

    fn fixed_model(value: f64) -> MockRegressor {
        let mut mock = MockRegressor::new();
        mock.expect_predict().returning(move |_| Ok(value));
        mock.expect_kind().return_const(RegressorKind::Linear);
        mock
    }

    fn form_post(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn json_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_get_renders_defaults_without_result() {
        let app = create_router(state_with(MockRegressor::new()));

        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains(r#"name="hour" min="0" max="23" step="1" value="0""#));
        assert!(html.contains(r#"name="day_of_week" min="0" max="6" step="1" value="0""#));
        assert!(!html.contains("Predicted Energy Consumption"));
    }

    #[tokio::test]
    async fn test_form_submission_shows_rounded_prediction() {
        let mut mock = MockRegressor::new();
        mock.expect_predict()
            .with(eq(FeatureVector([14.0, 15.0, 6.0, 2.0])))
            .times(1)
            .returning(|_| Ok(37.456));
        let app = create_router(state_with(mock));

        let response = app
            .oneshot(form_post("hour=14&day=15&month=6&day_of_week=2"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Predicted Energy Consumption: 37.46 kWh"));
        assert!(html.contains(r#"name="hour" min="0" max="23" step="1" value="14""#));
    }

    #[tokio::test]
    async fn test_form_bounds_accepted() {
        let app = create_router(state_with(fixed_model(10.0)));

        for body in [
            "hour=0&day=1&month=1&day_of_week=0",
            "hour=23&day=31&month=12&day_of_week=6",
            "hour=12&day=31&month=2&day_of_week=3",
        ] {
            let response = app.clone().oneshot(form_post(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", body);
            assert!(body_text(response).await.contains("10.00 kWh"));
        }
    }

    #[tokio::test]
    async fn test_form_out_of_range_rejected() {
        let mut mock = MockRegressor::new();
        mock.expect_predict().never();
        let app = create_router(state_with(mock));

        let response = app
            .oneshot(form_post("hour=24&day=15&month=6&day_of_week=2"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let html = body_text(response).await;
        assert!(html.contains("Invalid hour 24: must be between 0 and 23"));
        assert!(!html.contains("Predicted Energy Consumption"));
    }

    #[tokio::test]
    async fn test_form_inference_failure() {
        let mut mock = MockRegressor::new();
        mock.expect_predict()
            .returning(|_| Err(DomainError::inference("graph error")));
        let app = create_router(state_with(mock));

        let response = app
            .oneshot(form_post("hour=1&day=2&month=3&day_of_week=4"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(response).await.contains("Prediction failed: graph error"));
    }

    #[tokio::test]
    async fn test_repeated_submissions_identical() {
        let model = LinearRegressor::new(2.5, vec![0.75, 0.1, -0.2, 1.3]).unwrap();
        let app = create_router(state_with(model));
        let body = "hour=9&day=20&month=11&day_of_week=5";

        let first = body_text(app.clone().oneshot(form_post(body)).await.unwrap()).await;
        let second = body_text(app.oneshot(form_post(body)).await.unwrap()).await;

        // 2.5 + 6.75 + 2.0 - 2.2 + 6.5
        assert!(first.contains("Predicted Energy Consumption: 15.55 kWh"));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_reload_forgets_previous_prediction() {
        let app = create_router(state_with(fixed_model(42.0)));

        let posted = app
            .clone()
            .oneshot(form_post("hour=5&day=5&month=5&day_of_week=5"))
            .await
            .unwrap();
        assert!(body_text(posted).await.contains("42.00 kWh"));

        let html = body_text(app.oneshot(get("/")).await.unwrap()).await;
        assert!(!html.contains("42.00 kWh"));
        assert!(html.contains(r#"name="month" min="1" max="12" step="1" value="1""#));
    }

    #[tokio::test]
    async fn test_api_predict() {
        let mut mock = MockRegressor::new();
        mock.expect_predict()
            .with(eq(FeatureVector([14.0, 15.0, 6.0, 2.0])))
            .times(1)
            .returning(|_| Ok(37.456));
        let app = create_router(state_with(mock));

        let response = app
            .oneshot(json_post(
                "/api/v1/predict",
                r#"{"hour": 14, "day": 15, "month": 6, "day_of_week": 2}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["prediction"], 37.456);
        assert_eq!(json["rounded"], 37.46);
        assert_eq!(json["message"], "Predicted Energy Consumption: 37.46 kWh");
    }

    #[tokio::test]
    async fn test_api_rounded_matches_message() {
        let app = create_router(state_with(fixed_model(2.675)));

        let response = app
            .oneshot(json_post(
                "/api/v1/predict",
                r#"{"hour": 1, "day": 1, "month": 1, "day_of_week": 0}"#,
            ))
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["rounded"], 2.67);
        assert_eq!(json["message"], "Predicted Energy Consumption: 2.67 kWh");
    }

    #[tokio::test]
    async fn test_api_predict_out_of_range() {
        let app = create_router(state_with(MockRegressor::new()));

        let response = app
            .oneshot(json_post(
                "/api/v1/predict",
                r#"{"hour": 14, "day": 15, "month": 6, "day_of_week": 9}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(response).await;
        assert_eq!(json["error"]["type"], "invalid_request_error");
        assert_eq!(json["error"]["param"], "day_of_week");
    }

    #[tokio::test]
    async fn test_api_predict_malformed_json() {
        let app = create_router(state_with(MockRegressor::new()));

        let response = app
            .oneshot(json_post("/api/v1/predict", r#"{"hour": 14"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "json_parse_error");
    }

    #[tokio::test]
    async fn test_api_batch_preserves_order() {
        let mut mock = MockRegressor::new();
        mock.expect_predict()
            .returning(|features: &FeatureVector| Ok(features.as_array()[0]));
        let app = create_router(state_with(mock));

        let response = app
            .oneshot(json_post(
                "/api/v1/predict/batch",
                r#"[
                    {"hour": 7, "day": 1, "month": 1, "day_of_week": 0},
                    {"hour": 3, "day": 1, "month": 1, "day_of_week": 0}
                ]"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["predictions"][0]["prediction"], 7.0);
        assert_eq!(json["predictions"][1]["prediction"], 3.0);
    }

    #[tokio::test]
    async fn test_api_batch_empty_rejected() {
        let app = create_router(state_with(MockRegressor::new()));

        let response = app
            .oneshot(json_post("/api/v1/predict/batch", "[]"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_api_batch_reports_invalid_index() {
        let app = create_router(state_with(MockRegressor::new()));

        let response = app
            .oneshot(json_post(
                "/api/v1/predict/batch",
                r#"[
                    {"hour": 7, "day": 1, "month": 1, "day_of_week": 0},
                    {"hour": 7, "day": 0, "month": 1, "day_of_week": 0}
                ]"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(response).await;
        assert_eq!(
            json["error"]["message"],
            "Request 1: Invalid day 0: must be between 1 and 31"
        );
    }

    #[tokio::test]
    async fn test_model_info() {
        let app = create_router(state_with(fixed_model(0.0)));

        let response = app.oneshot(get("/api/v1/model")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["kind"], "linear");
        assert_eq!(json["path"], "energy_model.json");
        assert_eq!(json["features"][3], "dayofweek");
        assert_eq!(json["inputs"][1]["max"], 31);
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let app = create_router(state_with(fixed_model(1.0)));

        let response = app.clone().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.clone().oneshot(get("/live")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get("/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["checks"][0]["name"], "model");
    }

    #[tokio::test]
    async fn test_ready_fails_when_model_fails() {
        let mut mock = MockRegressor::new();
        mock.expect_predict()
            .returning(|_| Err(DomainError::inference("broken")));
        let app = create_router(state_with(mock));

        let response = app.oneshot(get("/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
