//! Predict command - loads the model, runs one request, prints the result line

use clap::Args;
use tracing::warn;

use crate::config::AppConfig;
use crate::domain::prediction::PredictionRequest;
use crate::infrastructure::logging;
use crate::infrastructure::regressor::RegressorFactory;
use crate::infrastructure::services::PredictionService;

/// Arguments for the predict command
#[derive(Args, Clone, Debug)]
pub struct PredictArgs {
    /// Hour of day (0-23)
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..=23))]
    pub hour: i64,

    /// Day of month (1-31)
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..=31))]
    pub day: i64,

    /// Month (1-12)
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..=12))]
    pub month: i64,

    /// Day of week (0=Mon, 6=Sun)
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..=6))]
    pub day_of_week: i64,

    /// Model artifact to load (overrides config)
    #[arg(long)]
    pub model: Option<String>,
}

/// Run one prediction
pub async fn run(args: PredictArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let (config, load_error) = AppConfig::load_or_default();
    logging::init_logging(&logging::LoggingConfig::from(&config));

    if let Some(err) = load_error {
        warn!(error = %err, "Invalid configuration, using defaults");
    }

    let model_path = args.model.clone().unwrap_or(config.model.path);
    println!("{}", predict_line(&args, &model_path)?);

    Ok(())
}

fn predict_line(args: &PredictArgs, model_path: &str) -> anyhow::Result<String> {
    let regressor = RegressorFactory::load(model_path)?;
    let service = PredictionService::new(regressor, model_path);

    let request = PredictionRequest::new(args.hour, args.day, args.month, args.day_of_week)?;
    let prediction = service.predict(&request)?;

    Ok(prediction.message())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn args(hour: i64, day: i64, month: i64, day_of_week: i64) -> PredictArgs {
        PredictArgs {
            hour,
            day,
            month,
            day_of_week,
            model: None,
        }
    }

    #[test]
    fn test_predict_line() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(
            br#"{"format": "linear", "intercept": 0.456, "coefficients": [1.0, 1.0, 1.0, 1.0]}"#,
        )
        .unwrap();

        let line = predict_line(&args(14, 15, 6, 2), file.path().to_str().unwrap()).unwrap();
        assert_eq!(line, "Predicted Energy Consumption: 37.46 kWh");
    }

    #[test]
    fn test_missing_model_fails() {
        let err = predict_line(&args(0, 1, 1, 0), "missing/energy_model.json").unwrap_err();
        assert!(err.to_string().contains("missing/energy_model.json"));
    }
}
