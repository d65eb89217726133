//! CLI module for the energy predictor
//!
//! Provides subcommands:
//! - `serve`: HTML form and JSON API
//! - `predict`: one prediction printed to stdout

pub mod predict;
pub mod serve;

use clap::{Parser, Subcommand};

/// Energy consumption predictor over a pre-trained regression model
#[derive(Parser)]
#[command(name = "energy-predictor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web form and API server
    Serve(serve::ServeArgs),

    /// Run a single prediction and print the result
    Predict(predict::PredictArgs),
}
