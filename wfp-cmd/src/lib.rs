//! Command implementations for the wildfire prediction CLI.
//!
//! Drives the same `PredictionSession` the dashboard uses, so the CLI
//! exercises validation, normalization, and fallback resolution exactly
//! as the browser does.

use clap::Subcommand;

pub mod predict;

#[derive(Subcommand)]
pub enum Command {
    /// Request a wildfire cause/size prediction for a location
    Predict {
        /// Latitude in [-90, 90]
        #[arg(long)]
        lat: f64,

        /// Longitude in [-180, 180]
        #[arg(long)]
        lon: f64,

        /// Month, 1-12 (defaults to January)
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,

        /// Two-letter state code (e.g. CA)
        #[arg(short, long)]
        state: String,

        /// Prediction service base URL (defaults to $WFP_API_URL or localhost)
        #[arg(long)]
        api_url: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Predict {
            lat,
            lon,
            month,
            state,
            api_url,
        } => predict::run_predict(lat, lon, month, &state, api_url.as_deref()).await,
    }
}
