//! Top-level application orchestration.
//!
//! Front-ends own reading the price file and drawing the plots; this module is
//! what they call in between:
//! - resolves the run configuration (explicit or from the environment)
//! - runs the horizon sweep and optional recovery analysis
//! - returns everything a renderer needs in one `RunOutput`

use crate::domain::{PriceSeries, RunConfig};
use crate::error::RoiError;

pub mod pipeline;

pub use pipeline::{DataSpan, RunOutput};

/// Run with an explicit configuration.
pub fn run(prices: &PriceSeries, config: &RunConfig) -> Result<RunOutput, RoiError> {
    pipeline::run(prices, config)
}

/// Run with the configuration read from `ROI_*` environment variables.
pub fn run_from_env(prices: &PriceSeries) -> Result<RunOutput, RoiError> {
    let config = RunConfig::from_env()?;
    pipeline::run(prices, &config)
}
