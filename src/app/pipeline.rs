//! One run, end to end: a validated `RunConfig` and a price series in, every
//! horizon's samples, recovery times and summaries out.
//!
//! Order of work: reject bad parameters, trim the oldest points, sweep the
//! horizons, then summarize each one.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::domain::{PriceSeries, RunConfig};
use crate::engine::{HorizonDistribution, compute_horizons};
use crate::error::{ConfigError, RoiError};
use crate::math::series;
use crate::report::{HorizonSummary, summarize_horizon};

/// Date range and size of the series actually analysed (after dropping points).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DataSpan {
    pub first: NaiveDate,
    pub last: NaiveDate,
    pub points: usize,
}

/// All computed outputs of a single run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunOutput {
    pub config: RunConfig,
    pub span: DataSpan,
    /// One entry per horizon year, in order, up to and including the first
    /// horizon without data.
    pub horizons: Vec<HorizonDistribution>,
    pub summaries: Vec<HorizonSummary>,
}

impl RunOutput {
    /// Horizons that produced at least one sample.
    pub fn horizons_with_data(&self) -> impl Iterator<Item = &HorizonDistribution> {
        self.horizons.iter().filter(|h| h.has_data())
    }
}

/// Execute the full pipeline for one price series.
pub fn run(prices: &PriceSeries, config: &RunConfig) -> Result<RunOutput, RoiError> {
    config.validate()?;
    if config.drop_points >= prices.len() {
        return Err(ConfigError::DropOutOfRange {
            drop_points: config.drop_points,
            len: prices.len(),
        }
        .into());
    }

    let points = series::drop_points(prices.points(), config.drop_points);
    let span = DataSpan {
        first: points[0].date,
        last: points[points.len() - 1].date,
        points: points.len(),
    };

    info!(
        points = span.points,
        dropped = config.drop_points,
        max_years = config.max_years,
        inflation_pct = config.inflation.annual_pct,
        recovery = config.recovery,
        "computing RoI distributions"
    );

    let horizons = compute_horizons(points, config)?;
    let summaries = horizons.iter().map(summarize_horizon).collect();

    Ok(RunOutput {
        config: *config,
        span,
        horizons,
        summaries,
    })
}
