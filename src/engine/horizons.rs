//! Horizon sweep: one RoI distribution per holding period of 1..=N years.
//!
//! Horizons are independent, so they are evaluated in parallel; results come
//! back in horizon order.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{PricePoint, RecoverySample, RoiSample, RunConfig};
use crate::error::RoiError;
use crate::math::inflation_benchmark;

use super::recovery::recoveries_for;
use super::window::rois_over;

/// All samples for one holding period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HorizonDistribution {
    pub years: usize,
    pub window_months: usize,
    /// Growth multiple needed to keep up with inflation over this horizon.
    pub inflation_benchmark: f64,
    /// Empty when the horizon is longer than the data.
    pub samples: Vec<RoiSample>,
    /// Present only when recovery analysis was requested.
    pub recovery: Option<Vec<RecoverySample>>,
}

impl HorizonDistribution {
    pub fn has_data(&self) -> bool {
        !self.samples.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value).collect()
    }

    pub fn underperforming(&self) -> usize {
        self.samples.iter().filter(|s| s.is_underperforming()).count()
    }
}

/// Evaluate every horizon in `1..=config.max_years` over an already-trimmed slice.
///
/// The sweep stops at the first horizon longer than the data, so at most one
/// trailing horizon comes back empty however large `max_years` is.
pub fn compute_horizons(
    points: &[PricePoint],
    config: &RunConfig,
) -> Result<Vec<HorizonDistribution>, RoiError> {
    let last = config.max_years.min(supported_years(points.len()) + 1);
    if last < config.max_years {
        debug!(max_years = config.max_years, last, "horizon sweep clamped to data length");
    }

    (1..=last)
        .into_par_iter()
        .map(|years| compute_horizon(points, years, config))
        .collect()
}

/// Longest horizon in whole years with at least one window.
fn supported_years(len: usize) -> usize {
    len.saturating_sub(1) / 12
}

/// Evaluate a single horizon.
pub fn compute_horizon(
    points: &[PricePoint],
    years: usize,
    config: &RunConfig,
) -> Result<HorizonDistribution, RoiError> {
    // Points are already trimmed, so only the window length is used here.
    let window_months = config.window(years)?.months;
    let samples = rois_over(points, window_months, &config.inflation)?;

    if samples.is_empty() {
        warn!(years, window_months, points = points.len(), "horizon longer than data; no samples");
    }

    let recovery = if config.recovery {
        Some(recoveries_for(points, &samples, window_months, &config.inflation)?)
    } else {
        None
    };

    let horizon = HorizonDistribution {
        years,
        window_months,
        inflation_benchmark: inflation_benchmark(&config.inflation, window_months),
        samples,
        recovery,
    };

    debug!(
        years,
        samples = horizon.samples.len(),
        underperforming = horizon.underperforming(),
        "horizon evaluated"
    );

    Ok(horizon)
}
