//! Distribution summaries (the numbers behind a box plot).

use serde::Serialize;

use crate::domain::RecoverySample;
use crate::engine::HorizonDistribution;
use crate::math::{mean, quantile_sorted, sorted};

/// Five-number summary plus mean and underperforming share.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionSummary {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
    /// Fraction of values `< 0`.
    pub share_negative: f64,
}

impl DistributionSummary {
    /// `None` for an empty slice.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let s = sorted(values);
        let negative = s.iter().filter(|v| **v < 0.0).count();
        Some(Self {
            count: s.len(),
            min: *s.first()?,
            q1: quantile_sorted(&s, 0.25)?,
            median: quantile_sorted(&s, 0.5)?,
            q3: quantile_sorted(&s, 0.75)?,
            max: *s.last()?,
            mean: mean(&s)?,
            share_negative: negative as f64 / s.len() as f64,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecoverySummary {
    pub underperforming: usize,
    pub recovered: usize,
    pub unrecovered: usize,
    /// Extra months needed, over recovered windows only.
    pub months: Option<DistributionSummary>,
}

impl RecoverySummary {
    pub fn from_samples(samples: &[RecoverySample]) -> Self {
        let months: Vec<f64> = samples
            .iter()
            .filter_map(|s| s.result.recovered_months())
            .map(|m| m as f64)
            .collect();
        Self {
            underperforming: samples.len(),
            recovered: months.len(),
            unrecovered: samples.len() - months.len(),
            months: DistributionSummary::from_values(&months),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizonSummary {
    pub years: usize,
    pub window_months: usize,
    pub inflation_benchmark: f64,
    /// `None` when the horizon has no samples.
    pub distribution: Option<DistributionSummary>,
    pub recovery: Option<RecoverySummary>,
}

pub fn summarize_horizon(horizon: &HorizonDistribution) -> HorizonSummary {
    HorizonSummary {
        years: horizon.years,
        window_months: horizon.window_months,
        inflation_benchmark: horizon.inflation_benchmark,
        distribution: DistributionSummary::from_values(&horizon.values()),
        recovery: horizon.recovery.as_deref().map(RecoverySummary::from_samples),
    }
}
