//! Synthetic monthly price paths.
//!
//! Prices follow a geometric random walk with monthly steps:
//!
//! ```text
//! p[t+1] = p[t] * exp((μ - σ²/2)·Δt + σ·√Δt·z),   Δt = 1/12, z ~ N(0, 1)
//! ```
//!
//! Paths are fully determined by the seed, which makes them useful for
//! property-style tests and demos without any input file.

use chrono::NaiveDate;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::PriceSeries;
use crate::error::{ConfigError, RoiError};

const DT: f64 = 1.0 / 12.0;

#[derive(Debug, Clone)]
pub struct SyntheticSpec {
    pub months: usize,
    pub start: NaiveDate,
    pub initial_price: f64,
    /// Annualized drift (e.g. `0.07`).
    pub annual_drift: f64,
    /// Annualized volatility (e.g. `0.16`).
    pub annual_vol: f64,
    pub seed: u64,
}

impl Default for SyntheticSpec {
    fn default() -> Self {
        Self {
            months: 240,
            start: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default(),
            initial_price: 100.0,
            annual_drift: 0.07,
            annual_vol: 0.16,
            seed: 42,
        }
    }
}

/// Generate a seeded monthly price series.
pub fn generate_monthly_series(spec: &SyntheticSpec) -> Result<PriceSeries, RoiError> {
    if spec.months == 0 {
        return Err(ConfigError::InvalidSynthetic("months must be > 0".to_string()).into());
    }
    if !(spec.annual_vol.is_finite() && spec.annual_vol >= 0.0 && spec.annual_drift.is_finite()) {
        return Err(ConfigError::InvalidSynthetic(format!(
            "drift={} vol={} (vol must be finite and >= 0)",
            spec.annual_drift, spec.annual_vol
        ))
        .into());
    }

    let mut rng = StdRng::seed_from_u64(spec.seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| ConfigError::InvalidSynthetic(format!("noise distribution: {e}")))?;

    let drift = (spec.annual_drift - 0.5 * spec.annual_vol * spec.annual_vol) * DT;
    let shock = spec.annual_vol * DT.sqrt();

    let mut prices = Vec::with_capacity(spec.months);
    let mut price = spec.initial_price;
    for _ in 0..spec.months {
        prices.push(price);
        let z: f64 = normal.sample(&mut rng);
        price *= (drift + shock * z).exp();
    }

    PriceSeries::monthly(spec.start, &prices)
}
