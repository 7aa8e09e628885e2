//! Shared domain types.
//!
//! These types are kept lightweight and serializable so they can be:
//!
//! - threaded through both engines during a run
//! - handed to a rendering front-end as-is
//! - embedded in a front-end's own configuration file (`RunConfig`)

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, DataError, RoiError};

/// One monthly observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}

/// Chronologically ordered monthly prices.
///
/// Invariants (checked on construction):
/// - at least one point
/// - every price finite and `> 0`
/// - strictly increasing dates, at most one point per calendar month
///
/// The sample index is the clock: gaps between months are not detected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from points already in chronological order.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, RoiError> {
        validate_points(&points)?;
        Ok(Self { points })
    }

    /// Build a series from rows listed most recent first (the usual export order).
    pub fn from_most_recent_first(mut points: Vec<PricePoint>) -> Result<Self, RoiError> {
        points.reverse();
        Self::new(points)
    }

    /// Stamp consecutive months starting at `start` onto `prices`.
    pub fn monthly(start: NaiveDate, prices: &[f64]) -> Result<Self, RoiError> {
        let mut points = Vec::with_capacity(prices.len());
        for (index, &price) in prices.iter().enumerate() {
            let date = u32::try_from(index)
                .ok()
                .and_then(|offset| start.checked_add_months(Months::new(offset)))
                .ok_or(DataError::DateOverflow { index })?;
            points.push(PricePoint { date, price });
        }
        Self::new(points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    pub fn first_date(&self) -> NaiveDate {
        self.points[0].date
    }

    pub fn last_date(&self) -> NaiveDate {
        self.points[self.points.len() - 1].date
    }
}

fn validate_points(points: &[PricePoint]) -> Result<(), DataError> {
    if points.is_empty() {
        return Err(DataError::Empty);
    }

    for (index, p) in points.iter().enumerate() {
        if !(p.price.is_finite() && p.price > 0.0) {
            return Err(DataError::InvalidPrice {
                index,
                price: p.price,
            });
        }
        if index == 0 {
            continue;
        }
        let prev = points[index - 1].date;
        if p.date <= prev {
            return Err(DataError::Unordered { index });
        }
        if p.date.year() == prev.year() && p.date.month() == prev.month() {
            return Err(DataError::DuplicateMonth { index });
        }
    }

    Ok(())
}

/// How an annual inflation rate is scaled to a window length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InflationModel {
    /// `(1 + r)^(months/12) - 1`
    #[default]
    Compound,
    /// `r * months/12`
    Linear,
}

impl std::str::FromStr for InflationModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compound" | "geometric" => Ok(InflationModel::Compound),
            "linear" => Ok(InflationModel::Linear),
            _ => Err(ConfigError::UnknownInflationModel(s.to_string())),
        }
    }
}

/// Annualized inflation applied uniformly to every window.
///
/// A rate of `0.0` means no adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflationRate {
    /// Percent per annum (e.g. `2.0` for 2 %).
    pub annual_pct: f64,
    #[serde(default)]
    pub model: InflationModel,
}

impl InflationRate {
    pub fn new(annual_pct: f64) -> Self {
        Self {
            annual_pct,
            model: InflationModel::Compound,
        }
    }

    pub fn none() -> Self {
        Self::new(0.0)
    }

    pub fn with_model(self, model: InflationModel) -> Self {
        Self { model, ..self }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.annual_pct.is_finite() && self.annual_pct >= 0.0) {
            return Err(ConfigError::InvalidInflation(self.annual_pct));
        }
        Ok(())
    }
}

/// Holding-period length plus the number of leading points to discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub months: usize,
    pub drop_points: usize,
}

impl WindowSpec {
    pub fn from_years(years: usize, drop_points: usize) -> Result<Self, ConfigError> {
        let months = years
            .checked_mul(12)
            .ok_or(ConfigError::HorizonTooLong { years })?;
        Ok(Self {
            months,
            drop_points,
        })
    }

    /// Check the window against a series of `len` points.
    pub fn validate(&self, len: usize) -> Result<(), ConfigError> {
        if self.months < 1 {
            return Err(ConfigError::WindowTooShort(self.months));
        }
        if self.drop_points >= len {
            return Err(ConfigError::DropOutOfRange {
                drop_points: self.drop_points,
                len,
            });
        }
        Ok(())
    }
}

/// Real return of one holding window.
///
/// `start_index` counts from the first point kept after dropping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiSample {
    pub start_index: usize,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// `sell / buy - 1`.
    pub nominal: f64,
    /// Nominal return minus inflation over the same span.
    pub value: f64,
}

impl RoiSample {
    pub fn is_underperforming(&self) -> bool {
        self.value < 0.0
    }
}

/// Outcome of extending an underperforming window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RecoveryResult {
    /// The real return first reached `>= 0` after this many extra months.
    Recovered { months: usize },
    /// The series ended first. `best_extension` is the extra months at which
    /// the real return came closest to break-even (0 if it never improved).
    Unrecovered { best_extension: usize },
}

impl RecoveryResult {
    pub fn recovered_months(&self) -> Option<usize> {
        match self {
            RecoveryResult::Recovered { months } => Some(*months),
            RecoveryResult::Unrecovered { .. } => None,
        }
    }
}

/// Recovery outcome for one underperforming `RoiSample`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecoverySample {
    pub start_index: usize,
    pub start_date: NaiveDate,
    pub initial_value: f64,
    pub result: RecoveryResult,
}

/// The single configuration threaded through a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Horizons `1..=max_years` are computed.
    pub max_years: usize,
    pub inflation: InflationRate,
    /// Leading (oldest) points discarded before windowing.
    pub drop_points: usize,
    /// Compute recovery times for underperforming windows.
    pub recovery: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_years: 10,
            inflation: InflationRate::new(2.0),
            drop_points: 0,
            recovery: false,
        }
    }
}

impl RunConfig {
    /// Fail fast on parameters that do not depend on the series.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_years == 0 {
            return Err(ConfigError::NoHorizons);
        }
        self.inflation.validate()
    }

    pub fn window(&self, years: usize) -> Result<WindowSpec, ConfigError> {
        WindowSpec::from_years(years, self.drop_points)
    }
}
