//! Window RoI engine.
//!
//! Slides a fixed-length window over the (trimmed) series and records the real
//! return of every complete window:
//!
//! ```text
//! value[i] = price[i + w] / price[i] - 1 - inflation_factor(rate, w)
//! ```
//!
//! A window longer than the trimmed series is not an error: it yields no samples.

use crate::domain::{InflationRate, PricePoint, PriceSeries, RoiSample, WindowSpec};
use crate::error::{ConfigError, RoiError};
use crate::math::{inflation_factor, nominal_return, real_return, series};

/// Real returns for every window of `window_months` after dropping `drop_points`.
///
/// `start_index` in the output counts from the first kept point.
pub fn compute_rois(
    prices: &PriceSeries,
    window_months: usize,
    inflation: &InflationRate,
    drop_points: usize,
) -> Result<Vec<RoiSample>, RoiError> {
    WindowSpec {
        months: window_months,
        drop_points,
    }
    .validate(prices.len())?;
    inflation.validate()?;

    let points = series::drop_points(prices.points(), drop_points);
    rois_over(points, window_months, inflation)
}

/// Window sweep over an already-trimmed slice. Parameters are assumed validated.
pub(crate) fn rois_over(
    points: &[PricePoint],
    window_months: usize,
    inflation: &InflationRate,
) -> Result<Vec<RoiSample>, RoiError> {
    let factor = inflation_factor(inflation, window_months);
    (0..series::window_count(points.len(), window_months))
        .map(|start| window_sample(points, start, window_months, factor))
        .collect()
}

/// Real return of the window `[start, start + window_months]`.
pub(crate) fn window_sample(
    points: &[PricePoint],
    start: usize,
    window_months: usize,
    factor: f64,
) -> Result<RoiSample, RoiError> {
    // `start <= end`, so one bound check covers both points.
    let Some(end) = start
        .checked_add(window_months)
        .filter(|&end| end < points.len())
    else {
        return Err(ConfigError::WindowOutOfRange {
            start_index: start,
            window_months,
            len: points.len(),
        }
        .into());
    };
    let (buy, sell) = (points[start], points[end]);

    let nominal = nominal_return(buy.price, start, sell.price, end)?;
    Ok(RoiSample {
        start_index: start,
        start_date: buy.date,
        end_date: sell.date,
        nominal,
        value: real_return(nominal, factor),
    })
}
