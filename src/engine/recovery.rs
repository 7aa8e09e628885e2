//! Recovery-time engine.
//!
//! For a window whose real return is negative, keep the purchase fixed and push
//! the sale date forward one month at a time until the real return over the
//! longer window is `>= 0`. Inflation is re-scaled to every extended length.

use crate::domain::{InflationRate, PricePoint, PriceSeries, RecoveryResult, RecoverySample, RoiSample};
use crate::error::{ConfigError, RoiError};
use crate::math::inflation_factor;

use super::window::window_sample;

/// Extra months needed for the window starting at `start_index` to break even.
///
/// Intended for underperforming windows; a window that already breaks even
/// reports `Recovered { months: 0 }`.
pub fn compute_recovery_time(
    prices: &PriceSeries,
    start_index: usize,
    initial_window_months: usize,
    inflation: &InflationRate,
) -> Result<RecoveryResult, RoiError> {
    inflation.validate()?;
    recovery_over(prices.points(), start_index, initial_window_months, inflation)
}

pub(crate) fn recovery_over(
    points: &[PricePoint],
    start_index: usize,
    initial_window_months: usize,
    inflation: &InflationRate,
) -> Result<RecoveryResult, RoiError> {
    if initial_window_months < 1 {
        return Err(ConfigError::WindowTooShort(initial_window_months).into());
    }

    let initial = window_sample(
        points,
        start_index,
        initial_window_months,
        inflation_factor(inflation, initial_window_months),
    )?;
    if initial.value >= 0.0 {
        return Ok(RecoveryResult::Recovered { months: 0 });
    }

    let mut best_value = initial.value;
    let mut best_extension = 0;

    // Last valid sale index is `points.len() - 1`.
    let max_window = points.len() - 1 - start_index;
    for window in (initial_window_months + 1)..=max_window {
        let extension = window - initial_window_months;
        let value = window_sample(points, start_index, window, inflation_factor(inflation, window))?.value;
        if value >= 0.0 {
            return Ok(RecoveryResult::Recovered { months: extension });
        }
        if value > best_value {
            best_value = value;
            best_extension = extension;
        }
    }

    Ok(RecoveryResult::Unrecovered { best_extension })
}

/// Recovery outcome for every underperforming sample, in start order.
pub(crate) fn recoveries_for(
    points: &[PricePoint],
    samples: &[RoiSample],
    window_months: usize,
    inflation: &InflationRate,
) -> Result<Vec<RecoverySample>, RoiError> {
    samples
        .iter()
        .filter(|s| s.is_underperforming())
        .map(|s| {
            let result = recovery_over(points, s.start_index, window_months, inflation)?;
            Ok(RecoverySample {
                start_index: s.start_index,
                start_date: s.start_date,
                initial_value: s.value,
                result,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::synthetic::{SyntheticSpec, generate_monthly_series};
    use crate::engine::window::compute_rois;
    use chrono::NaiveDate;

    fn series(prices: &[f64]) -> PriceSeries {
        PriceSeries::monthly(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(), prices).unwrap()
    }

    fn real_value(prices: &PriceSeries, start: usize, window: usize, rate: &InflationRate) -> f64 {
        window_sample(prices.points(), start, window, inflation_factor(rate, window))
            .unwrap()
            .value
    }

    #[test]
    fn recovers_after_one_month() {
        let prices = series(&[100.0, 80.0, 120.0]);
        let result = compute_recovery_time(&prices, 0, 1, &InflationRate::none()).unwrap();
        assert_eq!(result, RecoveryResult::Recovered { months: 1 });
    }

    #[test]
    fn unrecovered_when_series_ends() {
        let prices = series(&[100.0, 80.0, 90.0, 85.0]);
        let result = compute_recovery_time(&prices, 0, 1, &InflationRate::none()).unwrap();
        // Closest approach is the sale at index 2 (one extra month).
        assert_eq!(result, RecoveryResult::Unrecovered { best_extension: 1 });

        let flat = series(&[100.0, 80.0, 70.0]);
        let result = compute_recovery_time(&flat, 0, 1, &InflationRate::none()).unwrap();
        assert_eq!(result, RecoveryResult::Unrecovered { best_extension: 0 });
    }

    #[test]
    fn inflation_grows_with_extension() {
        // Price returns to par, but 12 % a year of inflation keeps it underwater.
        let prices = series(&[100.0, 90.0, 100.0, 100.0]);
        let result = compute_recovery_time(&prices, 0, 1, &InflationRate::new(12.0)).unwrap();
        assert!(matches!(result, RecoveryResult::Unrecovered { .. }));

        let result = compute_recovery_time(&prices, 0, 1, &InflationRate::none()).unwrap();
        assert_eq!(result, RecoveryResult::Recovered { months: 1 });
    }

    #[test]
    fn already_breaking_even_needs_no_extension() {
        let prices = series(&[100.0, 120.0]);
        let result = compute_recovery_time(&prices, 0, 1, &InflationRate::none()).unwrap();
        assert_eq!(result, RecoveryResult::Recovered { months: 0 });
    }

    #[test]
    fn out_of_range_window_is_config_error() {
        let prices = series(&[100.0, 80.0, 120.0]);
        assert_eq!(
            compute_recovery_time(&prices, 1, 2, &InflationRate::none()),
            Err(RoiError::Config(ConfigError::WindowOutOfRange {
                start_index: 1,
                window_months: 2,
                len: 3,
            }))
        );
        assert_eq!(
            compute_recovery_time(&prices, 0, 0, &InflationRate::none()),
            Err(RoiError::Config(ConfigError::WindowTooShort(0)))
        );
    }

    #[test]
    fn window_end_past_usize_is_config_error() {
        let prices = series(&[100.0, 80.0, 120.0]);
        assert_eq!(
            compute_recovery_time(&prices, 1, usize::MAX, &InflationRate::none()),
            Err(RoiError::Config(ConfigError::WindowOutOfRange {
                start_index: 1,
                window_months: usize::MAX,
                len: 3,
            }))
        );
        assert_eq!(
            compute_recovery_time(&prices, usize::MAX, 1, &InflationRate::none()),
            Err(RoiError::Config(ConfigError::WindowOutOfRange {
                start_index: usize::MAX,
                window_months: 1,
                len: 3,
            }))
        );
    }

    #[test]
    fn recovered_months_are_minimal_on_random_series() {
        let rate = InflationRate::new(2.5);
        for seed in 0..15 {
            let prices = generate_monthly_series(&SyntheticSpec {
                months: 180,
                seed,
                ..SyntheticSpec::default()
            })
            .unwrap();

            for window in [12, 36] {
                let rois = compute_rois(&prices, window, &rate, 0).unwrap();
                for s in rois.iter().filter(|s| s.is_underperforming()) {
                    let result = compute_recovery_time(&prices, s.start_index, window, &rate).unwrap();
                    match result {
                        RecoveryResult::Recovered { months } => {
                            assert!(months >= 1);
                            assert!(real_value(&prices, s.start_index, window + months, &rate) >= 0.0);
                            for j in 0..months {
                                assert!(real_value(&prices, s.start_index, window + j, &rate) < 0.0);
                            }
                        }
                        RecoveryResult::Unrecovered { best_extension } => {
                            let last = prices.len() - 1 - s.start_index;
                            assert!(window + best_extension <= last);
                            for w in window..=last {
                                assert!(real_value(&prices, s.start_index, w, &rate) < 0.0);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn recoveries_only_cover_underperformers() {
        let prices = series(&[100.0, 80.0, 120.0, 110.0, 100.0]);
        let rois = compute_rois(&prices, 1, &InflationRate::none(), 0).unwrap();
        let rec = recoveries_for(prices.points(), &rois, 1, &InflationRate::none()).unwrap();
        let starts: Vec<usize> = rec.iter().map(|r| r.start_index).collect();
        assert_eq!(starts, vec![0, 2, 3]);
        assert_eq!(rec[0].result, RecoveryResult::Recovered { months: 1 });
        assert_eq!(rec[1].result, RecoveryResult::Unrecovered { best_extension: 0 });
        assert!((rec[0].initial_value + 0.2).abs() < 1e-12);
    }
}
