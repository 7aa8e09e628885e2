//! Inflation scaling shared by both engines.
//!
//! Both the window engine and the recovery engine go through `real_return`, so
//! "real return" means exactly the same thing everywhere:
//!
//! ```text
//! real = (sell / buy - 1) - inflation_factor(rate, months)
//! ```

use crate::domain::{InflationModel, InflationRate};
use crate::error::DataError;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Inflation accumulated over `window_months` at the given annual rate.
pub fn inflation_factor(rate: &InflationRate, window_months: usize) -> f64 {
    let r = rate.annual_pct / 100.0;
    let years = window_months as f64 / MONTHS_PER_YEAR;
    match rate.model {
        InflationModel::Compound => (1.0 + r).powf(years) - 1.0,
        InflationModel::Linear => r * years,
    }
}

/// Growth multiple needed to break even against inflation over `window_months`.
pub fn inflation_benchmark(rate: &InflationRate, window_months: usize) -> f64 {
    1.0 + inflation_factor(rate, window_months)
}

/// Nominal return `sell / buy - 1`.
///
/// Both prices must be finite and positive; `index` values are only used to
/// report which point was bad.
pub fn nominal_return(
    buy: f64,
    buy_index: usize,
    sell: f64,
    sell_index: usize,
) -> Result<f64, DataError> {
    check_price(buy, buy_index)?;
    check_price(sell, sell_index)?;
    Ok(sell / buy - 1.0)
}

/// Nominal return minus a precomputed inflation factor.
pub fn real_return(nominal: f64, inflation_factor: f64) -> f64 {
    nominal - inflation_factor
}

fn check_price(price: f64, index: usize) -> Result<(), DataError> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(DataError::InvalidPrice { index, price })
    }
}
