//! `roi-horizons` library crate.
//!
//! Computes, from a monthly price series, the distribution of inflation-adjusted
//! returns for every holding period of 1..N years, and how long underperforming
//! holdings needed to break even.
//!
//! Reading input files and drawing plots are left to front-ends so that:
//!
//! - core logic is testable without files or a display
//! - the same results can feed a CLI, a notebook, or a web chart

pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod math;
pub mod report;

pub use app::{RunOutput, run};
pub use domain::{InflationModel, InflationRate, PricePoint, PriceSeries, RecoveryResult, RunConfig};
pub use engine::{compute_recovery_time, compute_rois};
pub use error::{ConfigError, DataError, RoiError};
