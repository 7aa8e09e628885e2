//! Input data sources that do not touch the filesystem.

pub mod synthetic;

pub use synthetic::{SyntheticSpec, generate_monthly_series};
