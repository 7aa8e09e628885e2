//! Error types shared by the engines and the pipeline.
//!
//! Two kinds exist:
//! - `ConfigError`: parameters rejected before any computation starts
//! - `DataError`: the price series itself is unusable
//!
//! An empty result for a horizon is *not* an error and never shows up here.

use thiserror::Error;

/// Invalid run parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Window length must be at least 1 month (got {0}).")]
    WindowTooShort(usize),

    #[error("Cannot drop {drop_points} points from a series of {len} points.")]
    DropOutOfRange { drop_points: usize, len: usize },

    #[error("Inflation rate must be a finite, non-negative percentage (got {0}).")]
    InvalidInflation(f64),

    #[error("Maximum horizon must be at least 1 year.")]
    NoHorizons,

    #[error("Start index {start_index} with a {window_months}-month window is outside a series of {len} points.")]
    WindowOutOfRange {
        start_index: usize,
        window_months: usize,
        len: usize,
    },

    #[error("Invalid value for {key}: '{value}'.")]
    InvalidEnv { key: String, value: String },

    #[error("Invalid synthetic series setting: {0}")]
    InvalidSynthetic(String),

    #[error("A {years}-year horizon does not fit in a month count.")]
    HorizonTooLong { years: usize },

    #[error("Unknown inflation model '{0}' (expected compound, geometric or linear).")]
    UnknownInflationModel(String),
}

/// Malformed price data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("Price series is empty.")]
    Empty,

    #[error("Invalid price {price} at index {index} (must be finite and > 0).")]
    InvalidPrice { index: usize, price: f64 },

    #[error("Timestamps are not strictly increasing at index {index}.")]
    Unordered { index: usize },

    #[error("Index {index} falls in the same calendar month as its predecessor.")]
    DuplicateMonth { index: usize },

    #[error("No representable calendar month for index {index}.")]
    DateOverflow { index: usize },
}

/// Crate-level error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoiError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Data(#[from] DataError),
}

impl RoiError {
    /// Process exit code a front-end should use for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            RoiError::Config(_) => 2,
            RoiError::Data(_) => 3,
        }
    }
}
