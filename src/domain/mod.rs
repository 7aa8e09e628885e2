//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the validated input series (`PriceSeries`, `PricePoint`)
//! - run parameters (`WindowSpec`, `InflationRate`, `InflationModel`, `RunConfig`)
//! - engine outputs (`RoiSample`, `RecoveryResult`, `RecoverySample`)

pub mod types;

pub use types::*;
