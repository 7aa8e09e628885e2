//! Mathematical utilities: inflation scaling, series trimming, order statistics.

pub mod inflation;
pub mod quantile;
pub mod series;

pub use inflation::*;
pub use quantile::*;
pub use series::*;
