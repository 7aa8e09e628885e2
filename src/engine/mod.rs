//! Return computation.
//!
//! Responsibilities:
//!
//! - real return of every fixed-length holding window (`window`)
//! - months until an underperforming window breaks even (`recovery`)
//! - sweep over all requested horizons, in parallel (`horizons`)

pub mod horizons;
pub mod recovery;
pub mod window;

pub use horizons::*;
pub use recovery::compute_recovery_time;
pub use window::compute_rois;
