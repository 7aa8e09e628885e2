//! Reporting utilities: distribution summaries and formatted output.

pub mod format;
pub mod summary;

pub use format::format_run_summary;
pub use summary::*;
