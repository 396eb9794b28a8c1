//! Application services (use cases).
//!
//! These services drive the outbound ports to implement reporting, export
//! and clear.

pub mod erase;
pub mod export;
pub mod report;

pub use erase::{ClearOutcome, Eraser, CONFIRM_PHRASE};
pub use export::{ExportOutcome, ExportSummary, Exporter};
pub use report::Reporter;
