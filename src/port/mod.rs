//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`ReportSource`] - Aggregate report queries
//! - [`TableStore`] - Whole-table count, dump and delete
//! - [`Confirmation`] - Blocking operator input

pub mod outbound;

pub use outbound::prompt::Confirmation;
pub use outbound::report::{ReportQuery, ReportSource};
pub use outbound::store::{Column, TableDump, TableStore};
