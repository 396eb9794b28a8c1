//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`report`] - `ScriptedReportSource`, a canned [`ReportSource`](crate::port::ReportSource).
//! - [`store`] - `FakeTableStore`, an in-memory [`TableStore`](crate::port::TableStore).
//! - [`prompt`] - `ScriptedPrompt`, a fixed-answer [`Confirmation`](crate::port::Confirmation).

pub mod prompt;
pub mod report;
pub mod store;
