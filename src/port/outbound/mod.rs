//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the database and the operator terminal.

pub mod prompt;
pub mod report;
pub mod store;
