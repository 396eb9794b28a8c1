//! Study-inspect - reporting, export and cleanup for a study database.
//!
//! Reads a PostgreSQL database holding participants, code submissions,
//! feedback ratings and interaction events, and offers three operations:
//!
//! - **Report** - fixed batteries of aggregate queries printed as aligned
//!   text tables, grouped into sections
//! - **Export** - whitelisted tables written to CSV with ISO-8601 timestamps
//! - **Clear** - delete every row of a whitelisted table after the operator
//!   types a confirmation phrase
//!
//! # Architecture
//!
//! - [`domain`] - Result sets, table whitelist, timestamp normalization
//! - [`port`] - Traits the services drive (`ReportSource`, `TableStore`,
//!   `Confirmation`)
//! - [`application`] - `Reporter`, `Exporter`, `Eraser`
//! - [`adapter`] - Postgres (Diesel) implementation and the CLI
//! - [`config`] - Optional TOML configuration and logging setup
//! - [`error`] - Error types for the crate

pub mod adapter;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
