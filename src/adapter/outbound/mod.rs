//! Outbound adapters (driven side).

pub mod postgres;
