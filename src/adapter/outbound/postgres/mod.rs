//! Postgres access to the study database.
//!
//! Report queries are raw SQL decoded into typed rows with Diesel's
//! `QueryableByName`; the study schema is owned by the study application, so
//! no Diesel `table!` schema is generated here.

pub mod connection;
pub mod model;
pub mod sql;
pub mod store;

pub use store::PgStudyStore;
