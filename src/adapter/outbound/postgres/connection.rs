//! Database connection management using Diesel ORM.
//!
//! One synchronous connection serves the whole run. It stays in autocommit
//! mode so a failed statement does not abort the statements after it.

use diesel::prelude::*;
use diesel::PgConnection;
use tracing::info;
use url::Url;

use crate::error::{Error, Result};

/// Open a connection to `database_url`.
///
/// # Errors
/// Returns [`Error::Connection`] if the server cannot be reached or rejects
/// the credentials.
pub fn establish(database_url: &str) -> Result<PgConnection> {
    let conn = PgConnection::establish(database_url).map_err(|source| Error::Connection {
        url: database_url.to_string(),
        source,
    })?;
    info!(url = %redact(database_url), "connected to database");
    Ok(conn)
}

/// Mask the password of a connection URL for log output.
///
/// Strings that do not parse as URLs (libpq keyword strings) are returned
/// unchanged.
#[must_use]
pub fn redact(database_url: &str) -> String {
    match Url::parse(database_url) {
        Ok(mut url) if url.password().is_some() => {
            // Only fails for cannot-be-a-base URLs, which carry no password.
            let _ = url.set_password(Some("***"));
            url.to_string()
        }
        _ => database_url.to_string(),
    }
}
