//! Timestamp heuristics and ISO-8601 normalization.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// POSIX regex a text timestamp must match to be considered castable.
///
/// Values without any of these separators (e.g. `20240105`) are excluded from
/// duration statistics even when Postgres could parse them.
pub const CASTABLE_PATTERN: &str = "[:+ZT-]";

/// Column data types that need normalizing on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Timestamp,
    TimestampTz,
    Date,
    Time,
    Other,
}

impl ColumnKind {
    /// Classify an `information_schema.columns.data_type` value.
    #[must_use]
    pub fn from_data_type(data_type: &str) -> Self {
        match data_type {
            "timestamp without time zone" => Self::Timestamp,
            "timestamp with time zone" => Self::TimestampTz,
            "date" => Self::Date,
            "time without time zone" => Self::Time,
            _ => Self::Other,
        }
    }
}

/// Convert a Postgres text rendering of a temporal value to ISO-8601.
///
/// Values that do not parse (`infinity`, BC dates) are returned unchanged.
#[must_use]
pub fn to_iso(kind: ColumnKind, raw: &str) -> String {
    let parsed = match kind {
        ColumnKind::Timestamp => NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
            .ok()
            .map(|ts| {
                let fmt = if ts.nanosecond() == 0 {
                    "%Y-%m-%dT%H:%M:%S"
                } else {
                    "%Y-%m-%dT%H:%M:%S%.6f"
                };
                ts.format(fmt).to_string()
            }),
        ColumnKind::TimestampTz => DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z")
            .ok()
            .map(|ts| {
                let fmt = if ts.nanosecond() == 0 {
                    "%Y-%m-%dT%H:%M:%S%:z"
                } else {
                    "%Y-%m-%dT%H:%M:%S%.6f%:z"
                };
                ts.format(fmt).to_string()
            }),
        ColumnKind::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .map(|d| d.format("%Y-%m-%d").to_string()),
        ColumnKind::Time => NaiveTime::parse_from_str(raw, "%H:%M:%S%.f")
            .ok()
            .map(|t| {
                let fmt = if t.nanosecond() == 0 {
                    "%H:%M:%S"
                } else {
                    "%H:%M:%S%.6f"
                };
                t.format(fmt).to_string()
            }),
        ColumnKind::Other => None,
    };
    parsed.unwrap_or_else(|| raw.to_string())
}
