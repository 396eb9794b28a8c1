//! Query results as headers plus rendered rows.

use std::fmt::Display;

/// Text rendered for a SQL `NULL` in report tables.
pub const NULL_CELL: &str = "NULL";

/// A query result: an ordered header and ordered rows of rendered cells.
///
/// Every row carries exactly one cell per header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultSet {
    /// Build a result set from typed rows.
    pub fn from_rows<R: TableRow>(headers: &[&str], rows: &[R]) -> Self {
        let rows: Vec<Vec<String>> = rows.iter().map(TableRow::cells).collect();
        for row in &rows {
            debug_assert_eq!(
                row.len(),
                headers.len(),
                "row width does not match header width"
            );
        }
        Self {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A typed query row that can render itself as table cells.
pub trait TableRow {
    fn cells(&self) -> Vec<String>;
}

/// Render an optional value, using [`NULL_CELL`] for `None`.
pub fn cell<T: Display>(value: Option<&T>) -> String {
    value.map_or_else(|| NULL_CELL.to_string(), ToString::to_string)
}
