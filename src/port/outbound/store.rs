//! Whole-table access used by export and clear.

use crate::domain::table::StudyTable;
use crate::domain::timestamp::ColumnKind;
use crate::error::Result;

/// A column of a dumped table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

/// Every row and column of a table, values as Postgres text (`None` = NULL).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableDump {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Option<String>>>,
}

/// Row-level access to whitelisted tables.
pub trait TableStore {
    /// Count rows in `table`.
    ///
    /// # Errors
    ///
    /// Returns an error if the count query fails.
    fn count_rows(&mut self, table: StudyTable) -> Result<i64>;

    /// Delete every row of `table`, returning the number deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    fn delete_all(&mut self, table: StudyTable) -> Result<usize>;

    /// Select every row and column of `table`.
    ///
    /// # Errors
    ///
    /// Returns an error if the column lookup or select fails.
    fn dump(&mut self, table: StudyTable) -> Result<TableDump>;
}
