//! In-memory table store.

use std::collections::{HashMap, HashSet};

use crate::domain::table::StudyTable;
use crate::domain::timestamp::ColumnKind;
use crate::error::{Error, Result};
use crate::port::outbound::store::{Column, TableDump, TableStore};

/// Tables held in memory; unknown tables are empty.
#[derive(Debug, Default)]
pub struct FakeTableStore {
    tables: HashMap<StudyTable, TableDump>,
    failing: HashSet<StudyTable>,
    deletes: usize,
}

impl FakeTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `table` with a full dump.
    pub fn with_dump(mut self, table: StudyTable, dump: TableDump) -> Self {
        self.tables.insert(table, dump);
        self
    }

    /// Seed `table` with `count` single-column rows.
    pub fn with_rows(self, table: StudyTable, count: usize) -> Self {
        let dump = TableDump {
            columns: vec![Column {
                name: "id".into(),
                kind: ColumnKind::Other,
            }],
            rows: (0..count).map(|i| vec![Some(i.to_string())]).collect(),
        };
        self.with_dump(table, dump)
    }

    /// Make every dump of `table` fail.
    pub fn failing_dump(mut self, table: StudyTable) -> Self {
        self.failing.insert(table);
        self
    }

    /// Number of delete statements issued.
    pub fn deletes(&self) -> usize {
        self.deletes
    }
}

impl TableStore for FakeTableStore {
    fn count_rows(&mut self, table: StudyTable) -> Result<i64> {
        let rows = self.tables.get(&table).map_or(0, |d| d.rows.len());
        Ok(rows as i64)
    }

    fn delete_all(&mut self, table: StudyTable) -> Result<usize> {
        self.deletes += 1;
        Ok(self
            .tables
            .get_mut(&table)
            .map_or(0, |d| std::mem::take(&mut d.rows).len()))
    }

    fn dump(&mut self, table: StudyTable) -> Result<TableDump> {
        if self.failing.contains(&table) {
            return Err(Error::Query {
                title: "dump",
                source: diesel::result::Error::NotFound,
            });
        }
        Ok(self.tables.get(&table).cloned().unwrap_or_default())
    }
}
