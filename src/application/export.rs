//! CSV export of whitelisted tables.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::domain::table::StudyTable;
use crate::domain::timestamp::to_iso;
use crate::error::Result;
use crate::port::outbound::store::{TableDump, TableStore};

/// Result of exporting one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// A CSV file was written.
    Written { path: PathBuf, rows: usize },
    /// The table had no rows; nothing was written.
    Empty,
}

impl ExportOutcome {
    #[must_use]
    pub fn rows(&self) -> usize {
        match self {
            Self::Written { rows, .. } => *rows,
            Self::Empty => 0,
        }
    }
}

/// Per-table results of exporting every whitelisted table.
#[derive(Debug)]
pub struct ExportSummary {
    pub directory: PathBuf,
    pub results: Vec<(StudyTable, Result<ExportOutcome>)>,
}

impl ExportSummary {
    /// Tables exported without error, empty ones included.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|(_, r)| r.is_ok()).count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Rows written across all successful tables.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.results
            .iter()
            .filter_map(|(_, r)| r.as_ref().ok())
            .map(ExportOutcome::rows)
            .sum()
    }
}

/// Name of a fresh export directory for `now`.
#[must_use]
pub fn timestamped_dir(now: DateTime<Local>) -> PathBuf {
    PathBuf::from(now.format("export_%Y%m%d_%H%M%S").to_string())
}

/// Normalize dumped values for CSV: NULL becomes empty, temporal values ISO-8601.
#[must_use]
pub fn normalize(dump: &TableDump) -> Vec<Vec<String>> {
    dump.rows
        .iter()
        .map(|row| {
            row.iter()
                .zip(&dump.columns)
                .map(|(value, column)| match value {
                    None => String::new(),
                    Some(raw) => to_iso(column.kind, raw),
                })
                .collect()
        })
        .collect()
}

/// Writes tables from a [`TableStore`] to CSV files.
pub struct Exporter<'a, S> {
    store: &'a mut S,
}

impl<'a, S: TableStore> Exporter<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Export `table` to `<dir>/<table>.csv`, creating `dir` if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read or the file written.
    pub fn export_table(&mut self, table: StudyTable, dir: &Path) -> Result<ExportOutcome> {
        let dump = self.store.dump(table)?;
        if dump.rows.is_empty() {
            info!(table = %table, "no rows to export");
            return Ok(ExportOutcome::Empty);
        }

        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.csv", table.name()));
        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(dump.columns.iter().map(|c| c.name.as_str()))?;
        let rows = normalize(&dump);
        for row in &rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        info!(table = %table, rows = rows.len(), path = %path.display(), "table exported");
        Ok(ExportOutcome::Written {
            path,
            rows: rows.len(),
        })
    }

    /// Export every whitelisted table into `dir`.
    ///
    /// A failing table is recorded in the summary; the rest still export.
    ///
    /// # Errors
    ///
    /// Returns an error only if `dir` cannot be created.
    pub fn export_all(&mut self, dir: &Path) -> Result<ExportSummary> {
        fs::create_dir_all(dir)?;
        let mut results = Vec::with_capacity(StudyTable::ALL.len());
        for table in StudyTable::ALL {
            let result = self.export_table(table, dir);
            if let Err(e) = &result {
                warn!(table = %table, error = %e, "table export failed");
            }
            results.push((table, result));
        }
        Ok(ExportSummary {
            directory: dir.to_path_buf(),
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::timestamp::ColumnKind;
    use crate::port::outbound::store::Column;
    use crate::testkit::store::FakeTableStore;
    use chrono::TimeZone;

    fn participants_dump() -> TableDump {
        TableDump {
            columns: vec![
                Column {
                    name: "participant_id".into(),
                    kind: ColumnKind::Other,
                },
                Column {
                    name: "skill_level".into(),
                    kind: ColumnKind::Other,
                },
                Column {
                    name: "created_at".into(),
                    kind: ColumnKind::TimestampTz,
                },
            ],
            rows: vec![
                vec![
                    Some("p1".into()),
                    Some("novice, \"eager\"".into()),
                    Some("2024-01-05 10:00:00+00".into()),
                ],
                vec![Some("p2".into()), None, None],
            ],
        }
    }

    fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
        let mut reader = csv::Reader::from_path(path).unwrap();
        let headers = reader.headers().unwrap().iter().map(String::from).collect();
        let rows = reader
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect();
        (headers, rows)
    }

    #[test]
    fn normalize_blanks_nulls_and_formats_timestamps() {
        let rows = normalize(&participants_dump());
        assert_eq!(rows[0][2], "2024-01-05T10:00:00+00:00");
        assert_eq!(rows[1], vec!["p2".to_string(), String::new(), String::new()]);
    }

    #[test]
    fn exported_csv_round_trips_normalized_values() {
        let dir = tempfile::tempdir().unwrap();
        let dump = participants_dump();
        let mut store = FakeTableStore::new().with_dump(StudyTable::Participants, dump.clone());

        let outcome = Exporter::new(&mut store)
            .export_table(StudyTable::Participants, dir.path())
            .unwrap();

        let path = dir.path().join("participants.csv");
        assert_eq!(
            outcome,
            ExportOutcome::Written {
                path: path.clone(),
                rows: 2
            }
        );
        let (headers, rows) = read_csv(&path);
        assert_eq!(headers, vec!["participant_id", "skill_level", "created_at"]);
        assert_eq!(rows, normalize(&dump));
    }

    #[test]
    fn empty_table_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FakeTableStore::new();

        let outcome = Exporter::new(&mut store)
            .export_table(StudyTable::Events, dir.path())
            .unwrap();

        assert_eq!(outcome, ExportOutcome::Empty);
        assert!(!dir.path().join("events.csv").exists());
    }

    #[test]
    fn export_all_counts_successes_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("export");
        let mut store = FakeTableStore::new()
            .with_dump(StudyTable::Participants, participants_dump())
            .failing_dump(StudyTable::Feedback);

        let summary = Exporter::new(&mut store).export_all(&out).unwrap();

        assert_eq!(summary.total(), 4);
        assert_eq!(summary.succeeded(), 3);
        assert_eq!(summary.rows(), 2);
        assert!(out.join("participants.csv").exists());
        assert!(!out.join("feedback.csv").exists());
    }

    #[test]
    fn timestamped_dir_uses_local_time() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(timestamped_dir(now), PathBuf::from("export_20240309_140507"));
    }
}
