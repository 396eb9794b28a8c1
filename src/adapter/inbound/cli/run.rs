//! Dispatch of the selected action against the study database.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use super::command::Action;
use super::output;
use super::prompt::TerminalPrompt;
use crate::application::erase::{ClearOutcome, Eraser};
use crate::application::export::{timestamped_dir, ExportOutcome, Exporter};
use crate::application::report::Reporter;
use crate::domain::table::{Section, StudyTable};
use crate::error::Result;
use crate::port::outbound::prompt::Confirmation;
use crate::port::outbound::report::ReportSource;
use crate::port::outbound::store::TableStore;

/// Where exports land.
#[derive(Debug, Clone, Default)]
pub struct ExportTarget {
    /// `--output-dir`, used as-is.
    pub explicit: Option<PathBuf>,
    /// Configured base directory.
    pub configured: Option<PathBuf>,
}

impl ExportTarget {
    /// Directory for a single-table export.
    #[must_use]
    pub fn single(&self) -> PathBuf {
        self.explicit
            .clone()
            .or_else(|| self.configured.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Directory for an export of every table.
    ///
    /// Without `--output-dir` a fresh timestamped directory is used, nested
    /// under the configured base when there is one.
    #[must_use]
    pub fn all(&self) -> PathBuf {
        if let Some(dir) = &self.explicit {
            return dir.clone();
        }
        let fresh = timestamped_dir(Local::now());
        match &self.configured {
            Some(base) => base.join(fresh),
            None => fresh,
        }
    }
}

/// Execute `action` and print its outcome.
///
/// # Errors
///
/// Returns an error when the action fails as a whole; per-query and
/// per-table failures are printed and do not end the run.
pub fn execute<S>(store: &mut S, action: &Action, target: &ExportTarget) -> Result<()>
where
    S: ReportSource + TableStore,
{
    match action {
        Action::Report(section) => report(store, *section),
        Action::Clear(table) => clear(store, &mut TerminalPrompt, *table),
        Action::Export(table) => export_one(store, *table, &target.single()),
        Action::ExportAll => export_all(store, &target.all()),
    }
}

fn report<S: ReportSource>(store: &mut S, section: Section) -> Result<()> {
    info!(?section, "running report");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    Reporter::new(store, &mut out).run(section)?;
    out.flush()?;
    Ok(())
}

/// Clear `table` after asking through `prompt`.
///
/// # Errors
///
/// Returns an error if counting, prompting or deleting fails.
pub fn clear<S: TableStore, P: Confirmation>(
    store: &mut S,
    prompt: &mut P,
    table: StudyTable,
) -> Result<()> {
    let outcome = Eraser::new(store, prompt).clear(table, |rows| {
        output::warning(&format!(
            "This will permanently delete {rows} rows from {table}."
        ));
    })?;

    match outcome {
        ClearOutcome::AlreadyEmpty => output::note(&format!("{table} is already empty")),
        ClearOutcome::Cancelled { .. } => output::note("Cancelled. No rows were deleted."),
        ClearOutcome::Cleared { deleted } => {
            output::success(&format!("Deleted {deleted} rows from {table}"));
        }
    }
    Ok(())
}

fn export_one<S: TableStore>(store: &mut S, table: StudyTable, dir: &Path) -> Result<()> {
    match Exporter::new(store).export_table(table, dir)? {
        ExportOutcome::Written { path, rows } => {
            output::success(&format!("Exported {rows} rows to {}", path.display()));
        }
        ExportOutcome::Empty => output::note(&format!("No data in {table}")),
    }
    Ok(())
}

fn export_all<S: TableStore>(store: &mut S, dir: &Path) -> Result<()> {
    let summary = Exporter::new(store).export_all(dir)?;

    for (table, result) in &summary.results {
        match result {
            Ok(ExportOutcome::Written { path, rows }) => {
                output::success(&format!("{table}: {rows} rows to {}", path.display()));
            }
            Ok(ExportOutcome::Empty) => output::note(&format!("No data in {table}")),
            Err(e) => output::error(&format!("{table}: {e}")),
        }
    }

    println!();
    output::success(&format!(
        "Exported {}/{} tables, {} rows total",
        summary.succeeded(),
        summary.total(),
        summary.rows()
    ));
    output::field("Directory", summary.directory.display());
    Ok(())
}
