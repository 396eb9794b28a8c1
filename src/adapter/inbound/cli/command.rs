//! Command-line interface definitions.
//!
//! A single flat command: at most one action runs per invocation. Table names
//! stay plain strings here and are validated against the whitelist before
//! any connection is opened.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::table::{Section, StudyTable};
use crate::error::Result;

/// Report on, export, or clear the study database
#[derive(Parser, Debug)]
#[command(name = "study-inspect")]
#[command(version)]
pub struct Cli {
    /// PostgreSQL connection URL
    #[arg(long = "db", visible_alias = "database-url", env = "DATABASE_URL")]
    pub db: Option<String>,

    /// Report section to print
    #[arg(long, value_enum)]
    pub section: Option<Section>,

    /// Delete every row of TABLE after typed confirmation
    ///
    /// Reads the confirmation from an interactive terminal; piped input is refused.
    #[arg(long, value_name = "TABLE")]
    pub clear: Option<String>,

    /// Export TABLE to <output-dir>/<TABLE>.csv
    #[arg(long, value_name = "TABLE")]
    pub export: Option<String>,

    /// Export every table into a timestamped directory
    #[arg(long)]
    pub export_all: bool,

    /// Directory for exported CSV files
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level (overrides the configuration file)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

/// The one action an invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Report(Section),
    Clear(StudyTable),
    Export(StudyTable),
    ExportAll,
}

impl Cli {
    /// Resolve the requested action.
    ///
    /// An explicit `--section` wins, then `--clear`, `--export` and
    /// `--export-all`; with none given the full report runs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTable`](crate::error::Error::UnknownTable) when
    /// the selected table is not whitelisted.
    pub fn action(&self) -> Result<Action> {
        if let Some(section) = self.section {
            return Ok(Action::Report(section));
        }
        if let Some(name) = &self.clear {
            return Ok(Action::Clear(name.parse()?));
        }
        if let Some(name) = &self.export {
            return Ok(Action::Export(name.parse()?));
        }
        if self.export_all {
            return Ok(Action::ExportAll);
        }
        Ok(Action::Report(Section::All))
    }
}
