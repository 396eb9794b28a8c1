//! Clearing a whitelisted table behind a typed confirmation.

use tracing::info;

use crate::domain::table::StudyTable;
use crate::error::Result;
use crate::port::outbound::prompt::Confirmation;
use crate::port::outbound::store::TableStore;

/// Literal the operator must type to confirm a clear.
pub const CONFIRM_PHRASE: &str = "DELETE";

/// Result of a clear request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The table had no rows; the operator was not asked.
    AlreadyEmpty,
    /// The operator typed something other than [`CONFIRM_PHRASE`].
    Cancelled { rows: i64 },
    /// Every row was deleted.
    Cleared { deleted: usize },
}

/// Deletes all rows of a table once the operator confirms.
pub struct Eraser<'a, S, P> {
    store: &'a mut S,
    prompt: &'a mut P,
}

impl<'a, S: TableStore, P: Confirmation> Eraser<'a, S, P> {
    pub fn new(store: &'a mut S, prompt: &'a mut P) -> Self {
        Self { store, prompt }
    }

    /// Clear `table`.
    ///
    /// `warn` is shown before the prompt with the current row count.
    ///
    /// # Errors
    ///
    /// Returns an error if counting, prompting or deleting fails.
    pub fn clear(&mut self, table: StudyTable, warn: impl FnOnce(i64)) -> Result<ClearOutcome> {
        let rows = self.store.count_rows(table)?;
        if rows == 0 {
            return Ok(ClearOutcome::AlreadyEmpty);
        }

        warn(rows);
        let answer = self.prompt.ask(&format!(
            "Type {CONFIRM_PHRASE} to remove all rows from {table}"
        ))?;
        if answer.trim() != CONFIRM_PHRASE {
            info!(table = %table, "clear cancelled");
            return Ok(ClearOutcome::Cancelled { rows });
        }

        let deleted = self.store.delete_all(table)?;
        info!(table = %table, deleted, "table cleared");
        Ok(ClearOutcome::Cleared { deleted })
    }
}
