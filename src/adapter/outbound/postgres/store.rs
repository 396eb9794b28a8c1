//! Postgres-backed report source and table store.
//!
//! Implements [`ReportSource`] and [`TableStore`] over a single Diesel
//! connection. Every statement runs on its own in autocommit mode.

use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel::sql_types::Text;
use diesel::PgConnection;
use tracing::debug;

use super::connection::establish;
use super::model::{
    ColumnRow, CountRow, DurationRow, FeedbackGroupRow, FeedbackMeansRow, JsonCellsRow,
    LabelCountRow, PairCountRow, PassRateRow, SecondsRow, TimeStatsRow,
};
use super::sql;
use crate::domain::result_set::{ResultSet, TableRow};
use crate::domain::table::StudyTable;
use crate::domain::timestamp::{ColumnKind, CASTABLE_PATTERN};
use crate::error::{Error, Result};
use crate::port::outbound::report::{ReportQuery, ReportSource};
use crate::port::outbound::store::{Column, TableDump, TableStore};

const MEAN_HEADERS: [&str; 8] = [
    "avg_length",
    "avg_jargon",
    "avg_sentence_structure",
    "avg_vocabulary",
    "avg_intrinsic_load",
    "avg_extraneous_load",
    "avg_germane_load",
    "avg_authoritativeness",
];

/// Study database accessed through one Postgres connection.
pub struct PgStudyStore {
    conn: PgConnection,
}

impl PgStudyStore {
    /// Connect to `database_url`.
    ///
    /// # Errors
    /// Returns [`Error::Connection`] if the connection cannot be opened.
    pub fn connect(database_url: &str) -> Result<Self> {
        Ok(Self::new(establish(database_url)?))
    }

    #[must_use]
    pub fn new(conn: PgConnection) -> Self {
        Self { conn }
    }

    /// Underlying connection, for callers that need raw access.
    pub fn connection(&mut self) -> &mut PgConnection {
        &mut self.conn
    }

    fn table<R: TableRow + QueryableByName<Pg> + 'static>(
        &mut self,
        sql_text: &str,
        headers: &[&str],
    ) -> std::result::Result<ResultSet, DieselError> {
        let rows = diesel::sql_query(sql_text).load::<R>(&mut self.conn)?;
        Ok(ResultSet::from_rows(headers, &rows))
    }

    fn feedback_groups(
        &mut self,
        sql_text: &str,
        label: &str,
    ) -> std::result::Result<ResultSet, DieselError> {
        let mut headers = vec![label, "n"];
        headers.extend(MEAN_HEADERS);
        self.table::<FeedbackGroupRow>(sql_text, &headers)
    }

    fn run(&mut self, query: ReportQuery) -> std::result::Result<ResultSet, DieselError> {
        use ReportQuery as Q;

        match query {
            Q::TotalParticipants => {
                self.table::<CountRow>(sql::TOTAL_PARTICIPANTS, &["total_participants"])
            }
            Q::ParticipantsBySkill => {
                self.table::<LabelCountRow>(sql::PARTICIPANTS_BY_SKILL, &["skill_level", "n"])
            }
            Q::ParticipantsByIntervention => self.table::<LabelCountRow>(
                sql::PARTICIPANTS_BY_INTERVENTION,
                &["intervention_type", "n"],
            ),
            Q::ParticipantsBySnippet => {
                self.table::<LabelCountRow>(sql::PARTICIPANTS_BY_SNIPPET, &["snippet_id", "n"])
            }
            Q::ParticipantsBySkillAndIntervention => self.table::<PairCountRow>(
                sql::PARTICIPANTS_BY_SKILL_AND_INTERVENTION,
                &["skill_level", "intervention_type", "n"],
            ),
            Q::ParticipantsBySkillAndSnippet => self.table::<PairCountRow>(
                sql::PARTICIPANTS_BY_SKILL_AND_SNIPPET,
                &["skill_level", "snippet_id", "n"],
            ),
            Q::FinishedParticipants => {
                self.table::<CountRow>(sql::FINISHED_PARTICIPANTS, &["finished"])
            }
            Q::DurationAverage => {
                let rows = diesel::sql_query(sql::DURATION_AVERAGE)
                    .bind::<Text, _>(CASTABLE_PATTERN)
                    .load::<DurationRow>(&mut self.conn)?;
                Ok(ResultSet::from_rows(&["n_durations", "avg_secs"], &rows))
            }
            Q::TotalSubmissions => {
                self.table::<CountRow>(sql::TOTAL_SUBMISSIONS, &["total_submissions"])
            }
            Q::SubmissionsByStatus => {
                self.table::<LabelCountRow>(sql::SUBMISSIONS_BY_STATUS, &["status", "n"])
            }
            Q::SubmissionPassRate => self.table::<PassRateRow>(
                sql::SUBMISSION_PASS_RATE,
                &["total_rows", "passed_rows", "pass_rate_percent"],
            ),
            Q::SubmissionTimeStats => self.table::<TimeStatsRow>(
                sql::SUBMISSION_TIME_STATS,
                &["n_with_time", "avg_ms", "min_ms", "max_ms"],
            ),
            Q::FeedbackMeans => self.table::<FeedbackMeansRow>(sql::FEEDBACK_MEANS, &MEAN_HEADERS),
            Q::FeedbackByIntervention => {
                self.feedback_groups(sql::FEEDBACK_BY_INTERVENTION, "intervention_type")
            }
            Q::FeedbackBySkill => self.feedback_groups(sql::FEEDBACK_BY_SKILL, "skill_level"),
            Q::FeedbackBySnippet => self.feedback_groups(sql::FEEDBACK_BY_SNIPPET, "snippet_id"),
            Q::EventsByType => {
                self.table::<LabelCountRow>(sql::EVENTS_BY_TYPE, &["event_type", "n"])
            }
            Q::TopParticipantsByEvents => self.table::<LabelCountRow>(
                sql::TOP_PARTICIPANTS_BY_EVENTS,
                &["participant_id", "n"],
            ),
        }
    }
}

/// Duration queries report cast failures separately from other errors.
fn duration_error(title: &'static str, source: DieselError) -> Error {
    match source {
        DieselError::DatabaseError(_, info) => Error::TimestampCast(info.message().to_string()),
        source => Error::Query { title, source },
    }
}

impl ReportSource for PgStudyStore {
    fn fetch(&mut self, query: ReportQuery) -> Result<ResultSet> {
        debug!(title = query.title(), "running report query");
        let result = self.run(query);
        match query {
            ReportQuery::DurationAverage => result.map_err(|e| duration_error(query.title(), e)),
            _ => result.map_err(|source| Error::Query {
                title: query.title(),
                source,
            }),
        }
    }

    fn duration_seconds(&mut self) -> Result<Vec<f64>> {
        let rows = diesel::sql_query(sql::DURATION_SECONDS)
            .bind::<Text, _>(CASTABLE_PATTERN)
            .load::<SecondsRow>(&mut self.conn)
            .map_err(|e| duration_error("Median duration", e))?;
        let seconds: Vec<f64> = rows.into_iter().filter_map(|r| r.secs).collect();
        debug!(count = seconds.len(), "loaded durations");
        Ok(seconds)
    }
}

impl TableStore for PgStudyStore {
    fn count_rows(&mut self, table: StudyTable) -> Result<i64> {
        let query = format!("SELECT COUNT(*) AS n FROM {}", sql::quote_ident(table.name()));
        let row: CountRow = diesel::sql_query(query).get_result(&mut self.conn)?;
        debug!(table = %table, rows = row.n, "counted rows");
        Ok(row.n)
    }

    fn delete_all(&mut self, table: StudyTable) -> Result<usize> {
        let query = format!("DELETE FROM {}", sql::quote_ident(table.name()));
        let deleted = diesel::sql_query(query).execute(&mut self.conn)?;
        debug!(table = %table, deleted, "deleted rows");
        Ok(deleted)
    }

    fn dump(&mut self, table: StudyTable) -> Result<TableDump> {
        let columns: Vec<ColumnRow> = diesel::sql_query(sql::TABLE_COLUMNS)
            .bind::<Text, _>(table.name())
            .load(&mut self.conn)?;
        let columns: Vec<Column> = columns
            .into_iter()
            .map(|c| Column {
                kind: ColumnKind::from_data_type(&c.data_type),
                name: c.column_name,
            })
            .collect();

        if columns.is_empty() {
            debug!(table = %table, "no columns visible in current schema");
            return Ok(TableDump::default());
        }

        let names: Vec<String> = columns.iter().map(|c| c.name.clone()).collect();
        let raw: Vec<JsonCellsRow> =
            diesel::sql_query(sql::select_as_json_cells(table.name(), &names))
                .load(&mut self.conn)?;
        let rows = raw
            .iter()
            .map(|r| serde_json::from_str::<Vec<Option<String>>>(&r.cells))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!(table = %table, columns = columns.len(), rows = rows.len(), "dumped table");
        Ok(TableDump { columns, rows })
    }
}
