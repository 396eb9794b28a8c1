//! Section reports: fixed batteries of aggregate queries rendered as tables.
//!
//! Every query failure is local to the query that raised it. The duration
//! statistics carry their own notice when timestamps cannot be cast; any other
//! failure prints a one-line skip notice. Nothing here aborts the run.

mod table;

use std::io::Write;

use tracing::{debug, warn};

use crate::domain::stats::median;
use crate::domain::table::Section;
use crate::error::{Error, Result};
use crate::port::outbound::report::{ReportQuery, ReportSource};

pub use table::{render_table, NO_ROWS};

/// Notice printed when the duration statistics hit an uncastable timestamp.
pub const DURATION_SKIPPED: &str = "(Duration stats skipped – couldn't cast timestamps)";

const PARTICIPANT_QUERIES: &[ReportQuery] = &[
    ReportQuery::TotalParticipants,
    ReportQuery::ParticipantsBySkill,
    ReportQuery::ParticipantsByIntervention,
    ReportQuery::ParticipantsBySnippet,
    ReportQuery::ParticipantsBySkillAndIntervention,
    ReportQuery::ParticipantsBySkillAndSnippet,
    ReportQuery::FinishedParticipants,
];

const SUBMISSION_QUERIES: &[ReportQuery] = &[
    ReportQuery::TotalSubmissions,
    ReportQuery::SubmissionsByStatus,
    ReportQuery::SubmissionPassRate,
    ReportQuery::SubmissionTimeStats,
];

const FEEDBACK_QUERIES: &[ReportQuery] = &[
    ReportQuery::FeedbackMeans,
    ReportQuery::FeedbackByIntervention,
    ReportQuery::FeedbackBySkill,
    ReportQuery::FeedbackBySnippet,
];

const EVENT_QUERIES: &[ReportQuery] = &[
    ReportQuery::EventsByType,
    ReportQuery::TopParticipantsByEvents,
];

/// Runs report sections against a [`ReportSource`], writing tables to `out`.
pub struct Reporter<'a, S, W> {
    source: &'a mut S,
    out: &'a mut W,
}

impl<'a, S: ReportSource, W: Write> Reporter<'a, S, W> {
    pub fn new(source: &'a mut S, out: &'a mut W) -> Self {
        Self { source, out }
    }

    /// Print every section included by `section`, in fixed order.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `out` fails.
    pub fn run(&mut self, section: Section) -> Result<()> {
        if section.includes(Section::Participants) {
            self.participants()?;
        }
        if section.includes(Section::Submissions) {
            self.battery(SUBMISSION_QUERIES)?;
        }
        if section.includes(Section::Feedback) {
            self.battery(FEEDBACK_QUERIES)?;
        }
        if section.includes(Section::Events) {
            self.battery(EVENT_QUERIES)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn participants(&mut self) -> Result<()> {
        self.battery(PARTICIPANT_QUERIES)?;
        self.durations()
    }

    fn battery(&mut self, queries: &[ReportQuery]) -> Result<()> {
        for query in queries {
            self.table(*query)?;
        }
        Ok(())
    }

    fn table(&mut self, query: ReportQuery) -> Result<()> {
        debug!(query = ?query, "running report query");
        match self.source.fetch(query) {
            Ok(set) => render_table(&mut *self.out, query.title(), &set)?,
            Err(e) => self.skipped(query.title(), &e)?,
        }
        Ok(())
    }

    fn durations(&mut self) -> Result<()> {
        let query = ReportQuery::DurationAverage;
        let average = match self.source.fetch(query) {
            Ok(set) => set,
            Err(e) => return self.skipped(query.title(), &e),
        };
        render_table(&mut *self.out, query.title(), &average)?;

        let seconds = match self.source.duration_seconds() {
            Ok(seconds) => seconds,
            Err(e) => return self.skipped("Median duration", &e),
        };
        match median(&seconds) {
            // Truncates toward zero.
            Some(m) => writeln!(self.out, "Median duration (seconds): {}", m.trunc() as i64)?,
            None => writeln!(self.out, "Median duration (seconds): n/a")?,
        }
        Ok(())
    }

    fn skipped(&mut self, title: &str, error: &Error) -> Result<()> {
        warn!(query = title, error = %error, "statistic skipped");
        writeln!(self.out)?;
        match error {
            Error::TimestampCast(_) => writeln!(self.out, "{DURATION_SKIPPED}")?,
            _ => writeln!(self.out, "({title} skipped: {error})")?,
        }
        Ok(())
    }
}
