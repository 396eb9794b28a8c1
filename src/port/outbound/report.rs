//! Read-side reporting/query ports.

use crate::domain::result_set::ResultSet;
use crate::error::Result;

/// One aggregate query of the report battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportQuery {
    TotalParticipants,
    ParticipantsBySkill,
    ParticipantsByIntervention,
    ParticipantsBySnippet,
    ParticipantsBySkillAndIntervention,
    ParticipantsBySkillAndSnippet,
    FinishedParticipants,
    DurationAverage,
    TotalSubmissions,
    SubmissionsByStatus,
    SubmissionPassRate,
    SubmissionTimeStats,
    FeedbackMeans,
    FeedbackByIntervention,
    FeedbackBySkill,
    FeedbackBySnippet,
    EventsByType,
    TopParticipantsByEvents,
}

impl ReportQuery {
    /// Table title printed above the result.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TotalParticipants => "Total participants that started",
            Self::ParticipantsBySkill => "Participants by skill_level",
            Self::ParticipantsByIntervention => "Participants by intervention_type",
            Self::ParticipantsBySnippet => "Participants by snippet_id",
            Self::ParticipantsBySkillAndIntervention => {
                "Participants by (skill_level, intervention_type)"
            }
            Self::ParticipantsBySkillAndSnippet => "Participants by (skill_level, snippet_id)",
            Self::FinishedParticipants => {
                "Participants who finished (started_at AND ended_at present)"
            }
            Self::DurationAverage => {
                "Duration (avg seconds) for finished (castable ISO timestamps only)"
            }
            Self::TotalSubmissions => "Total code submissions",
            Self::SubmissionsByStatus => "Submission counts by status",
            Self::SubmissionPassRate => "Overall submission pass rate",
            Self::SubmissionTimeStats => "Submission time stats (ms)",
            Self::FeedbackMeans => "Feedback (overall means)",
            Self::FeedbackByIntervention => "Feedback means by intervention_type",
            Self::FeedbackBySkill => "Feedback means by skill_level",
            Self::FeedbackBySnippet => "Feedback means by snippet_id",
            Self::EventsByType => "Events by type",
            Self::TopParticipantsByEvents => "Top 50 participants by event count",
        }
    }
}

/// Source of report results.
///
/// Implementations execute each query exactly once; failures are returned,
/// never retried.
pub trait ReportSource {
    /// Run one aggregate query.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimestampCast`](crate::error::Error::TimestampCast)
    /// when [`ReportQuery::DurationAverage`] hits a value Postgres cannot cast,
    /// and [`Error::Query`](crate::error::Error::Query) for any other failure.
    fn fetch(&mut self, query: ReportQuery) -> Result<ResultSet>;

    /// Per-participant durations in seconds for the castable, finished subset.
    ///
    /// # Errors
    ///
    /// Same contract as [`ReportQuery::DurationAverage`].
    fn duration_seconds(&mut self) -> Result<Vec<f64>>;
}
