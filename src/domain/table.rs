//! Closed sets of table names and report sections.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Tables eligible for export and clear.
///
/// Anything outside this set is rejected while parsing, so no statement is
/// ever built from an arbitrary name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudyTable {
    Participants,
    CodeSubmissions,
    Feedback,
    Events,
}

impl StudyTable {
    /// Every whitelisted table in export order.
    pub const ALL: [StudyTable; 4] = [
        StudyTable::Participants,
        StudyTable::CodeSubmissions,
        StudyTable::Feedback,
        StudyTable::Events,
    ];

    /// SQL identifier of the table.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Participants => "participants",
            Self::CodeSubmissions => "code_submissions",
            Self::Feedback => "feedback",
            Self::Events => "events",
        }
    }

    /// Comma-separated list of valid names, for error messages.
    #[must_use]
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for StudyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StudyTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| Error::UnknownTable { name: s.to_string() })
    }
}

/// Report section selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Section {
    Participants,
    Submissions,
    Feedback,
    Events,
    #[default]
    All,
}

impl Section {
    /// Whether this selector includes `other`.
    #[must_use]
    pub fn includes(self, other: Section) -> bool {
        self == Section::All || self == other
    }
}
