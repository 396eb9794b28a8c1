//! Canned report source.

use std::collections::HashMap;

use crate::domain::result_set::ResultSet;
use crate::error::{Error, Result};
use crate::port::outbound::report::{ReportQuery, ReportSource};

/// Returns empty results unless told otherwise and records every call.
#[derive(Debug, Default)]
pub struct ScriptedReportSource {
    results: HashMap<ReportQuery, ResultSet>,
    failures: HashMap<ReportQuery, Error>,
    durations: Vec<f64>,
    duration_failure: Option<Error>,
    fetched: Vec<ReportQuery>,
    duration_calls: usize,
}

impl ScriptedReportSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `set` for `query`.
    pub fn with_result(mut self, query: ReportQuery, set: ResultSet) -> Self {
        self.results.insert(query, set);
        self
    }

    /// Fail `query` once with `error`.
    pub fn failing(mut self, query: ReportQuery, error: Error) -> Self {
        self.failures.insert(query, error);
        self
    }

    pub fn with_durations(mut self, seconds: Vec<f64>) -> Self {
        self.durations = seconds;
        self
    }

    /// Fail the per-row duration fetch once with `error`.
    pub fn failing_durations(mut self, error: Error) -> Self {
        self.duration_failure = Some(error);
        self
    }

    /// Queries fetched so far, in order.
    pub fn fetched(&self) -> &[ReportQuery] {
        &self.fetched
    }

    pub fn duration_calls(&self) -> usize {
        self.duration_calls
    }
}

impl ReportSource for ScriptedReportSource {
    fn fetch(&mut self, query: ReportQuery) -> Result<ResultSet> {
        self.fetched.push(query);
        if let Some(error) = self.failures.remove(&query) {
            return Err(error);
        }
        Ok(self.results.get(&query).cloned().unwrap_or_default())
    }

    fn duration_seconds(&mut self) -> Result<Vec<f64>> {
        self.duration_calls += 1;
        match self.duration_failure.take() {
            Some(error) => Err(error),
            None => Ok(self.durations.clone()),
        }
    }
}
