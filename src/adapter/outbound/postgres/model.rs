//! Row types decoded from raw report queries.
//!
//! Column names in the SQL are aliased to these field names; printed headers
//! come from the query definitions.

use diesel::prelude::*;
use diesel::sql_types::{BigInt, Double, Nullable, Numeric, Text};
use rust_decimal::Decimal;

use crate::domain::result_set::{cell, TableRow};

#[derive(QueryableByName, Debug, Clone)]
pub struct CountRow {
    #[diesel(sql_type = BigInt)]
    pub n: i64,
}

impl TableRow for CountRow {
    fn cells(&self) -> Vec<String> {
        vec![self.n.to_string()]
    }
}

#[derive(QueryableByName, Debug, Clone)]
pub struct LabelCountRow {
    #[diesel(sql_type = Nullable<Text>)]
    pub label: Option<String>,
    #[diesel(sql_type = BigInt)]
    pub n: i64,
}

impl TableRow for LabelCountRow {
    fn cells(&self) -> Vec<String> {
        vec![cell(self.label.as_ref()), self.n.to_string()]
    }
}

#[derive(QueryableByName, Debug, Clone)]
pub struct PairCountRow {
    #[diesel(sql_type = Text)]
    pub first: String,
    #[diesel(sql_type = Text)]
    pub second: String,
    #[diesel(sql_type = BigInt)]
    pub n: i64,
}

impl TableRow for PairCountRow {
    fn cells(&self) -> Vec<String> {
        vec![self.first.clone(), self.second.clone(), self.n.to_string()]
    }
}

#[derive(QueryableByName, Debug, Clone)]
pub struct DurationRow {
    #[diesel(sql_type = BigInt)]
    pub n_durations: i64,
    #[diesel(sql_type = Nullable<Numeric>)]
    pub avg_secs: Option<Decimal>,
}

impl TableRow for DurationRow {
    fn cells(&self) -> Vec<String> {
        vec![self.n_durations.to_string(), cell(self.avg_secs.as_ref())]
    }
}

#[derive(QueryableByName, Debug, Clone)]
pub struct SecondsRow {
    #[diesel(sql_type = Nullable<Double>)]
    pub secs: Option<f64>,
}

#[derive(QueryableByName, Debug, Clone)]
pub struct PassRateRow {
    #[diesel(sql_type = BigInt)]
    pub total_rows: i64,
    #[diesel(sql_type = BigInt)]
    pub passed_rows: i64,
    #[diesel(sql_type = Nullable<Numeric>)]
    pub pass_rate_percent: Option<Decimal>,
}

impl TableRow for PassRateRow {
    fn cells(&self) -> Vec<String> {
        vec![
            self.total_rows.to_string(),
            self.passed_rows.to_string(),
            cell(self.pass_rate_percent.as_ref()),
        ]
    }
}

#[derive(QueryableByName, Debug, Clone)]
pub struct TimeStatsRow {
    #[diesel(sql_type = BigInt)]
    pub n_with_time: i64,
    #[diesel(sql_type = Nullable<Numeric>)]
    pub avg_ms: Option<Decimal>,
    #[diesel(sql_type = Nullable<BigInt>)]
    pub min_ms: Option<i64>,
    #[diesel(sql_type = Nullable<BigInt>)]
    pub max_ms: Option<i64>,
}

impl TableRow for TimeStatsRow {
    fn cells(&self) -> Vec<String> {
        vec![
            self.n_with_time.to_string(),
            cell(self.avg_ms.as_ref()),
            cell(self.min_ms.as_ref()),
            cell(self.max_ms.as_ref()),
        ]
    }
}

/// Rounded means of the eight feedback ratings.
#[derive(QueryableByName, Debug, Clone)]
pub struct FeedbackMeansRow {
    #[diesel(sql_type = Nullable<Numeric>)]
    pub length: Option<Decimal>,
    #[diesel(sql_type = Nullable<Numeric>)]
    pub jargon: Option<Decimal>,
    #[diesel(sql_type = Nullable<Numeric>)]
    pub sentence_structure: Option<Decimal>,
    #[diesel(sql_type = Nullable<Numeric>)]
    pub vocabulary: Option<Decimal>,
    #[diesel(sql_type = Nullable<Numeric>)]
    pub intrinsic_load: Option<Decimal>,
    #[diesel(sql_type = Nullable<Numeric>)]
    pub extraneous_load: Option<Decimal>,
    #[diesel(sql_type = Nullable<Numeric>)]
    pub germane_load: Option<Decimal>,
    #[diesel(sql_type = Nullable<Numeric>)]
    pub authoritativeness: Option<Decimal>,
}

impl TableRow for FeedbackMeansRow {
    fn cells(&self) -> Vec<String> {
        [
            &self.length,
            &self.jargon,
            &self.sentence_structure,
            &self.vocabulary,
            &self.intrinsic_load,
            &self.extraneous_load,
            &self.germane_load,
            &self.authoritativeness,
        ]
        .into_iter()
        .map(|v| cell(v.as_ref()))
        .collect()
    }
}

#[derive(QueryableByName, Debug, Clone)]
pub struct FeedbackGroupRow {
    #[diesel(sql_type = Text)]
    pub label: String,
    #[diesel(sql_type = BigInt)]
    pub n: i64,
    #[diesel(embed)]
    pub means: FeedbackMeansRow,
}

impl TableRow for FeedbackGroupRow {
    fn cells(&self) -> Vec<String> {
        let mut cells = vec![self.label.clone(), self.n.to_string()];
        cells.extend(self.means.cells());
        cells
    }
}

/// One column from `information_schema.columns`.
#[derive(QueryableByName, Debug, Clone)]
pub struct ColumnRow {
    #[diesel(sql_type = Text)]
    pub column_name: String,
    #[diesel(sql_type = Text)]
    pub data_type: String,
}

/// A table row as a JSON array of text values.
#[derive(QueryableByName, Debug, Clone)]
pub struct JsonCellsRow {
    #[diesel(sql_type = Text)]
    pub cells: String,
}
