//! Throwaway study schema on a live PostgreSQL server.

use std::time::{SystemTime, UNIX_EPOCH};

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Text};
use study_inspect::adapter::outbound::postgres::connection::establish;
use study_inspect::adapter::outbound::postgres::PgStudyStore;

const DDL: &str = "
    CREATE TABLE participants (
        participant_id    TEXT PRIMARY KEY,
        skill_level       TEXT,
        intervention_type TEXT,
        snippet_id        INTEGER,
        started_at        TEXT,
        ended_at          TEXT
    );
    CREATE TABLE code_submissions (
        id             SERIAL PRIMARY KEY,
        participant_id TEXT,
        status         TEXT,
        tests_total    INTEGER,
        tests_passed   INTEGER,
        time_taken_ms  INTEGER
    );
    CREATE TABLE feedback (
        id                 SERIAL PRIMARY KEY,
        participant_id     TEXT,
        snippet_id         INTEGER,
        length             INTEGER,
        jargon             INTEGER,
        sentence_structure INTEGER,
        vocabulary         INTEGER,
        intrinsic_load     INTEGER,
        extraneous_load    INTEGER,
        germane_load       INTEGER,
        authoritativeness  INTEGER
    );
    CREATE TABLE events (
        id             SERIAL PRIMARY KEY,
        participant_id TEXT,
        event_type     TEXT NOT NULL,
        created_at     TIMESTAMPTZ
    );
";

/// A private schema holding the four study tables, dropped on drop.
///
/// The store's connection has `search_path` pointed at the schema, so every
/// query sees only the seeded data.
pub struct StudyDb {
    pub store: PgStudyStore,
    schema: String,
}

impl StudyDb {
    /// Create an empty schema; `None` when `DATABASE_URL` is unset.
    pub fn create() -> Option<Self> {
        let _ = dotenvy::dotenv();
        let url = std::env::var("DATABASE_URL").ok()?;
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let schema = format!("study_inspect_test_{}_{nanos}", std::process::id());

        let mut conn = establish(&url).expect("connect to DATABASE_URL");
        conn.batch_execute(&format!(
            "CREATE SCHEMA {schema}; SET search_path TO {schema};"
        ))
        .expect("create test schema");
        conn.batch_execute(DDL).expect("create study tables");

        Some(Self {
            store: PgStudyStore::new(conn),
            schema,
        })
    }

    /// Run seed statements inside the schema.
    pub fn seed(&mut self, sql: &str) {
        self.store
            .connection()
            .batch_execute(sql)
            .expect("seed study tables");
    }
}

#[derive(QueryableByName)]
struct LabelOrder {
    #[diesel(sql_type = Bool)]
    before: bool,
}

impl StudyDb {
    /// Whether `a` sorts before `b` under the database's default collation.
    pub fn sorts_before(&mut self, a: &str, b: &str) -> bool {
        diesel::sql_query("SELECT $1::text < $2::text AS before")
            .bind::<Text, _>(a)
            .bind::<Text, _>(b)
            .get_result::<LabelOrder>(self.store.connection())
            .expect("compare labels")
            .before
    }
}

impl Drop for StudyDb {
    fn drop(&mut self) {
        let _ = self
            .store
            .connection()
            .batch_execute(&format!("DROP SCHEMA IF EXISTS {} CASCADE", self.schema));
    }
}
