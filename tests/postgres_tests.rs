//! Live PostgreSQL tests.
//!
//! Run with `DATABASE_URL` pointing at a scratch server:
//! `cargo test --features integration-tests --test postgres_tests`

#![cfg(feature = "integration-tests")]

mod support;

use study_inspect::application::erase::{ClearOutcome, Eraser};
use study_inspect::application::export::{normalize, ExportOutcome, Exporter};
use study_inspect::application::report::Reporter;
use study_inspect::domain::table::{Section, StudyTable};
use study_inspect::error::Error;
use study_inspect::port::outbound::report::{ReportQuery, ReportSource};
use study_inspect::port::outbound::store::TableStore;
use study_inspect::testkit::prompt::ScriptedPrompt;
use support::seed::StudyDb;

macro_rules! study_db {
    () => {
        match StudyDb::create() {
            Some(db) => db,
            None => {
                eprintln!("DATABASE_URL not set; skipping");
                return;
            }
        }
    };
}

const PARTICIPANTS: &str = "
    INSERT INTO participants VALUES
        ('p1', 'A', 'control',   1, '2024-01-05T10:00:00Z', '2024-01-05T10:10:00Z'),
        ('p2', 'A', 'treatment', 2, '2024-01-05T11:00:00Z', '2024-01-05T11:20:00Z'),
        ('p3', 'B', 'control',   1, '2024-01-05 12:00:00',  NULL),
        ('p4', NULL, NULL,       NULL, '20240105',          '20240106');
";

#[test]
fn skill_breakdown_orders_by_count_then_label() {
    let mut db = study_db!();
    db.seed(PARTICIPANTS);

    let set = db.store.fetch(ReportQuery::ParticipantsBySkill).unwrap();

    assert_eq!(set.headers, vec!["skill_level", "n"]);
    let (first, second) = if db.sorts_before("(null)", "B") {
        ("(null)", "B")
    } else {
        ("B", "(null)")
    };
    assert_eq!(
        set.rows,
        vec![vec!["A", "2"], vec![first, "1"], vec![second, "1"]]
    );
}

#[test]
fn durations_cover_only_castable_finished_rows() {
    let mut db = study_db!();
    db.seed(PARTICIPANTS);

    let average = db.store.fetch(ReportQuery::DurationAverage).unwrap();
    assert_eq!(average.rows, vec![vec!["2", "900.00"]]);

    let mut seconds = db.store.duration_seconds().unwrap();
    seconds.sort_by(f64::total_cmp);
    assert_eq!(seconds, vec![600.0, 1200.0]);
}

#[test]
fn uncastable_timestamp_is_a_typed_error() {
    let mut db = study_db!();
    db.seed(
        "INSERT INTO participants (participant_id, started_at, ended_at)
         VALUES ('p1', '2024-01-05T10:00:00Z', 'late-ish');",
    );

    let err = db.store.fetch(ReportQuery::DurationAverage).unwrap_err();
    assert!(matches!(err, Error::TimestampCast(_)), "{err}");

    // The failed statement does not poison the connection.
    let total = db.store.fetch(ReportQuery::TotalParticipants).unwrap();
    assert_eq!(total.rows, vec![vec!["1"]]);
}

#[test]
fn pass_rate_prefers_test_counts_over_status() {
    let mut db = study_db!();
    db.seed(
        "INSERT INTO code_submissions (participant_id, status, tests_total, tests_passed, time_taken_ms) VALUES
            ('p1', 'fail',   3, 3, 1000),
            ('p1', 'passed', 3, 2, 2000),
            ('p2', 'PASSED', NULL, NULL, NULL),
            ('p3', 'error',  NULL, NULL, 4001);",
    );

    let rate = db.store.fetch(ReportQuery::SubmissionPassRate).unwrap();
    assert_eq!(rate.rows, vec![vec!["4", "2", "50.00"]]);

    let times = db.store.fetch(ReportQuery::SubmissionTimeStats).unwrap();
    assert_eq!(times.rows, vec![vec!["3", "2334", "1000", "4001"]]);
}

#[test]
fn feedback_means_by_skill_join_participants() {
    let mut db = study_db!();
    db.seed(PARTICIPANTS);
    db.seed(
        "INSERT INTO feedback (participant_id, snippet_id, length, jargon, sentence_structure,
                               vocabulary, intrinsic_load, extraneous_load, germane_load, authoritativeness)
         VALUES ('p1', 1, 4, 2, 3, 3, 5, 1, 4, 4),
                ('p2', 2, 5, 3, 3, 4, 4, 2, 4, 5),
                ('zz', 2, 1, 1, 1, 1, 1, 1, 1, 1);",
    );

    let set = db.store.fetch(ReportQuery::FeedbackBySkill).unwrap();
    assert_eq!(set.headers.len(), 10);
    assert_eq!(&set.rows[0][..3], &["A", "2", "4.50"]);
    assert_eq!(&set.rows[1][..3], &["(null)", "1", "1.00"]);
}

#[test]
fn report_renders_every_section() {
    let mut db = study_db!();
    db.seed(PARTICIPANTS);
    db.seed("INSERT INTO events (participant_id, event_type) VALUES ('p1', 'run'), ('p1', 'run'), ('p2', 'edit');");

    let mut out = Vec::new();
    Reporter::new(&mut db.store, &mut out).run(Section::All).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("=== Participants by skill_level ==="));
    assert!(text.contains("Median duration (seconds): 900\n"));
    assert!(text.contains("=== Submission time stats (ms) ==="));
    assert!(text.contains("=== Feedback (overall means) ==="));
    assert!(text.contains("run        | 2"), "{text}");
    assert!(!text.contains("skipped"), "{text}");
}

#[test]
fn export_round_trips_through_csv() {
    let mut db = study_db!();
    db.seed(PARTICIPANTS);
    let dir = tempfile::tempdir().unwrap();

    let dump = db.store.dump(StudyTable::Participants).unwrap();
    let outcome = Exporter::new(&mut db.store)
        .export_table(StudyTable::Participants, dir.path())
        .unwrap();
    assert_eq!(outcome.rows(), 4);
    let ExportOutcome::Written { path, .. } = outcome else {
        panic!("expected a file");
    };

    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(
        headers,
        vec![
            "participant_id",
            "skill_level",
            "intervention_type",
            "snippet_id",
            "started_at",
            "ended_at"
        ]
    );
    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();
    assert_eq!(rows, normalize(&dump));
    assert_eq!(rows[3][1], "");
}

#[test]
fn exported_timestamps_are_iso() {
    let mut db = study_db!();
    db.seed("INSERT INTO events (participant_id, event_type, created_at) VALUES ('p1', 'run', '2024-01-05 12:00:00+00');");

    let dump = db.store.dump(StudyTable::Events).unwrap();
    let rows = normalize(&dump);
    let created = dump
        .columns
        .iter()
        .position(|c| c.name == "created_at")
        .unwrap();
    assert!(rows[0][created].starts_with("2024-01-05T"), "{}", rows[0][created]);
}

#[test]
fn empty_table_exports_nothing() {
    let mut db = study_db!();
    let dir = tempfile::tempdir().unwrap();

    let outcome = Exporter::new(&mut db.store)
        .export_table(StudyTable::Feedback, dir.path())
        .unwrap();

    assert_eq!(outcome, ExportOutcome::Empty);
    assert!(!dir.path().join("feedback.csv").exists());
}

#[test]
fn clear_requires_exact_confirmation() {
    let mut db = study_db!();
    db.seed(PARTICIPANTS);

    let mut refuse = ScriptedPrompt::answering("delete");
    let outcome = Eraser::new(&mut db.store, &mut refuse)
        .clear(StudyTable::Participants, |_| {})
        .unwrap();
    assert_eq!(outcome, ClearOutcome::Cancelled { rows: 4 });
    assert_eq!(db.store.count_rows(StudyTable::Participants).unwrap(), 4);

    let mut confirm = ScriptedPrompt::answering("DELETE");
    let outcome = Eraser::new(&mut db.store, &mut confirm)
        .clear(StudyTable::Participants, |_| {})
        .unwrap();
    assert_eq!(outcome, ClearOutcome::Cleared { deleted: 4 });
    assert_eq!(db.store.count_rows(StudyTable::Participants).unwrap(), 0);
}
