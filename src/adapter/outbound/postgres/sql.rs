//! SQL text of the report battery.
//!
//! Label columns are cast to text before `COALESCE` so non-text identifiers
//! (integer snippet ids) group the same way as text ones.

pub const TOTAL_PARTICIPANTS: &str = "SELECT COUNT(*) AS n FROM participants";

pub const PARTICIPANTS_BY_SKILL: &str = "
    SELECT COALESCE(skill_level::text, '(null)') AS label, COUNT(*) AS n
    FROM participants
    GROUP BY 1
    ORDER BY n DESC, label";

pub const PARTICIPANTS_BY_INTERVENTION: &str = "
    SELECT COALESCE(intervention_type::text, '(null)') AS label, COUNT(*) AS n
    FROM participants
    GROUP BY 1
    ORDER BY n DESC, label";

pub const PARTICIPANTS_BY_SNIPPET: &str = "
    SELECT COALESCE(snippet_id::text, '(null)') AS label, COUNT(*) AS n
    FROM participants
    GROUP BY 1
    ORDER BY n DESC, label";

pub const PARTICIPANTS_BY_SKILL_AND_INTERVENTION: &str = "
    SELECT COALESCE(skill_level::text, '(null)')       AS first,
           COALESCE(intervention_type::text, '(null)') AS second,
           COUNT(*)                                    AS n
    FROM participants
    GROUP BY 1, 2
    ORDER BY 1, 2";

pub const PARTICIPANTS_BY_SKILL_AND_SNIPPET: &str = "
    SELECT COALESCE(skill_level::text, '(null)') AS first,
           COALESCE(snippet_id::text, '(null)')  AS second,
           COUNT(*)                              AS n
    FROM participants
    GROUP BY 1, 2
    ORDER BY 1, 2";

pub const FINISHED_PARTICIPANTS: &str = "
    SELECT COUNT(*) AS n
    FROM participants
    WHERE started_at IS NOT NULL
      AND ended_at IS NOT NULL";

/// `$1` is the castable-timestamp pattern. `avg_secs` is rounded to two
/// decimals like the other means.
pub const DURATION_AVERAGE: &str = "
    SELECT COUNT(*) AS n_durations,
           ROUND(AVG(EXTRACT(EPOCH FROM (ended_at::timestamptz - started_at::timestamptz)))::numeric, 2)
               AS avg_secs
    FROM participants
    WHERE started_at IS NOT NULL
      AND ended_at IS NOT NULL
      AND ended_at::text ~ $1
      AND started_at::text ~ $1";

/// `$1` is the castable-timestamp pattern.
pub const DURATION_SECONDS: &str = "
    SELECT EXTRACT(EPOCH FROM (ended_at::timestamptz - started_at::timestamptz))::float8 AS secs
    FROM participants
    WHERE started_at IS NOT NULL
      AND ended_at IS NOT NULL
      AND ended_at::text ~ $1
      AND started_at::text ~ $1";

pub const TOTAL_SUBMISSIONS: &str = "SELECT COUNT(*) AS n FROM code_submissions";

pub const SUBMISSIONS_BY_STATUS: &str = "
    SELECT COALESCE(status::text, '(null)') AS label, COUNT(*) AS n
    FROM code_submissions
    GROUP BY 1
    ORDER BY n DESC, label";

/// Test counts decide when present; otherwise the status keyword does.
pub const SUBMISSION_PASS_RATE: &str = "
    WITH eval AS (
        SELECT CASE
                   WHEN tests_total IS NOT NULL AND tests_passed IS NOT NULL AND tests_total > 0
                       THEN (tests_passed = tests_total)
                   WHEN status IS NOT NULL
                       THEN (LOWER(status) IN ('pass', 'passed', 'success', 'ok'))
                   ELSE NULL
               END AS passed
        FROM code_submissions
    )
    SELECT COUNT(*)                                  AS total_rows,
           COUNT(*) FILTER (WHERE passed IS TRUE)    AS passed_rows,
           ROUND(100.0 * COUNT(*) FILTER (WHERE passed IS TRUE) / NULLIF(COUNT(*), 0), 2)
                                                     AS pass_rate_percent
    FROM eval";

pub const SUBMISSION_TIME_STATS: &str = "
    SELECT COUNT(time_taken_ms)                AS n_with_time,
           ROUND(AVG(time_taken_ms))::numeric  AS avg_ms,
           MIN(time_taken_ms)::bigint          AS min_ms,
           MAX(time_taken_ms)::bigint          AS max_ms
    FROM code_submissions";

pub const FEEDBACK_MEANS: &str = "
    SELECT ROUND(AVG(length)::numeric, 2)             AS length,
           ROUND(AVG(jargon)::numeric, 2)             AS jargon,
           ROUND(AVG(sentence_structure)::numeric, 2) AS sentence_structure,
           ROUND(AVG(vocabulary)::numeric, 2)         AS vocabulary,
           ROUND(AVG(intrinsic_load)::numeric, 2)     AS intrinsic_load,
           ROUND(AVG(extraneous_load)::numeric, 2)    AS extraneous_load,
           ROUND(AVG(germane_load)::numeric, 2)       AS germane_load,
           ROUND(AVG(authoritativeness)::numeric, 2)  AS authoritativeness
    FROM feedback";

pub const FEEDBACK_BY_INTERVENTION: &str = "
    SELECT COALESCE(p.intervention_type::text, '(null)') AS label,
           COUNT(*)                                      AS n,
           ROUND(AVG(f.length)::numeric, 2)              AS length,
           ROUND(AVG(f.jargon)::numeric, 2)              AS jargon,
           ROUND(AVG(f.sentence_structure)::numeric, 2)  AS sentence_structure,
           ROUND(AVG(f.vocabulary)::numeric, 2)          AS vocabulary,
           ROUND(AVG(f.intrinsic_load)::numeric, 2)      AS intrinsic_load,
           ROUND(AVG(f.extraneous_load)::numeric, 2)     AS extraneous_load,
           ROUND(AVG(f.germane_load)::numeric, 2)        AS germane_load,
           ROUND(AVG(f.authoritativeness)::numeric, 2)   AS authoritativeness
    FROM feedback f
             LEFT JOIN participants p USING (participant_id)
    GROUP BY 1
    ORDER BY n DESC, label";

pub const FEEDBACK_BY_SKILL: &str = "
    SELECT COALESCE(p.skill_level::text, '(null)')      AS label,
           COUNT(*)                                     AS n,
           ROUND(AVG(f.length)::numeric, 2)             AS length,
           ROUND(AVG(f.jargon)::numeric, 2)             AS jargon,
           ROUND(AVG(f.sentence_structure)::numeric, 2) AS sentence_structure,
           ROUND(AVG(f.vocabulary)::numeric, 2)         AS vocabulary,
           ROUND(AVG(f.intrinsic_load)::numeric, 2)     AS intrinsic_load,
           ROUND(AVG(f.extraneous_load)::numeric, 2)    AS extraneous_load,
           ROUND(AVG(f.germane_load)::numeric, 2)       AS germane_load,
           ROUND(AVG(f.authoritativeness)::numeric, 2)  AS authoritativeness
    FROM feedback f
             LEFT JOIN participants p USING (participant_id)
    GROUP BY 1
    ORDER BY n DESC, label";

pub const FEEDBACK_BY_SNIPPET: &str = "
    SELECT COALESCE(f.snippet_id::text, '(null)')       AS label,
           COUNT(*)                                     AS n,
           ROUND(AVG(f.length)::numeric, 2)             AS length,
           ROUND(AVG(f.jargon)::numeric, 2)             AS jargon,
           ROUND(AVG(f.sentence_structure)::numeric, 2) AS sentence_structure,
           ROUND(AVG(f.vocabulary)::numeric, 2)         AS vocabulary,
           ROUND(AVG(f.intrinsic_load)::numeric, 2)     AS intrinsic_load,
           ROUND(AVG(f.extraneous_load)::numeric, 2)    AS extraneous_load,
           ROUND(AVG(f.germane_load)::numeric, 2)       AS germane_load,
           ROUND(AVG(f.authoritativeness)::numeric, 2)  AS authoritativeness
    FROM feedback f
    GROUP BY 1
    ORDER BY n DESC, label";

pub const EVENTS_BY_TYPE: &str = "
    SELECT event_type::text AS label, COUNT(*) AS n
    FROM events
    GROUP BY 1
    ORDER BY n DESC, label";

pub const TOP_PARTICIPANTS_BY_EVENTS: &str = "
    SELECT participant_id::text AS label, COUNT(*) AS n
    FROM events
    GROUP BY participant_id
    ORDER BY n DESC, participant_id
    LIMIT 50";

pub const TABLE_COLUMNS: &str = "
    SELECT column_name::text AS column_name, data_type::text AS data_type
    FROM information_schema.columns
    WHERE table_schema = current_schema()
      AND table_name = $1
    ORDER BY ordinal_position";

/// Quote an identifier for interpolation into SQL.
#[must_use]
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// `SELECT` returning each row of `table` as a JSON array of text values.
#[must_use]
pub fn select_as_json_cells(table: &str, columns: &[String]) -> String {
    let values = columns
        .iter()
        .map(|c| format!("{}::text", quote_ident(c)))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "SELECT json_build_array({values})::text AS cells FROM {}",
        quote_ident(table)
    )
}
