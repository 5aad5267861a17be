//! SQL schema for persisted heatwave counts.

/// Returns the schema as a single batch string.
///
/// `heatwave_events` holds one row per year; `updated_at` is the RFC 3339
/// UTC time of the last write for that year.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS heatwave_events (
        year INTEGER PRIMARY KEY,
        events INTEGER NOT NULL,
        updated_at TEXT NOT NULL
    );
    "#
}
