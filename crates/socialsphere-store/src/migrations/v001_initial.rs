//! v001 -- Initial schema creation.

use rusqlite::Connection;

const UP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS kv_entries (
    key   TEXT PRIMARY KEY NOT NULL,   -- storage key, e.g. 'socialsphere_v1'
    value TEXT NOT NULL                -- opaque string, usually JSON
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
