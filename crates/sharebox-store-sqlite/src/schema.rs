//! SQL schema for the sharebox SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! schema revision for future migrations.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT keeps ids from being reused after deletes.
CREATE TABLE IF NOT EXISTS shares (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    content     TEXT NOT NULL,
    type        TEXT NOT NULL CHECK (type IN ('text', 'image')),
    created_at  TEXT NOT NULL    -- fixed-width RFC 3339 UTC, nanoseconds
);

CREATE INDEX IF NOT EXISTS shares_created_idx ON shares(created_at);

PRAGMA user_version = 1;
";
