//! Table and index definitions.

use rusqlite::Connection;

/// Run schema setup on a fresh or existing database. Idempotent.
pub(super) fn init(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS tracks (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            artist TEXT,
            duration_secs REAL,
            location TEXT NOT NULL,
            data BLOB,
            created_at INTEGER NOT NULL
        )",
        [],
    )?;
    // Kept for chronological views; the snapshot reads do not use it.
    conn.execute(
        "CREATE INDEX IF NOT EXISTS tracks_by_date ON tracks(created_at)",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS playlists (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            tracks TEXT NOT NULL,
            created_at INTEGER NOT NULL
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS playlists_by_date ON playlists(created_at)",
        [],
    )?;

    Ok(())
}
