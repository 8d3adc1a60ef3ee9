//! The `Store` handle and its operations.

use std::path::Path;
use std::time::Duration;

use log::{debug, info};
use rusqlite::{Connection, Row, params};
use thiserror::Error;

use crate::library::{Playlist, Track};

use super::schema;

/// A failed storage operation.
///
/// One undifferentiated kind: callers report it and carry on, nothing is
/// retried or escalated. The cause is kept for display only.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage operation failed: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("storage operation failed: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("storage operation failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Handle to the library database.
///
/// Opened once by the owning process and passed around explicitly; teardown
/// is `Drop`. Operations take `&self` and run on the calling thread.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (creating on first use) the database at `path` and run schema
    /// setup. Parent directories are created when missing.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                std::fs::create_dir_all(dir)?;
            }
        }

        let conn = Connection::open(path)?;
        schema::init(&conn)?;
        info!("opened library database at {}", path.display());
        Ok(Self { conn })
    }

    /// Open a fresh private in-memory database. Nothing survives `Drop`.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        schema::init(&conn)?;
        Ok(Self { conn })
    }

    /// Insert a track record keyed by its id. Fails when the id already
    /// exists or the write is rejected.
    pub fn add_track(&self, track: &Track) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO tracks (id, name, artist, duration_secs, location, data, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                track.id,
                track.name,
                track.artist,
                track.duration.map(|d| d.as_secs_f64()),
                track.location,
                track.data,
                track.created_at,
            ],
        )?;
        debug!("stored track {} ({})", track.id, track.name);
        Ok(())
    }

    /// Snapshot of all track records, storage-defined order.
    pub fn all_tracks(&self) -> Result<Vec<Track>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, artist, duration_secs, location, data, created_at FROM tracks",
        )?;
        let rows = stmt.query_map([], track_from_row)?;

        let mut tracks = Vec::new();
        for track in rows {
            tracks.push(track?);
        }
        Ok(tracks)
    }

    /// Delete a track record by id. Removing an unknown id is not an error.
    pub fn remove_track(&self, id: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM tracks WHERE id = ?1", params![id])?;
        debug!("removed track {id}");
        Ok(())
    }

    /// Insert a playlist record keyed by its id.
    pub fn add_playlist(&self, playlist: &Playlist) -> Result<(), StoreError> {
        let track_ids = serde_json::to_string(&playlist.tracks)?;
        self.conn.execute(
            "INSERT INTO playlists (id, name, tracks, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![playlist.id, playlist.name, track_ids, playlist.created_at],
        )?;
        debug!("stored playlist {} ({})", playlist.id, playlist.name);
        Ok(())
    }

    /// Snapshot of all playlist records, storage-defined order.
    pub fn all_playlists(&self) -> Result<Vec<Playlist>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, tracks, created_at FROM playlists")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, i64>(3)?,
            ))
        })?;

        let mut playlists = Vec::new();
        for row in rows {
            let (id, name, track_ids, created_at) = row?;
            playlists.push(Playlist {
                id,
                name,
                tracks: serde_json::from_str(&track_ids)?,
                created_at,
            });
        }
        Ok(playlists)
    }

    /// Delete a playlist record by id. Removing an unknown id is not an error.
    pub fn remove_playlist(&self, id: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM playlists WHERE id = ?1", params![id])?;
        debug!("removed playlist {id}");
        Ok(())
    }
}

fn track_from_row(row: &Row<'_>) -> Result<Track, rusqlite::Error> {
    Ok(Track {
        id: row.get(0)?,
        name: row.get(1)?,
        artist: row.get(2)?,
        duration: row.get::<_, Option<f64>>(3)?.map(Duration::from_secs_f64),
        location: row.get(4)?,
        data: row.get(5)?,
        created_at: row.get(6)?,
    })
}
