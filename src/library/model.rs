//! Record types: `Track` and `Playlist`.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single playable audio item with metadata and a resource location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Opaque unique identifier (UUID v4 at creation).
    pub id: String,
    /// Display name.
    pub name: String,
    pub artist: Option<String>,
    /// `None` until known; tag probing fills it in when the file has one.
    pub duration: Option<Duration>,
    /// Path or URL the audio can be read from.
    pub location: String,
    /// Raw audio payload, present when the importer embeds file contents.
    pub data: Option<Vec<u8>>,
    /// Creation time, unix milliseconds.
    pub created_at: i64,
}

/// A named, ordered grouping of track references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    /// Track ids in playlist order. References, not ownership: deleting a
    /// track does not touch the playlists that mention it.
    pub tracks: Vec<String>,
    /// Creation time, unix milliseconds.
    pub created_at: i64,
}

impl Playlist {
    /// Create an empty playlist with a fresh id.
    pub fn new(name: &str) -> Self {
        Self {
            id: new_id(),
            name: name.to_string(),
            tracks: Vec::new(),
            created_at: now_millis(),
        }
    }
}

/// Generate a fresh record identifier.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current time as unix milliseconds.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
