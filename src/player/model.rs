//! `Player` state and its operations.

use std::sync::mpsc::Receiver;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::library::Track;

use super::events::{PlayerEvent, Subscribers};

/// Read-oriented projection of a [`Track`] held for playback: everything the
/// rendering surface needs, nothing the store owns. Never a second source of
/// truth for library data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueTrack {
    pub id: String,
    pub name: String,
    pub artist: Option<String>,
    pub duration: Option<Duration>,
    /// Path or URL the audio can be read from.
    pub location: String,
}

impl From<&Track> for QueueTrack {
    fn from(track: &Track) -> Self {
        Self {
            id: track.id.clone(),
            name: track.name.clone(),
            artist: track.artist.clone(),
            duration: track.duration,
            location: track.location.clone(),
        }
    }
}

/// The playback controller.
///
/// The queue governs next/previous navigation and may contain duplicate ids;
/// `tracks` is the independent library-display collection. The current track
/// need not be a member of either.
pub struct Player {
    current: Option<QueueTrack>,
    playing: bool,
    volume: f32,
    queue: Vec<QueueTrack>,
    tracks: Vec<QueueTrack>,
    subscribers: Subscribers,
}

impl Player {
    pub fn new() -> Self {
        Self {
            current: None,
            playing: false,
            volume: 1.0,
            queue: Vec::new(),
            tracks: Vec::new(),
            subscribers: Subscribers::default(),
        }
    }

    pub fn current_track(&self) -> Option<&QueueTrack> {
        self.current.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn queue(&self) -> &[QueueTrack] {
        &self.queue
    }

    pub fn tracks(&self) -> &[QueueTrack] {
        &self.tracks
    }

    /// Register an observer. Events for every subsequent state change arrive
    /// on the returned channel; dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> Receiver<PlayerEvent> {
        self.subscribers.add()
    }

    /// Replace the current track unconditionally. No validation against the
    /// queue or the library.
    pub fn set_current_track(&mut self, track: Option<QueueTrack>) {
        self.current = track.clone();
        self.subscribers
            .emit(PlayerEvent::CurrentTrackChanged { track });
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
        self.subscribers.emit(PlayerEvent::PlayStateChanged { playing });
    }

    /// Replace the volume. Values are taken as-is; callers pass [0, 1].
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        self.subscribers.emit(PlayerEvent::VolumeChanged { volume });
    }

    /// Exact-zero mute toggle: 0 becomes 1, anything else becomes 0. Not a
    /// restore of the prior nonzero volume.
    pub fn toggle_mute(&mut self) {
        let volume = if self.volume == 0.0 { 1.0 } else { 0.0 };
        self.set_volume(volume);
    }

    /// Replace the queue wholesale.
    pub fn set_queue(&mut self, queue: Vec<QueueTrack>) {
        self.queue = queue;
        self.emit_queue_changed();
    }

    /// Append to the queue. Insertion order is navigation order.
    pub fn add_to_queue(&mut self, track: QueueTrack) {
        self.queue.push(track);
        self.emit_queue_changed();
    }

    /// Drop every queue entry with the given id; the rest keep their order.
    pub fn remove_from_queue(&mut self, id: &str) {
        self.queue.retain(|t| t.id != id);
        self.emit_queue_changed();
    }

    /// Append to the library-display collection.
    pub fn add_track(&mut self, track: QueueTrack) {
        self.tracks.push(track);
        self.emit_tracks_changed();
    }

    /// Drop a track from the library-display collection by id.
    pub fn remove_track(&mut self, id: &str) {
        self.tracks.retain(|t| t.id != id);
        self.emit_tracks_changed();
    }

    /// Advance to the next queue entry, wrapping at the end. A current track
    /// that is missing from the queue advances to the first entry. Empty
    /// queue: no-op.
    pub fn next_track(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        let next = match self.position_of_current() {
            Some(i) if i + 1 < self.queue.len() => i + 1,
            _ => 0,
        };
        self.set_current_track(Some(self.queue[next].clone()));
    }

    /// Step back to the previous queue entry. From the first entry, and when
    /// the current track is missing from the queue, this wraps to the last
    /// entry; the asymmetry with [`Self::next_track`] is deliberate. Empty
    /// queue: no-op.
    pub fn prev_track(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        let prev = match self.position_of_current() {
            Some(i) if i > 0 => i - 1,
            _ => self.queue.len() - 1,
        };
        self.set_current_track(Some(self.queue[prev].clone()));
    }

    fn position_of_current(&self) -> Option<usize> {
        let current = self.current.as_ref()?;
        self.queue.iter().position(|t| t.id == current.id)
    }

    fn emit_queue_changed(&mut self) {
        let length = self.queue.len();
        self.subscribers.emit(PlayerEvent::QueueChanged { length });
    }

    fn emit_tracks_changed(&mut self) {
        let length = self.tracks.len();
        self.subscribers.emit(PlayerEvent::TracksChanged { length });
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
