//! The surface contract: commands in, events out.

use std::time::Duration;

use crate::player::QueueTrack;

/// Commands a rendering surface accepts.
#[derive(Debug, Clone)]
pub enum SurfaceCmd {
    /// Replace the loaded resource (or unload with `None`). Playback starts
    /// immediately when the play flag is on.
    Load(Option<QueueTrack>),
    /// Start or stop playback without reloading.
    SetPlaying(bool),
    /// Apply a new volume directly.
    SetVolume(f32),
    /// Raise the seeking latch: progress reporting pauses until the seek
    /// commits, so a dragged slider is not fought over.
    BeginSeek,
    /// Jump to an absolute position and release the seeking latch.
    SeekTo(Duration),
    /// Shut the surface down.
    Quit,
}

/// Events a rendering surface reports upward.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// Periodic progress. Suppressed while a seek is in flight.
    Position {
        elapsed: Duration,
        duration: Option<Duration>,
    },
    /// The loaded track played to its natural end.
    Ended,
    /// The loaded resource could not be opened or decoded.
    Failed { message: String },
}
