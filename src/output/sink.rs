//! Utilities for creating `rodio` sinks from queue tracks.
//!
//! The helper here encapsulates opening/decoding a resource and preparing a
//! paused `Sink` at the requested start position.

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::player::QueueTrack;

/// Create a paused `Sink` for `track` that starts playback at `start_at`.
/// A failure to open or decode is reported, never a panic: bad media must
/// degrade to an event.
pub(super) fn create_sink_at(
    handle: &OutputStream,
    track: &QueueTrack,
    start_at: Duration,
) -> Result<Sink, String> {
    let file = File::open(&track.location)
        .map_err(|e| format!("failed to open {}: {e}", track.location))?;

    let source = Decoder::new(BufReader::new(file))
        .map_err(|e| format!("failed to decode {}: {e}", track.location))?
        // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
        .skip_duration(start_at);

    let sink = Sink::connect_new(handle.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}
