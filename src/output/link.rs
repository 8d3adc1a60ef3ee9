//! Translating controller events into surface commands.

use std::sync::mpsc::Receiver;

use crate::player::PlayerEvent;

use super::surface::AudioSurface;
use super::types::SurfaceCmd;

/// Map a controller event to the surface command it implies, if any.
///
/// The surface observes the current track, the play flag and the volume.
/// Queue and library changes are not its concern.
pub fn forward(event: &PlayerEvent) -> Option<SurfaceCmd> {
    match event {
        PlayerEvent::CurrentTrackChanged { track } => Some(SurfaceCmd::Load(track.clone())),
        PlayerEvent::PlayStateChanged { playing } => Some(SurfaceCmd::SetPlaying(*playing)),
        PlayerEvent::VolumeChanged { volume } => Some(SurfaceCmd::SetVolume(*volume)),
        PlayerEvent::QueueChanged { .. } | PlayerEvent::TracksChanged { .. } => None,
    }
}

/// Drain pending controller events into the surface. Call from the consumer
/// loop after controller mutations.
pub fn pump(events: &Receiver<PlayerEvent>, surface: &AudioSurface) {
    while let Ok(event) = events.try_recv() {
        if let Some(cmd) = forward(&event) {
            let _ = surface.send(cmd);
        }
    }
}
