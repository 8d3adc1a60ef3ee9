//! Controller change notifications.

use std::sync::mpsc::{Receiver, Sender, channel};

use super::model::QueueTrack;

/// Events emitted by the playback controller, one per state change.
#[derive(Debug, Clone)]
pub enum PlayerEvent {
    /// The loaded track changed (or was cleared).
    CurrentTrackChanged { track: Option<QueueTrack> },
    /// The play/pause flag changed.
    PlayStateChanged { playing: bool },
    /// The volume changed.
    VolumeChanged { volume: f32 },
    /// Queue contents changed.
    QueueChanged { length: usize },
    /// The library-display collection changed.
    TracksChanged { length: usize },
}

/// Registered observers. Notification is a synchronous send to every live
/// channel; receivers that hung up are pruned on the way.
#[derive(Default)]
pub(super) struct Subscribers {
    senders: Vec<Sender<PlayerEvent>>,
}

impl Subscribers {
    pub(super) fn add(&mut self) -> Receiver<PlayerEvent> {
        let (tx, rx) = channel();
        self.senders.push(tx);
        rx
    }

    pub(super) fn emit(&mut self, event: PlayerEvent) {
        self.senders.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
