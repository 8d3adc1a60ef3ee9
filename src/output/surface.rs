//! Handle to the rodio surface thread.

use std::sync::Mutex;
use std::sync::mpsc::{self, SendError, Sender};
use std::thread::JoinHandle;

use super::thread::spawn_surface_thread;
use super::types::{SurfaceCmd, SurfaceEvent};

/// The `rodio`-backed rendering surface.
///
/// Owns a dedicated worker thread holding the audio output stream and at
/// most one live sink. Commands go in through [`AudioSurface::send`]; the
/// surface reports progress, natural end and failures on the event channel
/// given to [`AudioSurface::new`].
pub struct AudioSurface {
    tx: Sender<SurfaceCmd>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioSurface {
    /// Spawn the surface thread. Events arrive on `events`.
    pub fn new(events: Sender<SurfaceEvent>) -> Self {
        let (tx, rx) = mpsc::channel::<SurfaceCmd>();
        let join = spawn_surface_thread(rx, events);

        Self {
            tx,
            join: Mutex::new(Some(join)),
        }
    }

    pub fn send(&self, cmd: SurfaceCmd) -> Result<(), SendError<SurfaceCmd>> {
        self.tx.send(cmd)
    }

    /// Stop playback and join the worker thread.
    pub fn quit(&self) {
        let _ = self.send(SurfaceCmd::Quit);

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}
