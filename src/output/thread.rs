//! The surface worker thread.

use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::warn;
use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::player::QueueTrack;

use super::sink::create_sink_at;
use super::types::{SurfaceCmd, SurfaceEvent};

pub(super) fn spawn_surface_thread(
    rx: Receiver<SurfaceCmd>,
    events: Sender<SurfaceEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream =
            OutputStreamBuilder::open_default_stream().expect("ERR: No audio output device");
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for whoever embeds the surface.
        let mut stream = stream;
        stream.log_on_drop(false);

        let mut current: Option<QueueTrack> = None;
        let mut sink: Option<Sink> = None;

        // The observed play flag. Kept even when no sink is alive, so a track
        // loaded later starts immediately.
        let mut playing = false;
        let mut volume: f32 = 1.0;

        // Seeking latch: while a drag is in flight, progress reports pause.
        let mut seeking = false;

        // Track start time and accumulated elapsed when paused.
        let mut started_at: Option<Instant> = None;
        let mut accumulated = Duration::ZERO;

        fn swap_sink(
            stream: &OutputStream,
            track: &QueueTrack,
            start_at: Duration,
            playing: bool,
            volume: f32,
            sink: &mut Option<Sink>,
            started_at: &mut Option<Instant>,
            accumulated: &mut Duration,
            events: &Sender<SurfaceEvent>,
        ) {
            if let Some(s) = sink.take() {
                s.stop();
            }
            *accumulated = start_at;
            *started_at = None;

            match create_sink_at(stream, track, start_at) {
                Ok(new_sink) => {
                    new_sink.set_volume(volume);
                    if playing {
                        new_sink.play();
                        *started_at = Some(Instant::now());
                    }
                    *sink = Some(new_sink);
                }
                Err(message) => {
                    warn!("{message}");
                    let _ = events.send(SurfaceEvent::Failed { message });
                }
            }
        }

        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(cmd) => match cmd {
                    SurfaceCmd::Load(track) => {
                        current = track;
                        match current.as_ref() {
                            Some(t) => swap_sink(
                                &stream,
                                t,
                                Duration::ZERO,
                                playing,
                                volume,
                                &mut sink,
                                &mut started_at,
                                &mut accumulated,
                                &events,
                            ),
                            None => {
                                if let Some(s) = sink.take() {
                                    s.stop();
                                }
                                started_at = None;
                                accumulated = Duration::ZERO;
                            }
                        }
                    }

                    SurfaceCmd::SetPlaying(p) => {
                        playing = p;
                        match sink.as_ref() {
                            Some(s) if p => {
                                s.play();
                                if started_at.is_none() {
                                    started_at = Some(Instant::now());
                                }
                            }
                            Some(s) => {
                                s.pause();
                                if let Some(st) = started_at.take() {
                                    accumulated += st.elapsed();
                                }
                            }
                            None => {}
                        }

                        if p && sink.is_none() {
                            // No live sink (fresh start, or the track already
                            // ended): replay from the top, like a media
                            // element does after "ended".
                            if let Some(t) = current.clone() {
                                swap_sink(
                                    &stream,
                                    &t,
                                    Duration::ZERO,
                                    true,
                                    volume,
                                    &mut sink,
                                    &mut started_at,
                                    &mut accumulated,
                                    &events,
                                );
                            }
                        }
                    }

                    SurfaceCmd::SetVolume(v) => {
                        volume = v;
                        if let Some(s) = sink.as_ref() {
                            s.set_volume(v);
                        }
                    }

                    SurfaceCmd::BeginSeek => {
                        seeking = true;
                    }

                    SurfaceCmd::SeekTo(pos) => {
                        // Commit: a direct position write, then release the latch.
                        seeking = false;
                        if let Some(t) = current.clone() {
                            swap_sink(
                                &stream,
                                &t,
                                pos,
                                playing,
                                volume,
                                &mut sink,
                                &mut started_at,
                                &mut accumulated,
                                &events,
                            );
                        }
                    }

                    SurfaceCmd::Quit => {
                        if let Some(s) = sink.as_ref() {
                            s.stop();
                        }
                        break;
                    }
                },

                Err(RecvTimeoutError::Timeout) => {
                    if !playing {
                        continue;
                    }

                    if sink.as_ref().is_some_and(|s| s.empty()) {
                        // Natural end. Report upward and unload; what comes
                        // next is the consumer's call.
                        sink = None;
                        started_at = None;
                        accumulated = Duration::ZERO;
                        let _ = events.send(SurfaceEvent::Ended);
                    } else if sink.is_some() && !seeking {
                        let elapsed =
                            accumulated + started_at.map_or(Duration::ZERO, |st| st.elapsed());
                        let duration = current.as_ref().and_then(|t| t.duration);
                        let _ = events.send(SurfaceEvent::Position { elapsed, duration });
                    }
                }

                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
