//! The rendering surface: what turns controller state into audible audio.
//!
//! The contract is a pair of channels. Commands flow in ([`SurfaceCmd`]):
//! load the current track, start/stop, set volume, seek. Events flow out
//! ([`SurfaceEvent`]): periodic progress, natural end of playback, load
//! failures. [`AudioSurface`] is the `rodio`-backed implementation; the
//! [`forward`] helper maps controller events onto surface commands so a
//! consumer only has to pump one receiver.
//!
//! The natural-end event is deliberately NOT wired to anything here: the
//! consumer decides that it means [`crate::player::Player::next_track`].

mod link;
mod sink;
mod surface;
mod thread;
mod types;

pub use link::*;
pub use surface::*;
pub use types::*;

#[cfg(test)]
mod tests;
