//! The playback controller: the single source of truth for what is playing
//! and what comes next.
//!
//! [`Player`] holds the current track, the play flag, the volume, the queue
//! and the library-display collection. Every operation is a synchronous,
//! total state transition; each change is broadcast to subscribers as a
//! [`PlayerEvent`]. Rendering is somebody else's job (see [`crate::output`]).

mod events;
mod model;

pub use events::*;
pub use model::*;
