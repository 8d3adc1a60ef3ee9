//! Durable keyed storage for tracks and playlists.
//!
//! One embedded SQLite database with two tables, `tracks` and `playlists`,
//! each carrying a secondary index on creation time. The [`Store`] handle is
//! opened once and shared by its owner; [`Store::open_in_memory`] gives
//! tests a fresh private database.

mod db;
mod schema;

pub use db::*;
