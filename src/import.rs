//! Bringing audio files into the library.
//!
//! Directory import is the engine-side half of a multi-file upload: files
//! are handled strictly one at a time in walk order, each record is written
//! to the store before the next file is touched, and a failure on one file
//! is recorded without aborting the rest.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;
use walkdir::WalkDir;

use crate::config::ImportSettings;
use crate::library::{self, Track};
use crate::store::{Store, StoreError};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of a directory import: what made it into the store, and what did
/// not and why.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub added: Vec<Track>,
    pub failed: Vec<(PathBuf, ImportError)>,
}

/// Build a `Track` record from a single audio file.
///
/// The file stem names the track unless its tags carry a title; artist and
/// duration come from tags when present. With `embed_data` on, the file
/// contents are copied into the record.
pub fn import_file(path: &Path, settings: &ImportSettings) -> Result<Track, ImportError> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();

    let tags = library::probe_tags(path);

    let data = if settings.embed_data {
        Some(fs::read(path).map_err(|source| ImportError::Read {
            path: path.to_path_buf(),
            source,
        })?)
    } else {
        None
    };

    Ok(Track {
        id: library::new_id(),
        name: tags.title.unwrap_or(stem),
        artist: tags.artist,
        duration: tags.duration,
        location: path.to_string_lossy().into_owned(),
        data,
        created_at: library::now_millis(),
    })
}

/// Import every recognized audio file under `dir` into `store`.
///
/// Sequential by construction: each record is persisted before the next
/// file is read. Per-file failures land in the report and the walk goes on.
pub fn import_dir(store: &Store, dir: &Path, settings: &ImportSettings) -> ImportReport {
    let mut report = ImportReport::default();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !(path.is_file()
            && (settings.include_hidden || !is_hidden(path))
            && library::is_audio_file(path, &settings.extensions))
        {
            continue;
        }

        match import_file(path, settings).and_then(|track| {
            store.add_track(&track)?;
            Ok(track)
        }) {
            Ok(track) => {
                debug!("imported {} from {}", track.name, path.display());
                report.added.push(track);
            }
            Err(err) => {
                warn!("skipping {}: {err}", path.display());
                report.failed.push((path.to_path_buf(), err));
            }
        }
    }

    report
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests;
