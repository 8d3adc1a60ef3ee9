//! Reading metadata out of audio files.

use std::path::Path;
use std::time::Duration;

use lofty::{AudioFile, ItemKey, TaggedFileExt};

/// Metadata read from a file's tags. Every field is optional: an untagged or
/// unreadable file probes to an empty value, never an error.
#[derive(Debug, Clone, Default)]
pub struct ProbedTags {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub duration: Option<Duration>,
}

/// Return true when `path` has one of the configured audio extensions
/// (case-insensitive, leading dots tolerated).
pub fn is_audio_file(path: &Path, extensions: &[String]) -> bool {
    let exts: Vec<String> = extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

/// Probe `path` for title, artist and duration.
pub fn probe_tags(path: &Path) -> ProbedTags {
    let mut probed = ProbedTags::default();

    if let Ok(tagged) = lofty::read_from_path(path) {
        probed.duration = Some(tagged.properties().duration());

        if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
            if let Some(v) = tag.get_string(&ItemKey::TrackTitle) {
                if !v.trim().is_empty() {
                    probed.title = Some(v.to_string());
                }
            }
            if let Some(v) = tag.get_string(&ItemKey::TrackArtist) {
                let v = v.trim();
                if !v.is_empty() {
                    probed.artist = Some(v.to_string());
                }
            }
        }
    }

    probed
}
