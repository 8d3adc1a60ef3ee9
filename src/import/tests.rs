use std::fs;

use tempfile::tempdir;

use super::*;
use crate::config::ImportSettings;
use crate::store::Store;

#[test]
fn import_file_names_track_after_file_stem() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Master of Puppets.mp3");
    fs::write(&path, b"not a real mp3").unwrap();

    let settings = ImportSettings::default();
    let track = import_file(&path, &settings).unwrap();

    assert_eq!(track.name, "Master of Puppets");
    assert!(track.artist.is_none());
    assert!(track.duration.is_none());
    assert!(track.data.is_none());
    assert_eq!(track.location, path.to_string_lossy());
    assert!(!track.id.is_empty());
}

#[test]
fn import_file_embeds_payload_when_asked() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("clip.wav");
    fs::write(&path, b"RIFFdata").unwrap();

    let settings = ImportSettings {
        embed_data: true,
        ..ImportSettings::default()
    };
    let track = import_file(&path, &settings).unwrap();

    assert_eq!(track.data.as_deref(), Some(b"RIFFdata".as_slice()));
}

#[test]
fn import_file_with_embed_fails_on_missing_file() {
    let settings = ImportSettings {
        embed_data: true,
        ..ImportSettings::default()
    };
    let err = import_file(std::path::Path::new("/tmp/not-there.mp3"), &settings);
    assert!(matches!(err, Err(ImportError::Read { .. })));
}

#[test]
fn import_dir_stores_audio_files_and_skips_the_rest() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.MP3"), b"not a real mp3").unwrap();
    fs::write(dir.path().join("a.ogg"), b"not a real ogg").unwrap();
    fs::write(dir.path().join("c.txt"), b"ignore me").unwrap();

    let store = Store::open_in_memory().unwrap();
    let settings = ImportSettings::default();

    let report = import_dir(&store, dir.path(), &settings);

    assert_eq!(report.added.len(), 2);
    assert!(report.failed.is_empty());

    let mut names: Vec<String> = store
        .all_tracks()
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn import_dir_respects_recursive_false() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    fs::write(sub.join("child.mp3"), b"not real").unwrap();

    let store = Store::open_in_memory().unwrap();
    let settings = ImportSettings {
        recursive: false,
        ..ImportSettings::default()
    };

    let report = import_dir(&store, dir.path(), &settings);
    assert_eq!(report.added.len(), 1);
    assert_eq!(report.added[0].name, "root");
}

#[test]
fn import_dir_respects_include_hidden_false() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".hidden.mp3"), b"not real").unwrap();
    fs::write(dir.path().join("visible.mp3"), b"not real").unwrap();

    let store = Store::open_in_memory().unwrap();
    let settings = ImportSettings {
        include_hidden: false,
        ..ImportSettings::default()
    };

    let report = import_dir(&store, dir.path(), &settings);
    assert_eq!(report.added.len(), 1);
    assert_eq!(report.added[0].name, "visible");
}

#[test]
fn import_dir_respects_max_depth() {
    let dir = tempdir().unwrap();
    let d1 = dir.path().join("d1");
    let d2 = d1.join("d2");
    fs::create_dir_all(&d2).unwrap();
    fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
    fs::write(d1.join("one.mp3"), b"not real").unwrap();
    fs::write(d2.join("two.mp3"), b"not real").unwrap();

    let store = Store::open_in_memory().unwrap();
    // WalkDir depth counts root as 0, children as 1, grandchildren as 2...
    // With max_depth=2 we should see root + d1/*, but not d1/d2/*.
    let settings = ImportSettings {
        max_depth: Some(2),
        ..ImportSettings::default()
    };

    let report = import_dir(&store, dir.path(), &settings);
    let names: Vec<String> = report.added.iter().map(|t| t.name.clone()).collect();
    assert!(names.contains(&"root".to_string()));
    assert!(names.contains(&"one".to_string()));
    assert!(!names.contains(&"two".to_string()));
}

#[test]
fn a_failing_store_write_does_not_abort_the_remaining_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("one.mp3"), b"not real").unwrap();
    fs::write(dir.path().join("two.mp3"), b"not real").unwrap();

    let db_path = dir.path().join("library.db");
    let store = Store::open(&db_path).unwrap();

    // Sabotage the schema behind the handle's back; every write now fails.
    let raw = rusqlite::Connection::open(&db_path).unwrap();
    raw.execute("DROP TABLE tracks", []).unwrap();
    drop(raw);

    let report = import_dir(&store, dir.path(), &ImportSettings::default());

    // Both files were visited: the first failure did not stop the walk.
    assert!(report.added.is_empty());
    assert_eq!(report.failed.len(), 2);
    assert!(matches!(report.failed[0].1, ImportError::Store(_)));
}
