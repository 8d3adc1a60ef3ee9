use std::time::Duration;

use super::*;
use crate::player::{Player, PlayerEvent, QueueTrack};

fn t(id: &str) -> QueueTrack {
    QueueTrack {
        id: id.into(),
        name: id.into(),
        artist: None,
        duration: Some(Duration::from_secs(60)),
        location: format!("/music/{id}.mp3"),
    }
}

#[test]
fn forward_maps_current_track_to_load() {
    let event = PlayerEvent::CurrentTrackChanged { track: Some(t("a")) };
    match forward(&event) {
        Some(SurfaceCmd::Load(Some(track))) => assert_eq!(track.id, "a"),
        other => panic!("unexpected command: {other:?}"),
    }

    let cleared = PlayerEvent::CurrentTrackChanged { track: None };
    assert!(matches!(forward(&cleared), Some(SurfaceCmd::Load(None))));
}

#[test]
fn forward_maps_play_flag_and_volume() {
    assert!(matches!(
        forward(&PlayerEvent::PlayStateChanged { playing: true }),
        Some(SurfaceCmd::SetPlaying(true))
    ));
    assert!(matches!(
        forward(&PlayerEvent::VolumeChanged { volume: 0.5 }),
        Some(SurfaceCmd::SetVolume(v)) if v == 0.5
    ));
}

#[test]
fn forward_ignores_queue_and_library_changes() {
    assert!(forward(&PlayerEvent::QueueChanged { length: 3 }).is_none());
    assert!(forward(&PlayerEvent::TracksChanged { length: 3 }).is_none());
}

#[test]
fn a_player_session_translates_to_the_expected_command_stream() {
    let mut player = Player::new();
    let events = player.subscribe();

    player.set_queue(vec![t("a"), t("b")]);
    player.set_current_track(Some(t("a")));
    player.set_playing(true);
    player.set_volume(0.8);
    player.next_track();

    let cmds: Vec<SurfaceCmd> = events.try_iter().filter_map(|e| forward(&e)).collect();

    assert_eq!(cmds.len(), 4);
    assert!(matches!(&cmds[0], SurfaceCmd::Load(Some(track)) if track.id == "a"));
    assert!(matches!(cmds[1], SurfaceCmd::SetPlaying(true)));
    assert!(matches!(cmds[2], SurfaceCmd::SetVolume(v) if v == 0.8));
    assert!(matches!(&cmds[3], SurfaceCmd::Load(Some(track)) if track.id == "b"));
}
