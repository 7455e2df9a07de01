use super::*;

fn item(id: i64) -> NotificationItem {
    NotificationItem {
        id,
        child_id: 1,
        child_name: "Sara".into(),
        vaccine_name: "BCG, VPO".into(),
        vaccine_names: vec!["BCG".into(), "VPO".into()],
        period_label: "Naissance".into(),
        due_date: Some("2024-06-01".into()),
        audio_url: format!("/static/audio/{id}.mp3"),
    }
}

// =============================================================
// badge
// =============================================================

#[test]
fn badge_hidden_when_empty() {
    assert_eq!(NotificationsState::default().badge_label(), None);
}

#[test]
fn badge_shows_exact_count_up_to_99() {
    let state = NotificationsState { items: (1..=99).map(item).collect(), ..NotificationsState::default() };
    assert_eq!(state.badge_label().as_deref(), Some("99"));
}

#[test]
fn badge_caps_at_99_plus() {
    let state = NotificationsState { items: (1..=100).map(item).collect(), ..NotificationsState::default() };
    assert_eq!(state.badge_label().as_deref(), Some("99+"));
}

// =============================================================
// load / delete / play
// =============================================================

#[test]
fn failed_poll_clears_items() {
    let mut state = NotificationsState { items: vec![item(1)], ..NotificationsState::default() };
    state.apply_load(Err(ApiError::Transport("offline".into())));
    assert!(state.items.is_empty());
    assert_eq!(state.error.as_deref(), Some("offline"));
}

#[test]
fn poll_that_drops_playing_item_stops_playback() {
    let mut state = NotificationsState { items: vec![item(1)], playing_id: Some(1), ..NotificationsState::default() };
    state.apply_load(Ok(vec![item(2)]));
    assert_eq!(state.playing_id, None);
}

#[test]
fn remove_drops_item_and_stops_its_audio() {
    let mut state = NotificationsState {
        items: vec![item(1), item(2)],
        playing_id: Some(2),
        deleting_id: Some(2),
        ..NotificationsState::default()
    };
    state.remove(2);
    assert_eq!(state.count(), 1);
    assert_eq!(state.playing_id, None);
    assert_eq!(state.deleting_id, None);
}

#[test]
fn toggle_play_switches_between_items() {
    let mut state = NotificationsState::default();
    assert_eq!(state.toggle_play(1), Some(1));
    assert_eq!(state.toggle_play(2), Some(2));
    assert_eq!(state.toggle_play(2), None);
}

#[test]
fn request_refresh_bumps_sequence() {
    let mut state = NotificationsState::default();
    state.request_refresh();
    assert_eq!(state.refresh_seq, 1);
}

#[test]
fn audio_src_joins_relative_paths() {
    let config = ClientConfig::default();
    assert_eq!(audio_src(&config, "/static/a.mp3"), "http://localhost:8000/static/a.mp3");
    assert_eq!(audio_src(&config, "https://cdn/a.mp3"), "https://cdn/a.mp3");
}
