use super::*;

fn profile(is_admin: bool) -> Profile {
    Profile {
        id: 1,
        name: "Amina".into(),
        email: "amina@example.com".into(),
        phone_number: None,
        preferred_language: Some("ar".into()),
        is_admin,
        region_id: Some(3),
        created_at: "2024-01-01T00:00:00".into(),
    }
}

#[test]
fn apply_load_success_stores_profile() {
    let mut state = AuthState::default();
    state.begin_load();
    assert!(state.loading);
    state.apply_load(Ok(profile(false)));
    assert!(!state.loading);
    assert!(!state.is_admin());
    assert!(state.profile.is_some());
}

#[test]
fn apply_load_failure_clears_profile() {
    let mut state = AuthState { profile: Some(profile(true)), ..AuthState::default() };
    state.apply_load(Err(ApiError::Status { status: 401, message: "Not authenticated".into() }));
    assert_eq!(state.profile, None);
    assert_eq!(state.error.as_deref(), Some("Not authenticated"));
}

#[test]
fn is_admin_reads_profile_flag() {
    let state = AuthState { profile: Some(profile(true)), ..AuthState::default() };
    assert!(state.is_admin());
}
