use super::*;

fn profile(is_admin: bool) -> Profile {
    Profile {
        id: 1,
        name: "Admin".into(),
        email: "admin@example.com".into(),
        phone_number: None,
        preferred_language: None,
        is_admin,
        region_id: None,
        created_at: "2024-01-01T00:00:00".into(),
    }
}

// =============================================================
// should_redirect_unauth
// =============================================================

#[test]
fn should_not_redirect_before_session_loads() {
    assert!(!should_redirect_unauth(&Session::default()));
}

#[test]
fn should_redirect_unauth_when_loaded_without_token() {
    let session = Session { loaded: true, ..Session::default() };
    assert!(should_redirect_unauth(&session));
}

#[test]
fn should_not_redirect_with_token() {
    let session = Session { loaded: true, access_token: Some("t".into()), ..Session::default() };
    assert!(!should_redirect_unauth(&session));
}

// =============================================================
// admin_redirect
// =============================================================

#[test]
fn admin_redirect_waits_while_loading() {
    let auth = AuthState { loading: true, ..AuthState::default() };
    assert_eq!(admin_redirect(&auth), None);
}

#[test]
fn admin_redirect_sends_parents_to_dashboard() {
    let auth = AuthState { profile: Some(profile(false)), ..AuthState::default() };
    assert_eq!(admin_redirect(&auth), Some("/dashboard"));
}

#[test]
fn admin_redirect_sends_failed_profile_to_signin() {
    let auth = AuthState { error: Some("Not authenticated".into()), ..AuthState::default() };
    assert_eq!(admin_redirect(&auth), Some("/signin"));
}

#[test]
fn admin_redirect_lets_admins_stay() {
    let auth = AuthState { profile: Some(profile(true)), ..AuthState::default() };
    assert_eq!(admin_redirect(&auth), None);
}

#[test]
fn landing_depends_on_admin_flag() {
    assert_eq!(landing_for(Some(&profile(true))), "/admin");
    assert_eq!(landing_for(Some(&profile(false))), "/dashboard");
    assert_eq!(landing_for(None), "/dashboard");
}
