use super::*;

fn login() -> LoginResponse {
    LoginResponse { access_token: "tok-1".into(), token_type: "bearer".into() }
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_from_empty_store_is_signed_out_arabic() {
    let session = Session::restore(&MemoryStore::default());
    assert!(session.loaded);
    assert!(!session.is_authenticated());
    assert_eq!(session.locale, Locale::Ar);
}

#[test]
fn restore_reads_token_and_locale() {
    let store = MemoryStore::default();
    store.save(TOKEN_KEY, "abc");
    store.save(TOKEN_TYPE_KEY, "bearer");
    store.save(LOCALE_KEY, "fr");
    let session = Session::restore(&store);
    assert_eq!(session.access_token.as_deref(), Some("abc"));
    assert_eq!(session.locale, Locale::Fr);
}

#[test]
fn restore_ignores_unknown_locale_and_blank_token() {
    let store = MemoryStore::default();
    store.save(TOKEN_KEY, "  ");
    store.save(LOCALE_KEY, "de");
    let session = Session::restore(&store);
    assert!(!session.is_authenticated());
    assert_eq!(session.locale, Locale::Ar);
}

#[test]
fn default_session_is_not_loaded() {
    assert!(!Session::default().loaded);
}

// =============================================================
// sign in / out
// =============================================================

#[test]
fn sign_in_persists_token() {
    let store = MemoryStore::default();
    let mut session = Session::default();
    session.sign_in(&store, &login());
    assert!(session.is_authenticated());
    assert_eq!(store.load(TOKEN_KEY).as_deref(), Some("tok-1"));
    assert_eq!(store.load(TOKEN_TYPE_KEY).as_deref(), Some("bearer"));
}

#[test]
fn sign_out_clears_token_but_keeps_locale() {
    let store = MemoryStore::default();
    let mut session = Session::restore(&store);
    session.set_locale(&store, Locale::En);
    session.sign_in(&store, &login());
    session.sign_out(&store);
    assert!(!session.is_authenticated());
    assert_eq!(store.load(TOKEN_KEY), None);
    assert_eq!(store.load(LOCALE_KEY).as_deref(), Some("en"));
    assert_eq!(Session::restore(&store).locale, Locale::En);
}

#[test]
fn authorization_is_bearer_header() {
    let store = MemoryStore::default();
    let mut session = Session::default();
    assert_eq!(session.authorization(), None);
    session.sign_in(&store, &login());
    assert_eq!(session.authorization().as_deref(), Some("Bearer tok-1"));
}
