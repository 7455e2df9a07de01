//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior: parents
//! without a token go to `/signin`, non-admins leave `/admin`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Profile;
use crate::state::auth::AuthState;
use crate::state::session::Session;

/// Redirect to `/signin` whenever the session has loaded without a token.
pub fn install_unauth_redirect<F>(session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/signin", replace());
        }
    });
}

/// Send non-admins to `/dashboard` and failed profile loads to `/signin`.
pub fn install_admin_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = admin_redirect(&auth.get()) {
            navigate(target, replace());
        }
    });
}

pub fn should_redirect_unauth(session: &Session) -> bool {
    session.loaded && !session.is_authenticated()
}

/// Where an admin-only page should send the viewer, if anywhere.
pub fn admin_redirect(auth: &AuthState) -> Option<&'static str> {
    if auth.loading {
        return None;
    }
    match (&auth.profile, &auth.error) {
        (Some(profile), _) if !profile.is_admin => Some("/dashboard"),
        (None, Some(_)) => Some("/signin"),
        _ => None,
    }
}

/// Landing route after sign-in.
pub fn landing_for(profile: Option<&Profile>) -> &'static str {
    if profile.is_some_and(|p| p.is_admin) { "/admin" } else { "/dashboard" }
}

pub fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}
