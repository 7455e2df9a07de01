//! Sign-in page: email and password against `POST /auth/login`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::language_switcher::LanguageSwitcher;
use crate::net::types::LoginPayload;
use crate::state::auth::AuthState;
use crate::state::session::Session;
use crate::util::auth::{landing_for, replace};

/// Sign-in form. Once a token exists and the profile has resolved, admins go
/// to `/admin` and everyone else to `/dashboard`; this also bounces visitors
/// who are already signed in.
#[component]
pub fn SignInPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let api = crate::app::use_api();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    Effect::new(move || {
        if !session.with(Session::is_authenticated) {
            return;
        }
        let target = auth.with(|a| {
            let resolved = !a.loading && (a.profile.is_some() || a.error.is_some());
            resolved.then(|| landing_for(a.profile.as_ref()))
        });
        if let Some(target) = target {
            navigate(target, replace());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let payload = LoginPayload { email: email.get_untracked().trim().to_owned(), password: password.get_untracked() };
        if payload.email.is_empty() || payload.password.is_empty() {
            error.set(Some("Email and password are required".to_owned()));
            return;
        }
        error.set(None);
        loading.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.anonymous().login(&payload).await {
                Ok(token) => {
                    session.update(|s| s.sign_in(&crate::state::session::BrowserStore, &token));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            loading.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <header class="auth-page__header">
                <a href="/" class="brand">"VacciTrack"</a>
                <LanguageSwitcher/>
            </header>
            <form class="auth-card" on:submit=on_submit>
                <h1>"Sign in"</h1>
                <label class="auth-card__label">
                    "Email"
                    <input
                        class="auth-card__input"
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-card__label">
                    "Password"
                    <input
                        class="auth-card__input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-card__alt">
                    "No account yet? " <a href="/signup">"Create one"</a>
                </p>
            </form>
        </div>
    }
}
