//! Locale picker shown in every page header.

use leptos::prelude::*;

use crate::i18n::Locale;
use crate::state::session::{BrowserStore, Session};
use crate::util::document;

/// Switch the UI locale. Persists the choice, flips `<html lang dir>`, and
/// for a signed-in parent updates the reminder language on a best-effort basis.
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    #[cfg(feature = "hydrate")]
    let api = crate::app::use_api();

    let on_change = move |ev: leptos::ev::Event| {
        let Some(locale) = Locale::from_code(&event_target_value(&ev)) else {
            return;
        };
        if session.with_untracked(|s| s.locale) == locale {
            return;
        }
        session.update(|s| s.set_locale(&BrowserStore, locale));
        document::apply_locale(locale);

        #[cfg(feature = "hydrate")]
        if session.with_untracked(Session::is_authenticated) {
            leptos::task::spawn_local(async move {
                if let Err(e) = api.client().update_preferred_language(locale).await {
                    log::warn!("preferred language not saved: {e}");
                }
            });
        }
    };

    view! {
        <select
            class="language-switcher"
            aria-label="Language"
            prop:value=move || session.with(|s| s.locale.code())
            on:change=on_change
        >
            {Locale::ALL
                .iter()
                .map(|locale| view! { <option value=locale.code()>{locale.native_name()}</option> })
                .collect_view()}
        </select>
    }
}
