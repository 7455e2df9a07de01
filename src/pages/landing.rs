//! Public landing page.

use leptos::prelude::*;

use crate::components::language_switcher::LanguageSwitcher;
use crate::state::session::Session;

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    view! {
        <div class="landing-page">
            <header class="landing-page__header">
                <span class="brand">"VacciTrack"</span>
                <LanguageSwitcher/>
            </header>
            <main class="landing-page__hero">
                <h1>"Never miss a vaccination"</h1>
                <p>
                    "Follow your children's national immunization schedule, get voice reminders before each appointment, and record every dose."
                </p>
                <Show
                    when=move || session.with(Session::is_authenticated)
                    fallback=|| {
                        view! {
                            <div class="landing-page__actions">
                                <a href="/signup" class="btn btn--primary">"Create an account"</a>
                                <a href="/signin" class="btn">"Sign in"</a>
                            </div>
                        }
                    }
                >
                    <div class="landing-page__actions">
                        <a href="/dashboard" class="btn btn--primary">"Open my dashboard"</a>
                    </div>
                </Show>
            </main>
        </div>
    }
}
