//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, landing::LandingPage, signin::SignInPage, signup::SignUpPage,
};
use crate::state::admin::AdminState;
use crate::state::auth::AuthState;
use crate::state::children::ChildrenState;
use crate::state::notifications::NotificationsState;
use crate::state::session::{BrowserStore, Session};
use crate::state::timeline::TimelineState;
use crate::util::document;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Rendered with the default locale; the stored one is applied after hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ar" dir="rtl">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Builds request clients from the live session.
///
/// Event handlers and spawned tasks run without a reactive owner, so take this
/// from context during component setup and call [`Api::client`] later.
#[derive(Clone, Copy)]
pub struct Api {
    config: StoredValue<ClientConfig>,
    session: RwSignal<Session>,
}

impl Api {
    /// Client carrying the current token, if any.
    pub fn client(&self) -> ApiClient {
        let session = self.session.get_untracked();
        self.config.with_value(|config| ApiClient::new(config, &session))
    }

    /// Client without a credential, for public endpoints.
    pub fn anonymous(&self) -> ApiClient {
        self.config.with_value(ApiClient::anonymous)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with_untracked(Session::is_authenticated)
    }
}

pub fn use_api() -> Api {
    expect_context::<Api>()
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session = RwSignal::new(Session::default());
    let auth = RwSignal::new(AuthState::default());

    provide_context(Api { config: StoredValue::new(config.clone()), session });
    provide_context(config);
    provide_context(session);
    provide_context(auth);
    provide_context(RwSignal::new(ChildrenState::default()));
    provide_context(RwSignal::new(TimelineState::default()));
    provide_context(RwSignal::new(NotificationsState::default()));
    provide_context(RwSignal::new(AdminState::default()));

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        let restored = Session::restore(&BrowserStore);
        log::debug!("session restored, signed in: {}", restored.is_authenticated());
        document::apply_locale(restored.locale);
        session.set(restored);
    });

    // Profile follows the token.
    #[cfg(feature = "hydrate")]
    let api = use_api();
    let token = Memo::new(move |_| session.with(|s| s.access_token.clone()));
    Effect::new(move || {
        if token.with(Option::is_none) {
            auth.update(AuthState::clear);
            return;
        }
        auth.update(AuthState::begin_load);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api.client().fetch_profile().await;
            if result.as_ref().is_err_and(crate::net::error::ApiError::is_unauthorized) {
                log::info!("stored token rejected, signing out");
                session.update(|s| s.sign_out(&BrowserStore));
            }
            auth.update(|a| a.apply_load(result));
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/vaccitrack.css"/>
        <Title text="VacciTrack"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("signin") view=SignInPage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </Router>
    }
}
