//! Admin dashboard: vaccine picker, coverage, supply, region drill-down,
//! region settings and Telegram alerts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded twice: no token goes to `/signin`, a non-admin profile goes to
//! `/dashboard`. Coverage and supply reload together whenever the vaccine or
//! a coverage filter changes, and on an explicit recompute.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::admin::coverage_panel::CoveragePanel;
use crate::components::admin::region_detail_modal::RegionDetailModal;
use crate::components::admin::region_settings::RegionSettings;
use crate::components::admin::supply_card::SupplyCard;
use crate::components::admin::telegram_panel::TelegramPanel;
use crate::components::language_switcher::LanguageSwitcher;
use crate::net::admin::CoverageQuery;
use crate::net::types::CoverageMode;
use crate::state::admin::AdminState;
use crate::state::auth::AuthState;
use crate::state::session::{BrowserStore, Session};
use crate::util::auth::{install_admin_redirect, install_unauth_redirect};

/// Coverage filters besides the vaccine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct CoverageFilters {
    date_from: String,
    date_to: String,
    mode: Option<CoverageMode>,
}

impl CoverageFilters {
    fn query(&self, vaccine: &str, refresh: bool) -> CoverageQuery {
        let non_empty = |v: &str| (!v.trim().is_empty()).then(|| v.trim().to_owned());
        CoverageQuery {
            vaccine: vaccine.to_owned(),
            refresh,
            date_from: non_empty(&self.date_from),
            date_to: non_empty(&self.date_to),
            mode: self.mode,
        }
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let admin = expect_context::<RwSignal<AdminState>>();
    #[cfg(feature = "hydrate")]
    let api = crate::app::use_api();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate.clone());
    install_admin_redirect(auth, navigate);

    let filters = RwSignal::new(CoverageFilters::default());
    let is_admin = Memo::new(move |_| auth.with(AuthState::is_admin));

    // Vaccine list once the profile confirms an admin.
    Effect::new(move || {
        if !is_admin.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api.client().fetch_vaccines().await;
            admin.update(|a| {
                a.apply_vaccines(result);
                if a.vaccine.is_none() {
                    if let Some(first) = a.vaccines.first().cloned() {
                        a.select_vaccine(&first);
                    }
                }
            });
        });
    });

    let load = move || {
        let Some((vaccine, refresh)) = admin.try_update(AdminState::begin_load).flatten() else {
            return;
        };
        let query = filters.with_untracked(|f| f.query(&vaccine, refresh));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let client = api.client();
            let (coverage, supply) = futures::join!(client.fetch_coverage(&query), client.fetch_supply(&vaccine));
            admin.update(|a| a.apply_load(&vaccine, coverage, supply));
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
            admin.update(|a| a.loading = false);
        }
    };

    let vaccine = Memo::new(move |_| admin.with(|a| a.vaccine.clone()));
    Effect::new(move || {
        if !is_admin.get() || vaccine.get().is_none() {
            return;
        }
        filters.track();
        load();
    });

    let on_refresh = Callback::new(move |()| {
        admin.update(AdminState::request_refresh);
        load();
    });

    let on_open_region = Callback::new(move |region_id: i64| {
        let Some(vaccine) = admin.with_untracked(|a| a.vaccine.clone()) else {
            return;
        };
        admin.update(|a| a.open_detail(region_id));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api.client().fetch_region_detail(region_id, &vaccine).await;
            admin.update(|a| a.apply_detail(region_id, result));
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = vaccine;
    });

    let logout = move |_| {
        session.update(|s| s.sign_out(&BrowserStore));
        auth.update(AuthState::clear);
        admin.set(AdminState::default());
    };

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <a href="/" class="brand">"VacciTrack · Administration"</a>
                <div class="admin-page__tools">
                    <a href="/dashboard" class="btn btn--small">"Espace parent"</a>
                    <LanguageSwitcher/>
                    <button class="btn btn--small" type="button" on:click=logout>
                        "Déconnexion"
                    </button>
                </div>
            </header>

            <Show
                when=move || is_admin.get()
                fallback=|| view! { <p class="admin-page__status">"Vérification des droits..."</p> }
            >
                <section class="admin-page__filters">
                    <label>
                        "Vaccin"
                        <select
                            prop:value=move || admin.with(|a| a.vaccine.clone().unwrap_or_default())
                            on:change=move |ev| admin.update(|a| a.select_vaccine(&event_target_value(&ev)))
                        >
                            <option value="">"Choisir un vaccin"</option>
                            {move || {
                                admin
                                    .with(|a| a.vaccines.clone())
                                    .into_iter()
                                    .map(|v| {
                                        let label = v.clone();
                                        view! { <option value=v>{label}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    <Show when=move || admin.with(|a| a.vaccines_error.is_some())>
                        <p class="admin-page__error">
                            {move || admin.with(|a| a.vaccines_error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <label>
                        "Du"
                        <input
                            type="date"
                            prop:value=move || filters.with(|f| f.date_from.clone())
                            on:change=move |ev| filters.update(|f| f.date_from = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Au"
                        <input
                            type="date"
                            prop:value=move || filters.with(|f| f.date_to.clone())
                            on:change=move |ev| filters.update(|f| f.date_to = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Base de calcul"
                        <select on:change=move |ev| {
                            let mode = match event_target_value(&ev).as_str() {
                                "registered_children" => Some(CoverageMode::RegisteredChildren),
                                "vaccination_records" => Some(CoverageMode::VaccinationRecords),
                                _ => None,
                            };
                            filters.update(|f| f.mode = mode);
                        }>
                            <option value="">"Par défaut"</option>
                            <option value="registered_children">"Enfants inscrits"</option>
                            <option value="vaccination_records">"Dossiers de vaccination"</option>
                        </select>
                    </label>
                    <Show when=move || admin.with(|a| a.loading)>
                        <span class="admin-page__loading">"Chargement..."</span>
                    </Show>
                </section>

                <Show when=move || admin.with(|a| a.error.is_some())>
                    <p class="admin-page__error">{move || admin.with(|a| a.error.clone().unwrap_or_default())}</p>
                </Show>

                <div class="admin-page__grid">
                    <CoveragePanel on_refresh=on_refresh on_open_region=on_open_region/>
                    <SupplyCard/>
                </div>
                <TelegramPanel/>
                <RegionSettings/>

                <Show when=move || admin.with(|a| a.detail_id.is_some())>
                    <RegionDetailModal/>
                </Show>
            </Show>
        </div>
    }
}
