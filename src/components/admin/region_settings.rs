//! Region settings: bind or clear each region's Telegram chat id.

use leptos::prelude::*;

use crate::state::admin::RegionSettingsState;

#[component]
pub fn RegionSettings() -> impl IntoView {
    let settings = RwSignal::new(RegionSettingsState { loading: true, ..RegionSettingsState::default() });
    #[cfg(feature = "hydrate")]
    let api = crate::app::use_api();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = api.client().fetch_admin_regions().await;
        settings.update(|s| s.apply_load(result));
    });

    let save = move |_| {
        let Some((region_id, chat_id)) = settings.with_untracked(|s| s.editing.clone()) else {
            return;
        };
        if settings.with_untracked(|s| s.saving) {
            return;
        }
        settings.update(|s| s.saving = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api.client().update_region_telegram(region_id, Some(&chat_id)).await;
            settings.update(|s| s.apply_update(result));
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (region_id, chat_id);
    };

    view! {
        <section class="admin-panel region-settings">
            <h2>"Paramètres des régions"</h2>
            <Show when=move || settings.with(|s| s.error.is_some())>
                <p class="admin-panel__error">{move || settings.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !settings.with(|s| s.loading)
                fallback=|| view! { <p class="admin-panel__status">"Chargement des régions..."</p> }
            >
                <table class="region-settings__table">
                    <thead>
                        <tr>
                            <th>"Région"</th>
                            <th>"Population 2024"</th>
                            <th>"Naissances annuelles"</th>
                            <th>"Chat Telegram"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || settings.with(|s| s.regions.clone()) key=|r| (r.id, r.telegram_chat_id.clone()) let:region>
                            {
                                let id = region.id;
                                let editing = move || settings.with(|s| s.editing.as_ref().is_some_and(|(e, _)| *e == id));
                                let current = region.telegram_chat_id.clone().unwrap_or_else(|| "Aucun".to_owned());
                                view! {
                                    <tr>
                                        <td>{region.name.clone()}</td>
                                        <td>{region.population_2024}</td>
                                        <td>{region.estimated_annual_births}</td>
                                        <td>
                                            <Show when=editing fallback=move || current.clone()>
                                                <input
                                                    class="region-settings__input"
                                                    type="text"
                                                    placeholder="Vide pour retirer"
                                                    prop:value=move || settings.with(|s| s.editing.as_ref().map(|(_, v)| v.clone()).unwrap_or_default())
                                                    on:input=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        settings.update(|s| {
                                                            if let Some((_, draft)) = s.editing.as_mut() {
                                                                *draft = value;
                                                            }
                                                        });
                                                    }
                                                />
                                            </Show>
                                        </td>
                                        <td>
                                            <Show
                                                when=editing
                                                fallback=move || {
                                                    view! {
                                                        <button
                                                            class="btn btn--small"
                                                            type="button"
                                                            on:click=move |_| settings.update(|s| s.start_edit(id))
                                                        >
                                                            "Modifier"
                                                        </button>
                                                    }
                                                }
                                            >
                                                <button
                                                    class="btn btn--small btn--primary"
                                                    type="button"
                                                    disabled=move || settings.with(|s| s.saving)
                                                    on:click=save
                                                >
                                                    "Enregistrer"
                                                </button>
                                                <button
                                                    class="btn btn--small"
                                                    type="button"
                                                    on:click=move |_| settings.update(RegionSettingsState::cancel_edit)
                                                >
                                                    "Annuler"
                                                </button>
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            }
                        </For>
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
