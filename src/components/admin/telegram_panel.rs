//! Telegram broadcast panel: pick regions, generate previews, send.

use leptos::prelude::*;

use crate::net::types::{TelegramLanguage, TelegramTemplate};
use crate::state::admin::{AdminState, TelegramDraft};

#[component]
pub fn TelegramPanel() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    #[cfg(feature = "hydrate")]
    let api = crate::app::use_api();
    let draft = RwSignal::new(TelegramDraft::default());

    let region_name = move |id: i64| {
        admin.with(|a| a.coverage.iter().find(|r| r.region_id == id).map(|r| r.region_name.clone()))
            .unwrap_or_else(|| format!("Région {id}"))
    };

    let run = move |send: bool| {
        if draft.with_untracked(|d| d.busy) {
            return;
        }
        let request = match draft.with_untracked(|d| d.request(admin.with_untracked(|a| a.vaccine.clone()).as_deref())) {
            Ok(request) => request,
            Err(e) => {
                draft.update(|d| d.error = Some(e.to_string()));
                return;
            }
        };
        draft.update(|d| {
            d.busy = true;
            d.error = None;
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let client = api.client();
            if send {
                let result = client.telegram_send(&request).await;
                draft.update(|d| d.apply_send(result));
            } else {
                let result = client.telegram_generate(&request).await;
                draft.update(|d| d.apply_generate(result));
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (send, request);
            draft.update(|d| d.busy = false);
        }
    };

    view! {
        <section class="admin-panel telegram-panel">
            <h2>"Alertes Telegram"</h2>
            <fieldset class="telegram-panel__regions">
                <legend>"Régions"</legend>
                <For each=move || admin.with(|a| a.coverage.clone()) key=|r| r.region_id let:region>
                    {
                        let id = region.region_id;
                        view! {
                            <label class="telegram-panel__region">
                                <input
                                    type="checkbox"
                                    prop:checked=move || draft.with(|d| d.selected.contains(&id))
                                    on:change=move |_| draft.update(|d| d.toggle_region(id))
                                />
                                {region.region_name.clone()}
                            </label>
                        }
                    }
                </For>
            </fieldset>
            <div class="telegram-panel__options">
                <select on:change=move |ev| {
                    let language = if event_target_value(&ev) == "darija" { TelegramLanguage::Darija } else { TelegramLanguage::Fr };
                    draft.update(|d| d.language = language);
                }>
                    <option value="fr">"Français"</option>
                    <option value="darija">"Darija"</option>
                </select>
                <select on:change=move |ev| {
                    let template = if event_target_value(&ev) == "urgent" { TelegramTemplate::Urgent } else { TelegramTemplate::Summary };
                    draft.update(|d| d.template = template);
                }>
                    <option value="summary">"Synthèse"</option>
                    <option value="urgent">"Urgent"</option>
                </select>
                <button class="btn" type="button" disabled=move || draft.with(|d| d.busy) on:click=move |_| run(false)>
                    "Générer les aperçus"
                </button>
                <button
                    class="btn btn--primary"
                    type="button"
                    disabled=move || draft.with(|d| d.busy || d.sendable() == 0)
                    on:click=move |_| run(true)
                >
                    "Envoyer"
                </button>
            </div>
            <Show when=move || draft.with(|d| d.error.is_some())>
                <p class="admin-panel__error">{move || draft.with(|d| d.error.clone().unwrap_or_default())}</p>
            </Show>
            <ul class="telegram-panel__previews">
                <For each=move || draft.with(|d| d.previews.clone()) key=|p| p.region_id let:preview>
                    <li class="telegram-preview" class:telegram-preview--blocked=!preview.can_send>
                        <h4>{preview.region_name.clone()}</h4>
                        <pre class="telegram-preview__text">{preview.preview.clone()}</pre>
                        {preview.error.clone().map(|e| view! { <p class="telegram-preview__error">{e}</p> })}
                    </li>
                </For>
            </ul>
            <Show when=move || draft.with(|d| !d.results.is_empty())>
                <p class="telegram-panel__summary">
                    {move || draft.with(|d| format!("{}/{} messages envoyés", d.delivered(), d.results.len()))}
                </p>
                <ul class="telegram-panel__results">
                    {move || {
                        draft
                            .with(|d| d.results.clone())
                            .into_iter()
                            .map(|r| {
                                let status = if r.success { "Envoyé".to_owned() } else { r.error.unwrap_or_else(|| "Échec".to_owned()) };
                                view! {
                                    <li class:telegram-result--failed=!r.success>
                                        {format!("{} : {status}", region_name(r.region_id))}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </section>
    }
}
