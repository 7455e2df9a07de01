//! Modal dialog for registering another child from the dashboard.

use leptos::prelude::*;

use crate::state::child_form::ChildDraft;
use crate::state::children::ChildrenState;
use crate::state::notifications::NotificationsState;
use crate::state::signup::GENDERS;
use crate::util::dates;

/// Add-child form. On success the child joins the list, becomes selected,
/// and the bell refetches since the backend scheduled new reminders.
#[component]
pub fn AddChildModal(on_close: Callback<()>) -> impl IntoView {
    let children = expect_context::<RwSignal<ChildrenState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    #[cfg(feature = "hydrate")]
    let api = crate::app::use_api();

    let draft = RwSignal::new(ChildDraft::default());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let payload = match draft.get_untracked().validate(dates::today()) {
            Ok(payload) => payload,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        saving.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api.client().create_child(&payload).await;
            saving.set(false);
            match result {
                Ok(child) => {
                    let id = child.id;
                    children.update(|c| {
                        c.push(child);
                        c.select(Some(id));
                    });
                    notifications.update(NotificationsState::request_refresh);
                    on_close.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, children, notifications);
            saving.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form class="dialog" on:click=move |ev| ev.stop_propagation() on:submit=submit>
                <h2>"Add a child"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Birthdate"
                    <input
                        class="dialog__input"
                        type="date"
                        max=move || dates::today().to_string()
                        prop:value=move || draft.with(|d| d.birthdate.clone())
                        on:input=move |ev| draft.update(|d| d.birthdate = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Gender"
                    <select
                        class="dialog__input"
                        prop:value=move || draft.with(|d| d.gender.clone())
                        on:change=move |ev| draft.update(|d| d.gender = event_target_value(&ev))
                    >
                        <option value="">"Not specified"</option>
                        {GENDERS.iter().map(|g| view! { <option value=*g>{*g}</option> }).collect_view()}
                    </select>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || saving.get() || !draft.with(ChildDraft::is_complete)
                    >
                        {move || if saving.get() { "Saving..." } else { "Add child" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
