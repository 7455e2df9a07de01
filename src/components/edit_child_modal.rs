//! Modal dialog for renaming, changing the gender of, or deleting a child.

use leptos::prelude::*;

use crate::net::types::Child;
use crate::state::child_form::EditDraft;
use crate::state::children::ChildrenState;
use crate::state::notifications::NotificationsState;
use crate::state::signup::GENDERS;

#[component]
pub fn EditChildModal(child: Child, on_close: Callback<()>) -> impl IntoView {
    let children = expect_context::<RwSignal<ChildrenState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    #[cfg(feature = "hydrate")]
    let api = crate::app::use_api();

    let draft = RwSignal::new(EditDraft::from_child(&child));
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        let payload = match current.validate() {
            Ok(payload) => payload,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api.client().update_child(current.child_id, &payload).await;
            busy.set(false);
            match result {
                Ok(updated) => {
                    children.update(|c| c.replace(updated));
                    on_close.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current, payload);
            busy.set(false);
        }
    };

    let delete = move |_| {
        if busy.get_untracked() {
            return;
        }
        if !draft.with_untracked(|d| d.confirm_delete) {
            draft.update(|d| d.confirm_delete = true);
            return;
        }
        let child_id = draft.with_untracked(|d| d.child_id);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api.client().delete_child(child_id).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    children.update(|c| c.remove(child_id));
                    notifications.update(NotificationsState::request_refresh);
                    on_close.run(());
                }
                Err(e) => {
                    draft.update(|d| d.confirm_delete = false);
                    error.set(Some(e.to_string()));
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (child_id, children, notifications);
            busy.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form class="dialog" on:click=move |ev| ev.stop_propagation() on:submit=save>
                <h2>"Edit child"</h2>
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
                    <button class="btn btn--danger" type="button" disabled=move || busy.get() on:click=delete>
                        {move || {
                            if draft.with(|d| d.confirm_delete) { "Confirm delete" } else { "Delete" }
                        }}
                    </button>
                    <button class="btn" type="button" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
