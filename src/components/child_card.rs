//! Card for one child in the dashboard list.

use leptos::prelude::*;

use crate::net::types::Child;
use crate::state::session::Session;
use crate::util::child_name::display_name;
use crate::util::dates;

/// Selectable child card with an edit affordance.
#[component]
pub fn ChildCard(
    child: Child,
    #[prop(into)] selected: Signal<bool>,
    on_select: Callback<i64>,
    on_edit: Callback<Child>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let id = child.id;
    let stored_name = child.name.clone();
    let name = move || display_name(&stored_name, session.get().locale);
    let birthdate = child.birthdate.as_deref().map(dates::format_raw).unwrap_or_default();
    let gender = child.gender.clone().unwrap_or_default();

    view! {
        <article
            class="child-card"
            class:child-card--selected=move || selected.get()
            on:click=move |_| on_select.run(id)
        >
            <h3 class="child-card__name">{name}</h3>
            <p class="child-card__meta">
                <span class="child-card__birthdate">{birthdate}</span>
                <span class="child-card__gender">{gender}</span>
            </p>
            <button
                class="child-card__edit"
                type="button"
                title="Edit child"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_edit.run(child.clone());
                }
            >
                "Edit"
            </button>
        </article>
    }
}
