//! Parent dashboard: child list, add/edit dialogs, and the selected child's
//! vaccination timeline.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::add_child_modal::AddChildModal;
use crate::components::child_card::ChildCard;
use crate::components::edit_child_modal::EditChildModal;
use crate::components::language_switcher::LanguageSwitcher;
use crate::components::notification_bell::NotificationBell;
use crate::components::timeline::Timeline;
use crate::net::types::Child;
use crate::state::auth::AuthState;
use crate::state::children::ChildrenState;
use crate::state::notifications::NotificationsState;
use crate::state::session::{BrowserStore, Session};
use crate::state::timeline::TimelineState;
use crate::util::auth::install_unauth_redirect;
use crate::util::child_name::display_name;

/// Dashboard page. Redirects to `/signin` without a token.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let children = expect_context::<RwSignal<ChildrenState>>();
    let timeline = expect_context::<RwSignal<TimelineState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    #[cfg(feature = "hydrate")]
    let api = crate::app::use_api();

    install_unauth_redirect(session, use_navigate());

    // Child list, once a token is known.
    let signed_in = Memo::new(move |_| session.with(Session::is_authenticated));
    Effect::new(move || {
        if !signed_in.get() {
            return;
        }
        children.update(ChildrenState::begin_load);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api.client().fetch_children().await;
            children.update(|c| {
                c.apply_load(result);
                if c.selected.is_none() {
                    let first = c.items.first().map(|child| child.id);
                    c.select(first);
                }
            });
        });
    });

    // Timeline follows the selection.
    let selected = Memo::new(move |_| children.with(|c| c.selected));
    Effect::new(move || {
        let child_id = selected.get();
        if timeline.with_untracked(|t| t.child_id == child_id && (t.loading || !t.items.is_empty())) {
            return;
        }
        timeline.update(|t| t.select_child(child_id));

        #[cfg(feature = "hydrate")]
        if let Some(child_id) = child_id {
            leptos::task::spawn_local(async move {
                let result = api.client().fetch_timeline(child_id).await;
                timeline.update(|t| t.apply_load(child_id, result));
            });
        }
    });

    let show_add = RwSignal::new(false);
    let editing = RwSignal::new(None::<Child>);

    let on_select = Callback::new(move |id: i64| children.update(|c| c.select(Some(id))));
    let on_edit = Callback::new(move |child: Child| editing.set(Some(child)));
    let close_add = Callback::new(move |()| show_add.set(false));
    let close_edit = Callback::new(move |()| editing.set(None));

    let logout = move |_| {
        session.update(|s| s.sign_out(&BrowserStore));
        auth.update(AuthState::clear);
        children.set(ChildrenState::default());
        timeline.set(TimelineState::default());
        notifications.set(NotificationsState::default());
    };

    let selected_name = Signal::derive(move || {
        let locale = session.with(|s| s.locale);
        children.with(|c| c.selected_child().map(|child| display_name(&child.name, locale)).unwrap_or_default())
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <a href="/" class="brand">"VacciTrack"</a>
                <div class="dashboard-page__tools">
                    <Show when=move || auth.with(AuthState::is_admin)>
                        <a href="/admin" class="btn btn--small">"Admin"</a>
                    </Show>
                    <NotificationBell/>
                    <LanguageSwitcher/>
                    <button class="btn btn--small" type="button" on:click=logout>
                        "Log out"
                    </button>
                </div>
            </header>

            <section class="dashboard-page__children">
                <h1>"My children"</h1>
                <Show when=move || children.with(|c| c.error.is_some())>
                    <p class="dashboard-page__error">{move || children.with(|c| c.error.clone().unwrap_or_default())}</p>
                </Show>
                <Show
                    when=move || !children.with(|c| c.loading)
                    fallback=|| view! { <p class="dashboard-page__status">"Loading children..."</p> }
                >
                    <div class="dashboard-page__cards">
                        <For each=move || children.with(|c| c.items.clone()) key=|c| (c.id, c.name.clone(), c.gender.clone()) let:child>
                            {
                                let id = child.id;
                                view! {
                                    <ChildCard
                                        child=child
                                        selected=Signal::derive(move || selected.get() == Some(id))
                                        on_select=on_select
                                        on_edit=on_edit
                                    />
                                }
                            }
                        </For>
                        <button
                            class="dashboard-page__new-card"
                            type="button"
                            title="Add a child"
                            on:click=move |_| show_add.set(true)
                        >
                            <svg class="dashboard-page__new-icon" viewBox="0 0 20 20" aria-hidden="true">
                                <line x1="10" y1="4" x2="10" y2="16"></line>
                                <line x1="4" y1="10" x2="16" y2="10"></line>
                            </svg>
                        </button>
                    </div>
                    <Show when=move || children.with(|c| c.items.is_empty() && c.error.is_none())>
                        <p class="dashboard-page__empty">"No children yet. Add one to see their vaccination schedule."</p>
                    </Show>
                </Show>
            </section>

            <Show when=move || selected.get().is_some()>
                <Timeline child_name=selected_name/>
            </Show>

            <Show when=move || show_add.get()>
                <AddChildModal on_close=close_add/>
            </Show>
            {move || editing.get().map(|child| view! { <EditChildModal child=child on_close=close_edit/> })}
        </div>
    }
}
