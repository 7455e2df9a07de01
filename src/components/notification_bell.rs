//! Header bell listing pending voice reminders.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads on mount, then polls `GET /notifications` every
//! `ClientConfig::poll_secs`. Also refetches when the tab becomes visible,
//! when the dropdown opens, and when another view bumps `refresh_seq`.
//! On unmount the poll loop stops and the visibility listener is removed.

use leptos::prelude::*;

use crate::app::{Api, use_api};
use crate::config::ClientConfig;
use crate::net::types::NotificationItem;
use crate::state::children::ChildrenState;
use crate::state::notifications::{NotificationsState, audio_src};
use crate::state::session::Session;
use crate::util::child_name::display_name;
use crate::util::dates;
use crate::util::period_label::schedule_label;

/// Refetch the reminder list. No-op without a token.
fn refresh(api: Api, notifications: RwSignal<NotificationsState>) {
    if !api.is_authenticated() {
        return;
    }

    #[cfg(feature = "hydrate")]
    {
        notifications.update(|n| n.loading = true);
        leptos::task::spawn_local(async move {
            let result = api.client().fetch_notifications().await;
            notifications.update(|n| n.apply_load(result));
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = notifications;
}

#[component]
pub fn NotificationBell() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let config = expect_context::<ClientConfig>();
    #[cfg(feature = "hydrate")]
    let poll_secs = config.poll_secs;
    let api = use_api();
    let audio_ref = NodeRef::<leptos::html::Audio>::new();

    // Initial load, sign-in, and explicit refresh requests.
    let refresh_seq = Memo::new(move |_| notifications.with(|n| n.refresh_seq));
    let signed_in = Memo::new(move |_| session.with(Session::is_authenticated));
    Effect::new(move || {
        refresh_seq.track();
        signed_in.track();
        refresh(api, notifications);
    });

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let poll_alive = Arc::new(AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(poll_secs)).await;
                if !poll_alive_task.load(Ordering::Relaxed) {
                    break;
                }
                refresh(api, notifications);
            }
        });

        let visible_alive = poll_alive.clone();
        let listener = send_wrapper::SendWrapper::new(crate::util::document::VisibilityListener::install(move || {
            if visible_alive.load(Ordering::Relaxed) && crate::util::document::is_visible() {
                refresh(api, notifications);
            }
        }));

        on_cleanup(move || {
            poll_alive.store(false, Ordering::Relaxed);
            drop(listener);
        });
    }

    let on_play = Callback::new(move |item: NotificationItem| {
        let src = audio_src(&config, &item.audio_url);
        let playing = notifications.try_update(|n| n.toggle_play(item.id)).flatten();

        #[cfg(feature = "hydrate")]
        {
            let Some(audio) = audio_ref.get_untracked() else {
                return;
            };
            if playing.is_none() {
                let _ = audio.pause();
                return;
            }
            audio.set_src(&src);
            match audio.play() {
                Ok(promise) => leptos::task::spawn_local(async move {
                    if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                        log::warn!("reminder audio failed: {e:?}");
                        notifications.update(|n| n.playing_id = None);
                    }
                }),
                Err(e) => {
                    log::warn!("reminder audio failed: {e:?}");
                    notifications.update(|n| n.playing_id = None);
                }
            }
        }

        #[cfg(not(feature = "hydrate"))]
        let _ = (src, playing);
    });

    // A failed delete leaves the reminder in place.
    let on_delete = Callback::new(move |id: i64| {
        if notifications.with_untracked(|n| n.deleting_id.is_some()) {
            return;
        }
        notifications.update(|n| n.deleting_id = Some(id));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.client().delete_notification(id).await {
                Ok(()) => notifications.update(|n| n.remove(id)),
                Err(e) => notifications.update(|n| {
                    n.deleting_id = None;
                    n.error = Some(e.to_string());
                }),
            }
        });
    });

    let toggle = move |_| {
        notifications.update(NotificationsState::toggle_open);
        if notifications.with_untracked(|n| n.open) {
            refresh(api, notifications);
        }
    };

    view! {
        <div class="notification-bell">
            <button class="notification-bell__button" type="button" aria-label="Reminders" on:click=toggle>
                <svg class="notification-bell__icon" viewBox="0 0 20 20" aria-hidden="true">
                    <path d="M10 2a5 5 0 0 0-5 5v3l-2 3h14l-2-3V7a5 5 0 0 0-5-5z"></path>
                    <path d="M8 15a2 2 0 0 0 4 0"></path>
                </svg>
                {move || {
                    notifications
                        .with(NotificationsState::badge_label)
                        .map(|label| view! { <span class="notification-bell__badge">{label}</span> })
                }}
            </button>
            <audio node_ref=audio_ref on:ended=move |_| notifications.update(|n| n.playing_id = None)></audio>
            <Show when=move || notifications.with(|n| n.open)>
                <div class="notification-bell__panel">
                    <Show when=move || notifications.with(|n| n.error.is_some())>
                        <p class="notification-bell__error">
                            {move || notifications.with(|n| n.error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <Show
                        when=move || notifications.with(|n| n.count() > 0)
                        fallback=|| view! { <p class="notification-bell__empty">"No reminders."</p> }
                    >
                        <ul class="notification-bell__list">
                            <For
                                each=move || notifications.with(|n| n.items.clone())
                                key=|item| item.id
                                let:item
                            >
                                <ReminderRow item=item on_play=on_play on_delete=on_delete/>
                            </For>
                        </ul>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ReminderRow(item: NotificationItem, on_play: Callback<NotificationItem>, on_delete: Callback<i64>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let children = expect_context::<RwSignal<ChildrenState>>();

    let id = item.id;
    let child_id = item.child_id;
    let stored_name = item.child_name.clone();
    let raw_period = item.period_label.clone();
    let child_name = move || display_name(&stored_name, session.get().locale);
    let period = move || schedule_label(&raw_period, session.get().locale);
    let vaccines = if item.vaccine_names.is_empty() { item.vaccine_name.clone() } else { item.vaccine_names.join(", ") };
    let due = item.due_date.as_deref().map(dates::format_raw).unwrap_or_default();
    let playing = move || notifications.with(|n| n.playing_id == Some(id));
    let deleting = move || notifications.with(|n| n.deleting_id == Some(id));

    let view_timeline = move |_| {
        children.update(|c| c.select(Some(child_id)));
        notifications.update(|n| n.open = false);
    };

    view! {
        <li class="reminder" class:reminder--playing=playing>
            <div class="reminder__body">
                <strong class="reminder__child">{child_name}</strong>
                <span class="reminder__period">{period}</span>
                <span class="reminder__vaccines">{vaccines}</span>
                <span class="reminder__due">{due}</span>
            </div>
            <div class="reminder__actions">
                <button class="btn btn--small" type="button" on:click=move |_| on_play.run(item.clone())>
                    {move || if playing() { "Pause" } else { "Play" }}
                </button>
                <button class="btn btn--small" type="button" on:click=view_timeline>
                    "View timeline"
                </button>
                <button
                    class="btn btn--small btn--danger"
                    type="button"
                    disabled=deleting
                    on:click=move |_| on_delete.run(id)
                >
                    {move || if deleting() { "Deleting..." } else { "Delete" }}
                </button>
            </div>
        </li>
    }
}
