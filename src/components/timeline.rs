//! Vaccination timeline for the selected child.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders from the `TimelineState` context: a progress header, the "coming
//! soon" periods, and the full schedule behind a toggle. Completing a period
//! runs the sequential completion chain against the live API.

use leptos::prelude::*;

use crate::components::period_row::PeriodRow;
use crate::config::ClientConfig;
use crate::state::timeline::TimelineState;
use crate::util::dates;
use crate::util::period::PeriodGroup;

#[component]
pub fn Timeline(#[prop(into)] child_name: Signal<String>) -> impl IntoView {
    let timeline = expect_context::<RwSignal<TimelineState>>();
    let config = expect_context::<ClientConfig>();
    #[cfg(feature = "hydrate")]
    let api = crate::app::use_api();

    let on_complete = Callback::new(move |group: PeriodGroup| {
        let ids = group.completion_targets();
        if ids.is_empty() {
            return;
        }
        let started = timeline.try_update(|t| t.begin_completion(&group.period_label)).unwrap_or(false);
        if !started {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let client = api.client();
            let outcome = crate::state::timeline::complete_period(&client, &ids).await;
            timeline.update(|t| t.finish_completion(outcome, &dates::now_timestamp()));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = ids;
    });

    let progress = move || timeline.with(TimelineState::progress);
    let coming_soon = Memo::new(move |_| {
        timeline.with(|t| t.coming_soon(dates::today(), config.overdue_grace_days, config.coming_soon_limit))
    });
    let groups = move || timeline.with(TimelineState::groups);
    let busy_for = move |label: String| Signal::derive(move || timeline.with(|t| t.is_completing(&label)));

    view! {
        <section class="timeline">
            <Show
                when=move || !timeline.with(|t| t.loading)
                fallback=|| view! { <p class="timeline__status">"Loading schedule..."</p> }
            >
                <Show when=move || timeline.with(|t| t.error.is_some())>
                    <p class="timeline__error">{move || timeline.with(|t| t.error.clone().unwrap_or_default())}</p>
                </Show>
                <Show
                    when=move || timeline.with(|t| !t.items.is_empty())
                    fallback=|| view! { <p class="timeline__status">"No vaccinations scheduled."</p> }
                >
                    <header class="timeline__progress">
                        <h2 class="timeline__child">{move || child_name.get()}</h2>
                        <span class="timeline__count">
                            {move || {
                                let p = progress();
                                format!("{}/{} vaccines done", p.completed, p.total)
                            }}
                        </span>
                        <span class="timeline__percent">{move || format!("{}%", progress().rounded_percent())}</span>
                        <div class="timeline__bar">
                            <div
                                class="timeline__bar-fill"
                                style:width=move || format!("{:.0}%", progress().percent)
                            ></div>
                        </div>
                    </header>

                    <Show when=move || coming_soon.with(|groups| !groups.is_empty())>
                        <h3 class="timeline__heading">"Coming soon"</h3>
                        <ul class="timeline__periods timeline__periods--soon">
                            <For
                                each=move || coming_soon.get()
                                key=|group| (group.period_label.clone(), group.members.len(), group.status)
                                let:group
                            >
                                <PeriodRow
                                    busy=busy_for(group.period_label.clone())
                                    group=group
                                    on_complete=on_complete
                                    start_expanded=true
                                />
                            </For>
                        </ul>
                    </Show>

                    <button
                        class="timeline__toggle"
                        type="button"
                        on:click=move |_| timeline.update(TimelineState::toggle_full_schedule)
                    >
                        {move || {
                            if timeline.with(|t| t.show_full_schedule) {
                                "Hide full schedule"
                            } else {
                                "Show full schedule"
                            }
                        }}
                    </button>

                    <Show when=move || timeline.with(|t| t.show_full_schedule)>
                        <div class="timeline__rail">
                            <div
                                class="timeline__rail-fill"
                                style:height=move || format!("{:.0}%", progress().fill_percent)
                            ></div>
                        </div>
                        <ul class="timeline__periods">
                            <For
                                each=groups
                                key=|group| (group.period_label.clone(), group.status)
                                let:group
                            >
                                <PeriodRow
                                    busy=busy_for(group.period_label.clone())
                                    group=group
                                    on_complete=on_complete
                                />
                            </For>
                        </ul>
                    </Show>
                </Show>
            </Show>
        </section>
    }
}
