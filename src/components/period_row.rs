//! Collapsible row for one schedule period.

use leptos::prelude::*;

use crate::net::types::VaccinationStatus;
use crate::state::session::Session;
use crate::util::dates::{self, DueLabel};
use crate::util::period::PeriodGroup;
use crate::util::period_label::{period_label_key, schedule_label};

/// One period group: label, status badge, relative due date, member vaccines
/// and the "mark period complete" action.
#[component]
pub fn PeriodRow(
    group: PeriodGroup,
    /// A completion for this period is in flight.
    #[prop(into)]
    busy: Signal<bool>,
    on_complete: Callback<PeriodGroup>,
    #[prop(optional)] start_expanded: bool,
) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let expanded = RwSignal::new(start_expanded);

    let status = group.status;
    let raw_label = group.period_label.clone();
    let i18n_key = format!("schedule.{}", period_label_key(&raw_label));
    let label = move || schedule_label(&raw_label, session.get().locale);
    let due_text = DueLabel::from_due(group.due_date(), dates::today()).text(status == VaccinationStatus::Overdue);
    let nothing_to_complete = group.all_completed() || group.completion_targets().is_empty();
    let summary = group.vaccine_names().join(", ");
    let members = group.members.clone();

    let on_click = move |_: leptos::ev::MouseEvent| on_complete.run(group.clone());

    view! {
        <li class=format!("period-row period-row--{}", status.as_str())>
            <button
                class="period-row__header"
                type="button"
                aria-expanded=move || expanded.get().to_string()
                on:click=move |_| expanded.update(|v| *v = !*v)
            >
                <span class="period-row__label" data-i18n-key=i18n_key>{label}</span>
                <span class=format!("badge badge--{}", status.as_str())>{status.label()}</span>
                <span class="period-row__due">{due_text}</span>
                <span class="period-row__summary">{summary}</span>
            </button>
            <Show when=move || expanded.get()>
                <ul class="period-row__vaccines">
                    {members
                        .clone()
                        .into_iter()
                        .map(|record| {
                            view! {
                                <li class="period-row__vaccine" class:period-row__vaccine--done=record.completed>
                                    <span class="period-row__vaccine-name">{record.vaccine_name}</span>
                                    <span class="period-row__vaccine-status">{record.status.label()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    class="period-row__complete"
                    type="button"
                    disabled=move || nothing_to_complete || busy.get()
                    on:click=on_click.clone()
                >
                    {move || if busy.get() { "Saving..." } else { "Mark period complete" }}
                </button>
            </Show>
        </li>
    }
}
