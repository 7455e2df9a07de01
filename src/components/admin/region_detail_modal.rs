//! Drill-down modal for one region: registered children, per-period
//! completion and the weekly trend.

use leptos::prelude::*;

use crate::net::types::RegionDetail;
use crate::state::admin::AdminState;
use crate::util::dates;

#[component]
pub fn RegionDetailModal() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let close = move |_| admin.update(AdminState::close_detail);

    view! {
        <div class="dialog-backdrop" on:click=close>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                {move || match admin.with(|a| (a.detail.clone(), a.detail_error.clone())) {
                    (Some(detail), _) => view! { <DetailBody detail=detail/> }.into_any(),
                    (None, Some(error)) => view! { <p class="dialog__error">{error}</p> }.into_any(),
                    (None, None) => view! { <p class="dialog__status">"Chargement..."</p> }.into_any(),
                }}
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=close>
                        "Fermer"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DetailBody(detail: RegionDetail) -> impl IntoView {
    let peak = detail.trend_weeks.iter().map(|w| w.completed_count).max().unwrap_or(0).max(1);

    view! {
        <h2>{format!("{} · {}", detail.region_name, detail.vaccine_name)}</h2>
        <p class="region-detail__recent">
            {format!("{} vaccinations sur les 30 derniers jours", detail.last_30_days_count)}
        </p>

        <h3>"Progression par période"</h3>
        <table class="region-detail__periods">
            <tbody>
                {detail
                    .by_period
                    .into_iter()
                    .map(|p| {
                        view! {
                            <tr>
                                <td>{p.period_label}</td>
                                <td>{format!("{}/{}", p.completed, p.total)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>

        <h3>"Tendance hebdomadaire"</h3>
        <ol class="region-detail__trend">
            {detail
                .trend_weeks
                .into_iter()
                .map(|w| {
                    #[allow(clippy::cast_precision_loss)]
                    let height = w.completed_count as f64 * 100.0 / peak as f64;
                    view! {
                        <li class="region-detail__week" title=dates::format_raw(&w.week_end)>
                            <div class="region-detail__week-bar" style:height=format!("{height:.0}%")></div>
                            <span class="region-detail__week-count">{w.completed_count}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>

        <h3>{format!("Enfants inscrits ({})", detail.registered_children.len())}</h3>
        <ul class="region-detail__children">
            {detail
                .registered_children
                .into_iter()
                .map(|c| {
                    let born = c.birthdate.as_deref().map(dates::format_raw).unwrap_or_default();
                    view! {
                        <li>
                            <span>{c.name}</span>
                            <span class="region-detail__born">{born}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
