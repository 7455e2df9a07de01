//! Regional coverage bars and table for the selected vaccine.

use leptos::prelude::*;

use crate::net::types::CoverageRegion;
use crate::state::admin::{AdminState, bar_width, coverage_label};

#[component]
pub fn CoveragePanel(on_refresh: Callback<()>, on_open_region: Callback<i64>) -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let rows = move || admin.with(|a| a.coverage.clone());

    view! {
        <section class="admin-panel coverage-panel">
            <header class="admin-panel__header">
                <h2>"Couverture vaccinale par région"</h2>
                <button
                    class="btn btn--small"
                    type="button"
                    disabled=move || admin.with(|a| a.loading || a.vaccine.is_none())
                    on:click=move |_| on_refresh.run(())
                >
                    "Recalculer"
                </button>
            </header>
            <Show
                when=move || admin.with(|a| !a.coverage.is_empty())
                fallback=|| view! { <p class="admin-panel__empty">"Aucune donnée de couverture."</p> }
            >
                <ul class="coverage-panel__bars">
                    <For each=rows key=|r| r.region_id let:region>
                        <CoverageBar region=region on_open_region=on_open_region/>
                    </For>
                </ul>
                <table class="coverage-panel__table">
                    <thead>
                        <tr>
                            <th>"Région"</th>
                            <th>"Population 2024"</th>
                            <th>"Naissances annuelles"</th>
                            <th>"Enfants inscrits"</th>
                            <th>"Vaccinés"</th>
                            <th>"Couverture"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=rows key=|r| r.region_id let:region>
                            <tr on:click=move |_| on_open_region.run(region.region_id)>
                                <td>{region.region_name.clone()}</td>
                                <td>{region.population_2024}</td>
                                <td>{region.estimated_annual_births}</td>
                                <td>{region.total_registered}</td>
                                <td>{region.vaccinated_count}</td>
                                <td class=format!("coverage--{}", region.color.as_str())>{coverage_label(&region)}</td>
                            </tr>
                        </For>
                    </tbody>
                </table>
            </Show>
        </section>
    }
}

#[component]
fn CoverageBar(region: CoverageRegion, on_open_region: Callback<i64>) -> impl IntoView {
    let id = region.region_id;
    let width = format!("{:.1}%", bar_width(&region));
    let note = region.note.clone().unwrap_or_default();

    view! {
        <li class="coverage-bar" title=note on:click=move |_| on_open_region.run(id)>
            <span class="coverage-bar__name">{region.region_name.clone()}</span>
            <div class="coverage-bar__track">
                <div
                    class=format!("coverage-bar__fill coverage-bar__fill--{}", region.color.as_str())
                    style:width=width
                ></div>
            </div>
            <span class="coverage-bar__value">{coverage_label(&region)}</span>
            <span class="coverage-bar__risk">{region.color.label()}</span>
        </li>
    }
}
