//! National supply projection card.

use leptos::prelude::*;

use crate::state::admin::{AdminState, supply_gap, supply_gap_label, supply_status};

#[component]
pub fn SupplyCard() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();

    view! {
        {move || {
            admin
                .with(|a| a.supply.clone())
                .map(|supply| {
                    let national = supply.national;
                    let gap = supply_gap(&national);
                    view! {
                        <section class="admin-panel supply-card" class:supply-card--short=gap < 0.0>
                            <h2>"Approvisionnement national"</h2>
                            {supply
                                .data_quality_warning
                                .then(|| {
                                    view! {
                                        <p class="supply-card__warning">
                                            "Données de stock incomplètes : projection indicative."
                                        </p>
                                    }
                                })}
                            <dl class="supply-card__figures">
                                <dt>"Stock actuel"</dt>
                                <dd>{national.current_stock}</dd>
                                <dt>"Besoin projeté"</dt>
                                <dd>{national.projected_need_total}</dd>
                                <dt>"Besoin avec marge"</dt>
                                <dd>{national.projected_need_with_buffer_total}</dd>
                                <dt>"Écart"</dt>
                                <dd>{supply_gap_label(gap)}</dd>
                            </dl>
                            <p class="supply-card__status">{supply_status(gap)}</p>
                            <table class="supply-card__regions">
                                <thead>
                                    <tr>
                                        <th>"Région"</th>
                                        <th>"Naissances"</th>
                                        <th>"Besoin"</th>
                                        <th>"Avec marge"</th>
                                        <th>"Stock"</th>
                                        <th>"Bilan"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {supply
                                        .regions
                                        .into_iter()
                                        .map(|r| {
                                            view! {
                                                <tr>
                                                    <td>{r.region_name}</td>
                                                    <td>{r.births}</td>
                                                    <td>{r.projected_need}</td>
                                                    <td>{r.with_buffer}</td>
                                                    <td>{r.current_stock}</td>
                                                    <td>{r.shortage_or_surplus}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </section>
                    }
                })
        }}
    }
}
