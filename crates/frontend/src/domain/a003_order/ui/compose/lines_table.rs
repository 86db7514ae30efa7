use leptos::prelude::*;
use thaw::*;

use contracts::domain::a002_tariff::PricingMode;

use super::view_model::ComposeVm;
use crate::shared::format::{format_money, format_weight};
use crate::shared::icons::icon;

/// Lignes du brouillon en cours. Une ligne ne se modifie pas, elle se
/// supprime et se ressaisit.
#[component]
pub fn LinesTable(vm: ComposeVm) -> impl IntoView {
    let by_weight = vm.mode == PricingMode::ByWeight;
    let disabled = vm.is_submitting();

    view! {
        <div class="table-wrapper">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{if by_weight { "Tranche" } else { "Article" }}</th>
                        <th>"Service"</th>
                        <th class="data-table__cell--amount">"Prix unitaire"</th>
                        <th class="data-table__cell--amount">
                            {if by_weight { "Poids (kg)" } else { "Quantité" }}
                        </th>
                        <th class="data-table__cell--amount">"Montant"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || vm.draft.with(|d| d.lines.clone())
                        key=|line| line.id
                        children=move |line| {
                            let line_id = line.id;
                            let quantity = if by_weight {
                                format_weight(line.quantity)
                            } else {
                                format!("{:.0}", line.quantity)
                            };
                            view! {
                                <tr>
                                    <td class="data-table__cell--primary">{line.category_label.clone()}</td>
                                    <td>{line.service_label.clone()}</td>
                                    <td class="data-table__cell--amount">{format_money(line.unit_price)}</td>
                                    <td class="data-table__cell--amount">{quantity}</td>
                                    <td class="data-table__cell--amount">{format_money(line.line_total)}</td>
                                    <td class="data-table__cell--actions">
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| vm.remove_line(line_id)
                                            disabled=disabled
                                        >
                                            {icon("trash")}
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            {move || {
                if vm.draft.with(|d| d.lines.is_empty()) {
                    view! {
                        <div class="empty-state">"Aucune ligne pour l'instant"</div>
                    }.into_any()
                } else {
                    view! { <span></span> }.into_any()
                }
            }}
        </div>
    }
}
