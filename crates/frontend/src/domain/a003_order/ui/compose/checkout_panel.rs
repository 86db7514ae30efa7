use leptos::prelude::*;
use thaw::*;

use super::view_model::ComposeVm;
use crate::shared::format::{format_date, format_date_opt, format_money};
use crate::shared::icons::icon;

/// Récapitulatif présenté avant l'envoi de la commande au serveur.
///
/// Tant que l'envoi est en cours les deux boutons sont inactifs, ce qui
/// interdit le double envoi de la même commande.
#[component]
pub fn CheckoutPanel(vm: ComposeVm, #[prop(into)] on_success: Callback<()>) -> impl IntoView {
    let submitting = vm.is_submitting();
    let gross = vm.gross();
    let net = vm.net();
    let balance = vm.balance_due();

    let client_name = move || {
        vm.client
            .with(|c| c.as_ref().map(|c| c.display_name.clone()))
            .unwrap_or_else(|| "—".to_string())
    };

    view! {
        <div class="checkout-panel">
            <h3 class="checkout-panel__title">"Confirmer la commande"</h3>

            <div class="detail-grid">
                <div class="detail-grid__item">
                    <span class="detail-grid__label">"Client"</span>
                    <span class="detail-grid__value">{client_name}</span>
                </div>
                <div class="detail-grid__item">
                    <span class="detail-grid__label">"Réception"</span>
                    <span class="detail-grid__value">
                        {move || vm.draft.with(|d| format_date(d.reception_date))}
                    </span>
                </div>
                <div class="detail-grid__item">
                    <span class="detail-grid__label">"Livraison prévue"</span>
                    <span class="detail-grid__value">
                        {move || vm.draft.with(|d| format_date_opt(d.delivery_date))}
                    </span>
                </div>
                <div class="detail-grid__item">
                    <span class="detail-grid__label">"Lignes"</span>
                    <span class="detail-grid__value">
                        {move || vm.draft.with(|d| d.lines.len().to_string())}
                    </span>
                </div>
            </div>

            <div class="totals-panel">
                <div class="totals-panel__row">
                    <span>"Montant brut"</span>
                    <span>{move || format_money(gross.get())}</span>
                </div>
                <div class="totals-panel__row">
                    <span>"Remise"</span>
                    <span>{move || vm.draft.with(|d| format_money(d.global_discount))}</span>
                </div>
                <div class="totals-panel__row totals-panel__row--net">
                    <span>"Net à payer"</span>
                    <span>{move || format_money(net.get())}</span>
                </div>
                <div class="totals-panel__row">
                    <span>"Réglé"</span>
                    <span>{move || vm.draft.with(|d| format_money(d.amount_paid))}</span>
                </div>
                <div class="totals-panel__row totals-panel__row--balance">
                    <span>"Solde dû"</span>
                    <span class:amount--due={move || balance.get() > 0.0}>
                        {move || format_money(balance.get())}
                    </span>
                </div>
            </div>

            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.back_to_composing()
                    disabled=submitting
                >
                    "Retour"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.submit(on_success)
                    disabled=submitting
                >
                    {icon("check")}
                    {move || if submitting.get() { "Enregistrement..." } else { "Confirmer" }}
                </Button>
            </Flex>
        </div>
    }
}
