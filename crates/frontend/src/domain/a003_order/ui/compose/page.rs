//! Composition d'une nouvelle commande.
//!
//! Un seul écran pour les deux modes de tarification: la grille au
//! détail et la grille au kilo partagent la mécanique de saisie, seul
//! le catalogue chargé change.

use leptos::prelude::*;
use thaw::*;

use contracts::domain::a002_tariff::PricingMode;
use contracts::domain::a003_order::CheckoutState;

use super::catalog_select::CatalogSelect;
use super::checkout_panel::CheckoutPanel;
use super::lines_table::LinesTable;
use super::view_model::ComposeVm;
use crate::domain::a001_client::ui::picker::ClientPicker;
use crate::layout::navigation::{use_nav, View};
use crate::shared::format::{date_input_value, format_money};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};

#[component]
pub fn OrderCompose(mode: PricingMode) -> impl IntoView {
    let vm = ComposeVm::new(mode);
    vm.load_catalog();

    let nav = use_nav();
    let on_success = Callback::new(move |_| nav.open(View::OrdersList));

    let title = match mode {
        PricingMode::ByItem => "Nouvelle commande au détail",
        PricingMode::ByWeight => "Nouvelle commande au kilo",
    };

    view! {
        <PageFrame page_id="a003_order--compose" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    <Badge>
                        {move || vm.draft.with(|d| format!("{} ligne(s)", d.lines.len()))}
                    </Badge>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })
                }}
                {move || {
                    vm.checkout
                        .with(|s| s.failure_message().map(|m| m.to_string()))
                        .map(|m| view! { <div class="alert alert--error">{m}</div> })
                }}

                {move || match vm.checkout.get() {
                    CheckoutState::ReadyToCheckout | CheckoutState::Submitting => view! {
                        <CheckoutPanel vm=vm on_success=on_success />
                    }
                    .into_any(),
                    _ => view! {
                        <div class="compose-layout">
                            <div class="compose-layout__main">
                                <CatalogSelect vm=vm />
                                <LinesTable vm=vm />
                            </div>
                            <div class="compose-layout__side">
                                <ComposeSidePanel vm=vm />
                            </div>
                        </div>
                    }
                    .into_any(),
                }}
            </div>

            {move || {
                if !vm.show_client_picker.get() {
                    return None;
                }
                Some(view! {
                    <div class="modal-overlay">
                        <ClientPicker
                            initial_selected_id=vm.client.get_untracked().map(|c| c.id.value())
                            on_selected=move |client| {
                                vm.set_client(client);
                                vm.show_client_picker.set(false);
                            }
                            on_cancel=move |_| vm.show_client_picker.set(false)
                        />
                    </div>
                })
            }}
        </PageFrame>
    }
}

/// Partie droite de l'écran: client, dates, remise et règlement.
#[component]
fn ComposeSidePanel(vm: ComposeVm) -> impl IntoView {
    let gross = vm.gross();
    let net = vm.net();
    let balance = vm.balance_due();
    let submitting = vm.is_submitting();

    view! {
        <div class="side-panel">
            <div class="form__group">
                <label class="form__label">"Client"</label>
                {move || match vm.client.get() {
                    Some(client) => view! {
                        <div class="client-chip">
                            <span class="client-chip__name">{client.display_name.clone()}</span>
                            {client.phone.clone().map(|p| view! {
                                <span class="client-chip__phone">{p}</span>
                            })}
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| vm.clear_client()
                            >
                                {icon("x")}
                            </Button>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm.show_client_picker.set(true)
                        >
                            {icon("clients")}
                            " Choisir un client"
                        </Button>
                    }
                    .into_any(),
                }}
            </div>

            <div class="form__group">
                <label class="form__label">"Date de réception"</label>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || vm.draft.with(|d| date_input_value(Some(d.reception_date)))
                    on:change=move |ev| vm.set_reception_date(&event_target_value(&ev))
                />
            </div>
            <div class="form__group">
                <label class="form__label">"Livraison prévue"</label>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || vm.draft.with(|d| date_input_value(d.delivery_date))
                    on:change=move |ev| vm.set_delivery_date(&event_target_value(&ev))
                />
            </div>

            <div class="totals-panel">
                <div class="totals-panel__row">
                    <span>"Montant brut"</span>
                    <span>{move || format_money(gross.get())}</span>
                </div>
                <div class="totals-panel__row totals-panel__row--input">
                    <span>"Remise"</span>
                    <input
                        type="number"
                        class="form__input form__input--amount"
                        min="0"
                        prop:value=move || vm.draft.with(|d| d.global_discount.to_string())
                        on:change=move |ev| vm.set_discount_input(&event_target_value(&ev))
                    />
                </div>
                <div class="totals-panel__row totals-panel__row--net">
                    <span>"Net à payer"</span>
                    <span>{move || format_money(net.get())}</span>
                </div>
                <div class="totals-panel__row totals-panel__row--input">
                    <span>"Acompte réglé"</span>
                    <input
                        type="number"
                        class="form__input form__input--amount"
                        min="0"
                        prop:value=move || vm.draft.with(|d| d.amount_paid.to_string())
                        on:change=move |ev| vm.set_paid_input(&event_target_value(&ev))
                    />
                </div>
                <div class="totals-panel__row totals-panel__row--balance">
                    <span>"Solde dû"</span>
                    <span class:amount--due={move || balance.get() > 0.0}>
                        {move || format_money(balance.get())}
                    </span>
                </div>
            </div>

            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| vm.request_checkout()
                disabled=submitting
            >
                {icon("credit-card")}
                " Valider la commande"
            </Button>
        </div>
    }
}
