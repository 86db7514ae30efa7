use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::a003_order::{Order, OrderType};
use contracts::domain::common::OrderId;

use crate::domain::a003_order::api;
use crate::shared::format::{format_date_opt, format_money, format_weight};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::shared::receipt::{download_receipt, open_receipt};

fn receipt_filename(order: &Order) -> String {
    format!("recu-{}.pdf", order.number)
}

/// Fiche d'une commande enregistrée: lignes, montants, reçu, règlements.
#[component]
pub fn OrderDetail(order_id: OrderId, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let (order, set_order) = signal::<Option<Order>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (receipt_busy, set_receipt_busy) = signal(false);
    let (show_payment, set_show_payment) = signal(false);

    let load_order = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::fetch_order(order_id).await {
                Ok(data) => {
                    set_order.set(Some(data));
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("Chargement de la commande impossible: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    let (is_loaded, set_is_loaded) = signal(false);
    Effect::new(move |_| {
        if !is_loaded.get_untracked() {
            set_is_loaded.set(true);
            load_order();
        }
    });

    // Print and download share the fetch, only the final step differs.
    let run_receipt = move |open: bool| {
        let filename = order
            .get_untracked()
            .map(|o| receipt_filename(&o))
            .unwrap_or_else(|| "recu.pdf".to_string());
        spawn_local(async move {
            set_receipt_busy.set(true);
            set_error.set(None);
            match api::fetch_receipt(order_id).await {
                Ok(bytes) => {
                    let shown = if open {
                        open_receipt(&bytes, &filename)
                    } else {
                        download_receipt(&bytes, &filename)
                    };
                    if let Err(e) = shown {
                        set_error.set(Some(e));
                    }
                    set_receipt_busy.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_receipt_busy.set(false);
                }
            }
        });
    };

    view! {
        <PageFrame page_id="a003_order--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || order.get()
                            .map(|o| format!("Commande {}", o.number))
                            .unwrap_or_else(|| "Commande".to_string())}
                    </h1>
                    {move || order.get().map(|o| view! {
                        <Badge>{o.order_type.label()}</Badge>
                    })}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| run_receipt(true)
                        disabled=Signal::derive(move || receipt_busy.get() || order.get().is_none())
                    >
                        {icon("printer")}
                        " Imprimer le reçu"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| run_receipt(false)
                        disabled=Signal::derive(move || receipt_busy.get() || order.get().is_none())
                    >
                        " Télécharger"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_payment.set(true)
                        disabled=Signal::derive(move || {
                            order.get().map(|o| o.balance_due() <= 0.0).unwrap_or(true)
                        })
                    >
                        {icon("credit-card")}
                        " Encaisser un règlement"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                {move || {
                    if loading.get() {
                        return view! { <div class="empty-state">"Chargement..."</div> }.into_any();
                    }
                    let Some(order) = order.get() else {
                        return view! { <span></span> }.into_any();
                    };

                    let by_weight = order.order_type == OrderType::ByWeight;
                    let balance = order.balance_due();

                    view! {
                        <div class="detail-grid">
                            <div class="detail-grid__item">
                                <span class="detail-grid__label">"Client"</span>
                                <span class="detail-grid__value">
                                    {if order.client_name.is_empty() {
                                        "—".to_string()
                                    } else {
                                        order.client_name.clone()
                                    }}
                                </span>
                            </div>
                            <div class="detail-grid__item">
                                <span class="detail-grid__label">"Réception"</span>
                                <span class="detail-grid__value">{format_date_opt(order.reception_date)}</span>
                            </div>
                            <div class="detail-grid__item">
                                <span class="detail-grid__label">"Livraison prévue"</span>
                                <span class="detail-grid__value">{format_date_opt(order.delivery_date)}</span>
                            </div>
                            <div class="detail-grid__item">
                                <span class="detail-grid__label">"Statut"</span>
                                <span class="detail-grid__value">
                                    {if order.status_label.is_empty() {
                                        "—".to_string()
                                    } else {
                                        order.status_label.clone()
                                    }}
                                </span>
                            </div>
                        </div>

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
                                    </tr>
                                </thead>
                                <tbody>
                                    {order.lines.iter().map(|line| view! {
                                        <tr>
                                            <td class="data-table__cell--primary">{line.label.clone()}</td>
                                            <td>{line.service_label.clone()}</td>
                                            <td class="data-table__cell--amount">{format_money(line.unit_price)}</td>
                                            <td class="data-table__cell--amount">
                                                {if by_weight {
                                                    format_weight(line.quantity)
                                                } else {
                                                    format!("{:.0}", line.quantity)
                                                }}
                                            </td>
                                            <td class="data-table__cell--amount">{format_money(line.line_total)}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>

                        <div class="totals-panel">
                            <div class="totals-panel__row">
                                <span>"Montant brut"</span>
                                <span>{format_money(order.gross)}</span>
                            </div>
                            <div class="totals-panel__row">
                                <span>"Remise"</span>
                                <span>{format_money(order.discount)}</span>
                            </div>
                            <div class="totals-panel__row totals-panel__row--net">
                                <span>"Net à payer"</span>
                                <span>{format_money(order.net)}</span>
                            </div>
                            <div class="totals-panel__row">
                                <span>"Réglé"</span>
                                <span>{format_money(order.paid)}</span>
                            </div>
                            <div class="totals-panel__row totals-panel__row--balance">
                                <span>"Solde dû"</span>
                                <span class:amount--due={move || balance > 0.0}>
                                    {format_money(balance)}
                                </span>
                            </div>
                        </div>
                    }.into_any()
                }}
            </div>

            {move || {
                if !show_payment.get() {
                    return None;
                }
                order.get().map(|o| view! {
                    <PaymentModal
                        order_id=o.id
                        balance=o.balance_due()
                        on_close=Callback::new(move |_| set_show_payment.set(false))
                        on_saved=Callback::new(move |_| {
                            set_show_payment.set(false);
                            load_order();
                        })
                    />
                })
            }}
        </PageFrame>
    }
}

/// Encaissement d'un règlement partiel ou total sur une commande.
///
/// Le montant saisi est ramené dans [0, solde] dès la sortie du champ.
#[component]
fn PaymentModal(
    order_id: OrderId,
    balance: f64,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let (amount_text, set_amount_text) = signal(format!("{:.0}", balance));
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let clamp_amount = move |raw: String| {
        let value = raw.trim().replace(',', ".").parse::<f64>().unwrap_or(0.0);
        let clamped = value.clamp(0.0, balance);
        set_amount_text.set(format!("{:.0}", clamped));
    };

    let on_save = move |_| {
        let amount = amount_text
            .get()
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .unwrap_or(0.0)
            .clamp(0.0, balance);
        if amount <= 0.0 {
            set_error.set(Some("Saisissez un montant supérieur à zéro".to_string()));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::record_payment(order_id, amount).await {
                Ok(_) => on_saved.run(()),
                Err(e) => {
                    set_error.set(Some(e));
                    set_saving.set(false);
                }
            }
        });
    };

    let footer: ChildrenFn = Arc::new(move || {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| on_close.run(())
                disabled=Signal::derive(move || saving.get())
            >
                "Annuler"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=on_save
                disabled=Signal::derive(move || saving.get())
            >
                {move || if saving.get() { "Enregistrement..." } else { "Encaisser" }}
            </Button>
        }
        .into_any()
    });

    view! {
        <Modal
            title="Encaisser un règlement".to_string()
            on_close=on_close
            footer=footer
        >
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <label class="form__label">
                    {format!("Montant (solde dû: {})", format_money(balance))}
                </label>
                <input
                    type="number"
                    class="form__input"
                    min="0"
                    step="1"
                    prop:value=move || amount_text.get()
                    on:change=move |ev| clamp_amount(event_target_value(&ev))
                />
            </div>
        </Modal>
    }
}
