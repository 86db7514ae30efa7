mod state;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::a003_order::Order;

use crate::domain::a003_order::api;
use crate::layout::navigation::{use_nav, View};
use crate::shared::format::{format_date_opt, format_money, parse_date_input};
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, sort_list, Sortable};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use state::create_state;

impl Sortable for Order {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "number" => self.number.cmp(&other.number),
            "client_name" => self
                .client_name
                .to_lowercase()
                .cmp(&other.client_name.to_lowercase()),
            "order_type" => self.order_type.label().cmp(other.order_type.label()),
            "status_label" => self.status_label.cmp(&other.status_label),
            "delivery_date" => self.delivery_date.cmp(&other.delivery_date),
            "net" => self.net.partial_cmp(&other.net).unwrap_or(std::cmp::Ordering::Equal),
            "balance" => self
                .balance_due()
                .partial_cmp(&other.balance_due())
                .unwrap_or(std::cmp::Ordering::Equal),
            _ => self.reception_date.cmp(&other.reception_date),
        }
    }
}

/// Journal des commandes enregistrées.
#[component]
pub fn OrderList() -> impl IntoView {
    let nav = use_nav();
    let state = create_state();

    let (orders, set_orders) = signal::<Vec<Order>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load_orders = move || {
        let (from, to, query) = state.with_untracked(|s| {
            (
                parse_date_input(&s.date_from),
                parse_date_input(&s.date_to),
                s.search_query.clone(),
            )
        });
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::fetch_orders(from, to, &query).await {
                Ok(items) => {
                    set_orders.set(items);
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("Chargement des commandes impossible: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            state.update(|s| s.is_loaded = true);
            load_orders();
        }
    });

    let sorted_orders = move || {
        let mut items = orders.get();
        let (field, ascending) = state.with(|s| (s.sort_field.clone(), s.sort_ascending));
        sort_list(&mut items, &field, ascending);
        items
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let sort_header = move |label: &'static str, field: &'static str| {
        state.with(|s| {
            format!(
                "{}{}",
                label,
                get_sort_indicator(&s.sort_field, field, s.sort_ascending)
            )
        })
    };

    view! {
        <PageFrame page_id="a003_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Commandes"</h1>
                    <Badge>
                        {move || orders.get().len().to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| nav.open(View::NewOrderByItem)
                    >
                        {icon("plus")}
                        " Nouvelle commande"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_orders()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Chargement..." } else { " Actualiser" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div class="form__group">
                                <label class="form__label">"Réception du"</label>
                                <input
                                    type="date"
                                    class="form__input"
                                    prop:value=move || state.with(|s| s.date_from.clone())
                                    on:change=move |ev| {
                                        state.update(|s| s.date_from = event_target_value(&ev));
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"au"</label>
                                <input
                                    type="date"
                                    class="form__input"
                                    prop:value=move || state.with(|s| s.date_to.clone())
                                    on:change=move |ev| {
                                        state.update(|s| s.date_to = event_target_value(&ev));
                                    }
                                />
                            </div>
                            <div class="form__group form__group--grow">
                                <label class="form__label">"Recherche"</label>
                                <input
                                    type="text"
                                    class="form__input"
                                    placeholder="N° de commande ou client..."
                                    prop:value=move || state.with(|s| s.search_query.clone())
                                    on:input=move |ev| {
                                        state.update(|s| s.search_query = event_target_value(&ev));
                                    }
                                    on:keydown=move |ev| {
                                        if ev.key() == "Enter" {
                                            load_orders();
                                        }
                                    }
                                />
                            </div>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| load_orders()
                                disabled=Signal::derive(move || loading.get())
                            >
                                {icon("search")}
                                " Rechercher"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    state.update(|s| {
                                        s.date_from = String::new();
                                        s.date_to = String::new();
                                        s.search_query = String::new();
                                    });
                                    load_orders();
                                }
                            >
                                "Réinitialiser"
                            </Button>
                        </Flex>
                    </div>
                </div>

                {move || {
                    let list = sorted_orders();
                    if loading.get() || list.is_empty() {
                        return None;
                    }
                    let total_net: f64 = list.iter().map(|o| o.net).sum();
                    let total_due: f64 = list.iter().map(|o| o.balance_due()).sum();
                    Some(view! {
                        <div class="list-summary">
                            "Total: " {list.len().to_string()} " commande(s) | "
                            "Net: " {format_money(total_net)} " | "
                            "Solde dû: " {format_money(total_due)}
                        </div>
                    })
                }}

                <div class="table-wrapper">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th on:click=toggle_sort("number")>
                                    {move || sort_header("N°", "number")}
                                </th>
                                <th on:click=toggle_sort("reception_date")>
                                    {move || sort_header("Réception", "reception_date")}
                                </th>
                                <th on:click=toggle_sort("delivery_date")>
                                    {move || sort_header("Livraison", "delivery_date")}
                                </th>
                                <th on:click=toggle_sort("client_name")>
                                    {move || sort_header("Client", "client_name")}
                                </th>
                                <th on:click=toggle_sort("order_type")>
                                    {move || sort_header("Type", "order_type")}
                                </th>
                                <th on:click=toggle_sort("status_label")>
                                    {move || sort_header("Statut", "status_label")}
                                </th>
                                <th class="data-table__cell--amount" on:click=toggle_sort("net")>
                                    {move || sort_header("Net", "net")}
                                </th>
                                <th class="data-table__cell--amount" on:click=toggle_sort("balance")>
                                    {move || sort_header("Solde", "balance")}
                                </th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || sorted_orders().into_iter().map(|order| {
                                let order_id = order.id;
                                let balance = order.balance_due();
                                view! {
                                    <tr
                                        class="data-table__row--clickable"
                                        on:click=move |_| nav.open(View::OrderDetail(order_id))
                                    >
                                        <td class="data-table__cell--primary">{order.number.clone()}</td>
                                        <td>{format_date_opt(order.reception_date)}</td>
                                        <td>{format_date_opt(order.delivery_date)}</td>
                                        <td>{order.client_name.clone()}</td>
                                        <td>{order.order_type.label()}</td>
                                        <td>{order.status_label.clone()}</td>
                                        <td class="data-table__cell--amount">{format_money(order.net)}</td>
                                        <td class="data-table__cell--amount">
                                            <span class:amount--due={move || balance > 0.0}>
                                                {format_money(balance)}
                                            </span>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>

                    {move || {
                        if loading.get() {
                            view! { <div class="empty-state">"Chargement des commandes..."</div> }.into_any()
                        } else if sorted_orders().is_empty() {
                            view! { <div class="empty-state">"Aucune commande sur la période"</div> }.into_any()
                        } else {
                            view! { <span></span> }.into_any()
                        }
                    }}
                </div>
            </div>
        </PageFrame>
    }
}
