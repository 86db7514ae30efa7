//! Left menu of the console. Flat item list, no collapsible groups.

use leptos::prelude::*;

use crate::layout::navigation::{use_nav, View};
use crate::shared::icons::icon;

struct MenuItem {
    label: &'static str,
    icon: &'static str,
    view: View,
}

fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem { label: "Commandes", icon: "orders", view: View::OrdersList },
        MenuItem {
            label: "Nouvelle commande au détail",
            icon: "shirt",
            view: View::NewOrderByItem,
        },
        MenuItem {
            label: "Nouvelle commande au kilo",
            icon: "scale",
            view: View::NewOrderByWeight,
        },
        MenuItem { label: "Clients", icon: "clients", view: View::Clients },
    ]
}

/// A detail screen keeps its parent list highlighted in the menu.
fn menu_view_for(active: &View) -> View {
    match active {
        View::OrderDetail(_) => View::OrdersList,
        other => other.clone(),
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = use_nav();

    view! {
        <div class="app-sidebar__content">
            {menu_items()
                .into_iter()
                .map(|item| {
                    let item_view = StoredValue::new(item.view.clone());
                    let target = item.view;
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                nav.active.with(|active| menu_view_for(active) == item_view.get_value())
                            }
                            on:click=move |_| nav.open(target.clone())
                        >
                            <span class="app-sidebar__item-icon">{icon(item.icon)}</span>
                            <span class="app-sidebar__item-label">{item.label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
