pub mod navigation;
pub mod sidebar;

use leptos::prelude::*;

use contracts::domain::a002_tariff::PricingMode;

use crate::domain::a001_client::ui::list::ClientsList;
use crate::domain::a003_order::ui::compose::OrderCompose;
use crate::domain::a003_order::ui::details::OrderDetail;
use crate::domain::a003_order::ui::list::OrderList;
use crate::layout::navigation::{use_nav, View};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use sidebar::Sidebar;

/// Application top bar: brand, current screen title, user block.
#[component]
pub fn TopHeader() -> impl IntoView {
    let session = use_session();
    let nav = use_nav();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"NetPressing"</span>
                <span class="top-header__subtitle">
                    {move || nav.active.get().title()}
                </span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || session.current_user_name()}</span>
                    <span class="top-header__user-role">
                        {move || session.current_role().label()}
                    </span>
                </div>

                <button
                    class="top-header__icon-btn"
                    on:click=move |_| session.logout()
                    title="Déconnexion"
                >
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}

/// Main application shell.
///
/// Structure:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |         Content              |
/// +------------------------------------------+
/// ```
///
/// The content area swaps screens on navigation changes. Screens are
/// recreated on every switch, so an abandoned order draft does not survive
/// navigating away.
#[component]
pub fn MainLayout() -> impl IntoView {
    let nav = use_nav();
    nav.init_router_integration();

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <div class="app-sidebar">
                    <Sidebar />
                </div>

                <div class="app-main">
                    {move || match nav.active.get() {
                        View::OrdersList => view! { <OrderList /> }.into_any(),
                        View::OrderDetail(id) => view! {
                            <OrderDetail
                                order_id=id
                                on_close=Callback::new(move |_| nav.open(View::OrdersList))
                            />
                        }.into_any(),
                        View::NewOrderByItem => view! {
                            <OrderCompose mode=PricingMode::ByItem />
                        }.into_any(),
                        View::NewOrderByWeight => view! {
                            <OrderCompose mode=PricingMode::ByWeight />
                        }.into_any(),
                        View::Clients => view! { <ClientsList /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}
