use crate::layout::navigation::NavContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session first: the navigation gate below reads it.
    provide_context(SessionContext::new());
    provide_context(NavContext::new());

    view! {
        <AppRoutes />
    }
}
