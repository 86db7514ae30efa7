use leptos::prelude::*;
use std::collections::HashMap;
use wasm_bindgen::JsValue;
use web_sys::window;

use contracts::domain::common::OrderId;

/// Screen currently shown in the main area. The console is a single-page
/// app without a router crate; this enum plus [`NavContext`] is the whole
/// navigation layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum View {
    #[default]
    OrdersList,
    OrderDetail(OrderId),
    NewOrderByItem,
    NewOrderByWeight,
    Clients,
}

impl View {
    /// Stable key stored in the `?active=` query parameter.
    pub fn key(&self) -> String {
        match self {
            View::OrdersList => "orders".to_string(),
            View::OrderDetail(id) => format!("order:{}", id.value()),
            View::NewOrderByItem => "new-order-item".to_string(),
            View::NewOrderByWeight => "new-order-kilo".to_string(),
            View::Clients => "clients".to_string(),
        }
    }

    pub fn from_key(key: &str) -> Option<View> {
        match key {
            "orders" => Some(View::OrdersList),
            "new-order-item" => Some(View::NewOrderByItem),
            "new-order-kilo" => Some(View::NewOrderByWeight),
            "clients" => Some(View::Clients),
            other => other
                .strip_prefix("order:")
                .and_then(|raw| raw.parse::<i64>().ok())
                .map(|id| View::OrderDetail(OrderId::new(id))),
        }
    }

    pub fn title(&self) -> String {
        match self {
            View::OrdersList => "Commandes".to_string(),
            View::OrderDetail(id) => format!("Commande n° {}", id.value()),
            View::NewOrderByItem => "Nouvelle commande au détail".to_string(),
            View::NewOrderByWeight => "Nouvelle commande au kilo".to_string(),
            View::Clients => "Clients".to_string(),
        }
    }
}

/// Shared navigation state, provided once at the top of the app.
#[derive(Clone, Copy)]
pub struct NavContext {
    pub active: RwSignal<View>,
}

impl NavContext {
    pub fn new() -> Self {
        Self { active: RwSignal::new(View::default()) }
    }

    pub fn open(&self, view: View) {
        self.active.set(view);
    }

    /// Restores the active screen from the query string, then keeps the
    /// URL in sync so a page reload lands back on the same screen.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(view) = params.get("active").and_then(|key| View::from_key(key)) {
            self.active.set(view);
        }

        let active = self.active;
        Effect::new(move |_| {
            let mut params = HashMap::new();
            params.insert("active".to_string(), active.get().key());
            let query_string = serde_qs::to_string(&params).unwrap_or_default();
            let new_search = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_search {
                return;
            }
            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&new_search));
                }
            }
        });
    }
}

pub fn use_nav() -> NavContext {
    use_context::<NavContext>().expect("NavContext not provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_keys_round_trip() {
        let views = vec![
            View::OrdersList,
            View::OrderDetail(OrderId::new(42)),
            View::NewOrderByItem,
            View::NewOrderByWeight,
            View::Clients,
        ];
        for view in views {
            assert_eq!(View::from_key(&view.key()), Some(view));
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert_eq!(View::from_key("dashboard"), None);
        assert_eq!(View::from_key("order:abc"), None);
        assert_eq!(View::from_key(""), None);
    }
}
