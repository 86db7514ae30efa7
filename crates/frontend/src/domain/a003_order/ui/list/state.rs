use leptos::prelude::*;

/// Filtres et tri de la liste des commandes.
///
/// Dates et recherche partent au serveur, le tri reste local.
#[derive(Clone, Debug)]
pub struct OrderListState {
    /// Borne basse sur la date de réception, format AAAA-MM-JJ, vide = pas de borne
    pub date_from: String,
    /// Borne haute, même convention
    pub date_to: String,
    /// Numéro de commande ou nom de client
    pub search_query: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub is_loaded: bool,
}

impl Default for OrderListState {
    fn default() -> Self {
        Self {
            date_from: String::new(),
            date_to: String::new(),
            search_query: String::new(),
            sort_field: "reception_date".to_string(),
            sort_ascending: false,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::default())
}
