//! Etat et commandes de l'écran de composition d'une commande.
//!
//! Le composant de page reste une vue passive: tout passe par ce
//! view-model, un champ par signal pour rester compatible avec la
//! liaison bidirectionnelle des composants.

use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use contracts::domain::a001_client::Client;
use contracts::domain::a002_tariff::{CatalogEntry, CatalogIndex, CatalogSelection, PricingMode};
use contracts::domain::a003_order::{CheckoutState, OrderDraft};

use crate::domain::a002_tariff::api as tariff_api;
use crate::domain::a003_order::api as order_api;
use crate::shared::format::parse_date_input;
use crate::shared::receipt::open_receipt;

/// View-model de la composition: catalogue, brouillon, encaissement.
///
/// Copiable librement: chaque champ est un signal, l'état vit dans le
/// runtime réactif et meurt avec l'écran.
#[derive(Clone, Copy)]
pub struct ComposeVm {
    pub mode: PricingMode,

    // Référentiel
    pub catalog: RwSignal<CatalogIndex>,
    pub catalog_loading: RwSignal<bool>,

    // Sélecteur de catalogue
    pub selection: RwSignal<CatalogSelection>,
    pub search: RwSignal<String>,
    pub quantity_text: RwSignal<String>,

    // Client et dates
    pub client: RwSignal<Option<Client>>,
    pub show_client_picker: RwSignal<bool>,

    // Brouillon et encaissement
    pub draft: RwSignal<OrderDraft>,
    pub checkout: RwSignal<CheckoutState>,
    /// Message affiché en tête d'écran: refus locaux (sélection
    /// incomplète, quantité, blocage d'encaissement) et échec de
    /// chargement du catalogue. Les échecs de soumission passent par
    /// `CheckoutState::Failed`.
    pub error: RwSignal<Option<String>>,
}

impl ComposeVm {
    pub fn new(mode: PricingMode) -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            mode,
            catalog: RwSignal::new(CatalogIndex::default()),
            catalog_loading: RwSignal::new(false),
            selection: RwSignal::new(CatalogSelection::default()),
            search: RwSignal::new(String::new()),
            quantity_text: RwSignal::new(String::new()),
            client: RwSignal::new(None),
            show_client_picker: RwSignal::new(false),
            draft: RwSignal::new(OrderDraft::new(today)),
            checkout: RwSignal::new(CheckoutState::Composing),
            error: RwSignal::new(None),
        }
    }

    // === Signaux dérivés ===

    pub fn gross(&self) -> Signal<f64> {
        let draft = self.draft;
        Signal::derive(move || draft.with(|d| d.gross()))
    }

    pub fn net(&self) -> Signal<f64> {
        let draft = self.draft;
        Signal::derive(move || draft.with(|d| d.net()))
    }

    pub fn balance_due(&self) -> Signal<f64> {
        let draft = self.draft;
        Signal::derive(move || draft.with(|d| d.balance_due()))
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let checkout = self.checkout;
        Signal::derive(move || checkout.with(|s| s.is_submitting()))
    }

    // === Référentiel ===

    pub fn load_catalog(&self) {
        let this = self.clone();
        let mode = self.mode;
        this.catalog_loading.set(true);
        spawn_local(async move {
            match tariff_api::fetch_catalog(mode).await {
                Ok(index) => {
                    if index.is_empty() {
                        this.error
                            .set(Some("Le catalogue tarifaire est vide".to_string()));
                    }
                    this.catalog.set(index);
                    this.catalog_loading.set(false);
                }
                Err(e) => {
                    log::error!("Chargement du catalogue impossible: {}", e);
                    this.error.set(Some(e));
                    this.catalog_loading.set(false);
                }
            }
        });
    }

    // === Sélecteur de catalogue ===

    pub fn choose_category(&self, category: &str) {
        if self.checkout.get_untracked().is_submitting() {
            return;
        }
        if category.is_empty() {
            self.selection.update(|s| s.clear());
            return;
        }
        let category = category.to_string();
        self.selection.update(|s| s.choose_category(&category));
    }

    pub fn choose_service(&self, service: &str) {
        if self.checkout.get_untracked().is_submitting() {
            return;
        }
        if service.is_empty() {
            self.selection.update(|s| s.reset_service());
            return;
        }
        let service = service.to_string();
        let catalog = self.catalog;
        let mut known = true;
        self.selection.update(|s| {
            known = catalog.with_untracked(|index| s.choose_service(index, &service));
        });
        if !known {
            self.error
                .set(Some("Ce service n'existe pas pour cette catégorie".to_string()));
        }
    }

    /// Sélection directe depuis un résultat de recherche. La recherche
    /// est effacée, le couple choisi reste visible dans les deux listes.
    pub fn pick_entry(&self, entry: &CatalogEntry) {
        if self.checkout.get_untracked().is_submitting() {
            return;
        }
        let catalog = self.catalog;
        let category = entry.category_label.clone();
        let service = entry.service_label.clone();
        self.selection.update(|s| {
            s.choose_category(&category);
            catalog.with_untracked(|index| s.choose_service(index, &service));
        });
        self.search.set(String::new());
    }

    pub fn clear_selection(&self) {
        self.selection.update(|s| s.clear());
        self.quantity_text.set(String::new());
    }

    // === Brouillon ===

    /// Ajoute la sélection courante comme nouvelle ligne.
    ///
    /// En cas de refus le brouillon reste tel quel et le message est
    /// affiché. Après un ajout la catégorie est conservée pour enchaîner
    /// les services, la quantité repart à vide.
    pub fn add_line(&self) {
        if self.checkout.get_untracked().is_submitting() {
            return;
        }
        let quantity = parse_amount(&self.quantity_text.get_untracked());
        let selection = self.selection.get_untracked();

        let mut outcome = Ok(());
        self.draft
            .update(|draft| outcome = draft.add_line(&selection, quantity));

        match outcome {
            Ok(()) => {
                self.selection.update(|s| s.reset_service());
                self.quantity_text.set(String::new());
                self.error.set(None);
                self.checkout.set(CheckoutState::Composing);
            }
            Err(message) => self.error.set(Some(message)),
        }
    }

    pub fn remove_line(&self, line_id: Uuid) {
        if self.checkout.get_untracked().is_submitting() {
            return;
        }
        self.draft.update(|draft| draft.remove_line(line_id));
        self.checkout.set(CheckoutState::Composing);
    }

    pub fn set_discount_input(&self, raw: &str) {
        if self.checkout.get_untracked().is_submitting() {
            return;
        }
        let value = parse_amount(raw);
        self.draft.update(|draft| draft.set_global_discount(value));
        self.checkout.set(CheckoutState::Composing);
    }

    pub fn set_paid_input(&self, raw: &str) {
        if self.checkout.get_untracked().is_submitting() {
            return;
        }
        let value = parse_amount(raw);
        self.draft.update(|draft| draft.set_amount_paid(value));
        self.checkout.set(CheckoutState::Composing);
    }

    pub fn set_reception_date(&self, raw: &str) {
        if self.checkout.get_untracked().is_submitting() {
            return;
        }
        if let Some(date) = parse_date_input(raw) {
            self.draft.update(|draft| draft.reception_date = date);
            self.checkout.set(CheckoutState::Composing);
        }
    }

    pub fn set_delivery_date(&self, raw: &str) {
        if self.checkout.get_untracked().is_submitting() {
            return;
        }
        let date = parse_date_input(raw);
        self.draft.update(|draft| draft.delivery_date = date);
        self.checkout.set(CheckoutState::Composing);
    }

    pub fn set_client(&self, client: Client) {
        if self.checkout.get_untracked().is_submitting() {
            return;
        }
        self.draft.update(|draft| draft.client_id = Some(client.id));
        self.client.set(Some(client));
        self.show_client_picker.set(false);
        self.checkout.set(CheckoutState::Composing);
    }

    pub fn clear_client(&self) {
        if self.checkout.get_untracked().is_submitting() {
            return;
        }
        self.draft.update(|draft| draft.client_id = None);
        self.client.set(None);
        self.checkout.set(CheckoutState::Composing);
    }

    // === Encaissement ===

    /// Passage en récapitulatif. Les blocages (aucune ligne, livraison
    /// manquante ou antérieure à la réception, pas de client) laissent
    /// l'écran en composition avec le message affiché.
    pub fn request_checkout(&self) {
        if self.checkout.get_untracked().is_submitting() {
            return;
        }
        match self.draft.with_untracked(|draft| draft.ready_for_checkout()) {
            Ok(()) => {
                self.error.set(None);
                self.checkout.set(CheckoutState::ReadyToCheckout);
            }
            Err(block) => {
                self.checkout.set(CheckoutState::Composing);
                self.error.set(Some(block.to_string()));
            }
        }
    }

    pub fn back_to_composing(&self) {
        if self.checkout.get_untracked().is_submitting() {
            return;
        }
        self.checkout.set(CheckoutState::Composing);
    }

    /// Soumission définitive. En cas d'échec réseau le brouillon est
    /// conservé intégralement pour une nouvelle tentative.
    pub fn submit(&self, on_success: Callback<()>) {
        if self.checkout.get_untracked().is_submitting() {
            return;
        }
        let request = match self.draft.with_untracked(|draft| draft.to_request()) {
            Ok(request) => request,
            Err(block) => {
                self.checkout.set(CheckoutState::Composing);
                self.error.set(Some(block.to_string()));
                return;
            }
        };

        let this = self.clone();
        let mode = self.mode;
        this.checkout.set(CheckoutState::Submitting);
        this.error.set(None);

        spawn_local(async move {
            match order_api::create_order(mode, &request).await {
                Ok(receipt_bytes) => {
                    this.checkout.set(CheckoutState::Success);
                    let filename =
                        format!("recu-{}.pdf", request.reception_date.format("%Y%m%d"));
                    if let Err(e) = open_receipt(&receipt_bytes, &filename) {
                        log::warn!("Affichage du reçu impossible: {}", e);
                    }
                    on_success.run(());
                }
                Err(message) => {
                    this.checkout.set(CheckoutState::Failed(message));
                }
            }
        });
    }
}

/// Saisie numérique tolérante: virgule décimale acceptée, défaut zéro.
fn parse_amount(raw: &str) -> f64 {
    raw.trim().replace(',', ".").parse::<f64>().unwrap_or(0.0)
}
