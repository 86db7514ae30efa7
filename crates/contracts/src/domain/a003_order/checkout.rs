use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::draft::OrderDraft;

/// États de l'encaissement d'une commande.
///
/// Un seul enum porte tout l'état, avec les données propres à chaque
/// variante; jamais de booléens parallèles.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CheckoutState {
    /// Saisie en cours, panneau d'encaissement fermé
    #[default]
    Composing,
    /// Brouillon validé localement, panneau d'encaissement ouvert
    ReadyToCheckout,
    /// Requête de création en vol, soumission verrouillée
    Submitting,
    /// Commande créée, reçu affiché
    Success,
    /// Échec réseau ou serveur, brouillon conservé pour une reprise
    Failed(String),
}

impl CheckoutState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, CheckoutState::Submitting)
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            CheckoutState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Raison locale empêchant le passage à l'encaissement. Ces contrôles
/// ne partent jamais sur le réseau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutBlock {
    #[error("Ajoutez au moins une ligne à la commande")]
    NoLines,
    #[error("La date de livraison est obligatoire")]
    MissingDeliveryDate,
    #[error("La date de livraison ne peut pas précéder la réception")]
    DeliveryBeforeReception,
    #[error("Choisissez un client")]
    NoClient,
}

/// Corps de création d'une commande.
///
/// Les lignes partent en tableaux parallèles (`catalogEntryIds[i]` va
/// avec `quantities[i]`), dans l'ordre d'affichage du brouillon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub client_id: i64,
    pub catalog_entry_ids: Vec<i64>,
    pub quantities: Vec<f64>,
    pub global_discount: f64,
    pub amount_paid: f64,
    pub reception_date: NaiveDate,
    pub delivery_date: NaiveDate,
}

impl OrderDraft {
    /// Contrôles locaux du passage Composing → ReadyToCheckout.
    pub fn ready_for_checkout(&self) -> Result<(), CheckoutBlock> {
        if self.lines.is_empty() {
            return Err(CheckoutBlock::NoLines);
        }
        let delivery = self.delivery_date.ok_or(CheckoutBlock::MissingDeliveryDate)?;
        if delivery < self.reception_date {
            return Err(CheckoutBlock::DeliveryBeforeReception);
        }
        if self.client_id.is_none() {
            return Err(CheckoutBlock::NoClient);
        }
        Ok(())
    }

    /// Sérialise le brouillon en corps de requête. Revalide d'abord les
    /// contrôles locaux, le brouillon n'est jamais modifié.
    pub fn to_request(&self) -> Result<CreateOrderRequest, CheckoutBlock> {
        self.ready_for_checkout()?;
        let client_id = self.client_id.ok_or(CheckoutBlock::NoClient)?;
        let delivery_date = self
            .delivery_date
            .ok_or(CheckoutBlock::MissingDeliveryDate)?;
        Ok(CreateOrderRequest {
            client_id: client_id.value(),
            catalog_entry_ids: self
                .lines
                .iter()
                .map(|line| line.catalog_entry_id.value())
                .collect(),
            quantities: self.lines.iter().map(|line| line.quantity).collect(),
            global_discount: self.global_discount,
            amount_paid: self.amount_paid,
            reception_date: self.reception_date,
            delivery_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_tariff::aggregate::PricingMode;
    use crate::domain::a002_tariff::{CatalogEntry, CatalogIndex, CatalogSelection};
    use crate::domain::common::{CatalogEntryId, ClientId};

    fn index() -> CatalogIndex {
        CatalogIndex::new(vec![
            CatalogEntry {
                id: CatalogEntryId::new(11),
                category_label: "Chemise".into(),
                service_label: "Lavage".into(),
                unit_price: 1500.0,
                mode: PricingMode::ByItem,
            },
            CatalogEntry {
                id: CatalogEntryId::new(12),
                category_label: "Drap".into(),
                service_label: "Repassage".into(),
                unit_price: 800.0,
                mode: PricingMode::ByItem,
            },
        ])
    }

    fn add(d: &mut OrderDraft, category: &str, service: &str, qty: f64) {
        let mut selection = CatalogSelection::default();
        selection.choose_category(category);
        assert!(selection.choose_service(&index(), service));
        d.add_line(&selection, qty).unwrap();
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_checkout_refused_without_lines() {
        let mut d = OrderDraft::new(date(2024, 1, 10));
        d.client_id = Some(ClientId::new(5));
        d.delivery_date = Some(date(2024, 1, 12));
        assert_eq!(d.ready_for_checkout(), Err(CheckoutBlock::NoLines));
        assert!(d.to_request().is_err());
        assert!(d.lines.is_empty());
    }

    #[test]
    fn test_checkout_refused_without_delivery_date() {
        let mut d = OrderDraft::new(date(2024, 1, 10));
        d.client_id = Some(ClientId::new(5));
        add(&mut d, "Chemise", "Lavage", 1.0);
        assert_eq!(
            d.ready_for_checkout(),
            Err(CheckoutBlock::MissingDeliveryDate)
        );
        // le refus ne touche pas au brouillon
        assert_eq!(d.lines.len(), 1);
        assert_eq!(d.gross(), 1500.0);
    }

    #[test]
    fn test_scenario_delivery_before_reception_then_corrected() {
        let mut d = OrderDraft::new(date(2024, 1, 10));
        d.client_id = Some(ClientId::new(5));
        add(&mut d, "Chemise", "Lavage", 2.0);
        d.delivery_date = Some(date(2024, 1, 5));
        assert_eq!(
            d.ready_for_checkout(),
            Err(CheckoutBlock::DeliveryBeforeReception)
        );

        d.delivery_date = Some(date(2024, 1, 15));
        assert!(d.ready_for_checkout().is_ok());
        assert!(d.to_request().is_ok());
    }

    #[test]
    fn test_same_day_delivery_is_allowed() {
        let mut d = OrderDraft::new(date(2024, 1, 10));
        d.client_id = Some(ClientId::new(5));
        add(&mut d, "Chemise", "Lavage", 1.0);
        d.delivery_date = Some(date(2024, 1, 10));
        assert!(d.ready_for_checkout().is_ok());
    }

    #[test]
    fn test_request_uses_parallel_arrays_in_line_order() {
        let mut d = OrderDraft::new(date(2024, 1, 10));
        d.client_id = Some(ClientId::new(7));
        add(&mut d, "Chemise", "Lavage", 3.0);
        add(&mut d, "Drap", "Repassage", 1.5);
        d.delivery_date = Some(date(2024, 1, 15));
        d.set_global_discount(500.0);
        d.set_amount_paid(2000.0);

        let request = d.to_request().unwrap();
        assert_eq!(request.client_id, 7);
        assert_eq!(request.catalog_entry_ids, vec![11, 12]);
        assert_eq!(request.quantities, vec![3.0, 1.5]);
        assert_eq!(request.global_discount, 500.0);
        assert_eq!(request.amount_paid, 2000.0);
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let mut d = OrderDraft::new(date(2024, 1, 10));
        d.client_id = Some(ClientId::new(7));
        add(&mut d, "Chemise", "Lavage", 1.0);
        d.delivery_date = Some(date(2024, 1, 15));

        let body = serde_json::to_value(d.to_request().unwrap()).unwrap();
        assert_eq!(body["clientId"], 7);
        assert_eq!(body["catalogEntryIds"][0], 11);
        assert_eq!(body["receptionDate"], "2024-01-10");
        assert_eq!(body["deliveryDate"], "2024-01-15");
        assert!(body.get("client_id").is_none());
    }

    #[test]
    fn test_checkout_state_helpers() {
        assert!(CheckoutState::Submitting.is_submitting());
        assert!(!CheckoutState::Composing.is_submitting());
        let failed = CheckoutState::Failed("Erreur serveur".into());
        assert_eq!(failed.failure_message(), Some("Erreur serveur"));
        assert_eq!(CheckoutState::Success.failure_message(), None);
    }
}
