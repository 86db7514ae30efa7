use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::json::{date_field, f64_field, has_field, i64_field, label_field, str_field};
use crate::domain::common::{ClientId, OrderId};

/// Type de commande
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    /// Facturée à l'article
    ByItem,
    /// Facturée au poids
    ByWeight,
}

impl OrderType {
    pub fn label(&self) -> &'static str {
        match self {
            OrderType::ByItem => "Au détail",
            OrderType::ByWeight => "Au kilo",
        }
    }
}

/// Ligne d'une commande enregistrée
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Catégorie (article ou tranche de poids)
    pub label: String,
    /// Service
    pub service_label: String,
    pub unit_price: f64,
    pub quantity: f64,
    pub line_total: f64,
}

/// Commande enregistrée, en lecture seule côté console
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Numéro d'affichage attribué par le serveur
    pub number: String,
    pub client_id: Option<ClientId>,
    pub client_name: String,
    pub order_type: OrderType,
    /// Statut métier, affiché tel quel
    pub status_label: String,
    pub lines: Vec<OrderLine>,
    pub gross: f64,
    pub discount: f64,
    pub net: f64,
    pub paid: f64,
    pub reception_date: Option<NaiveDate>,
    pub delivery_date: Option<NaiveDate>,
}

impl Order {
    pub fn balance_due(&self) -> f64 {
        self.net - self.paid
    }

    /// Normalise une commande renvoyée par le serveur.
    pub fn from_value(item: &Value) -> Option<Order> {
        let id = i64_field(item, &["id", "idCommande", "orderId"])?;
        let lines = item
            .get("lines")
            .or_else(|| item.get("lignes"))
            .or_else(|| item.get("articles"))
            .and_then(|v| v.as_array())
            .map(|rows| rows.iter().filter_map(OrderLine::from_value).collect())
            .unwrap_or_else(Vec::new);

        let gross = f64_field(item, &["gross", "montantTotal", "total"])
            .unwrap_or_else(|| lines.iter().map(|l: &OrderLine| l.line_total).sum());
        let discount = f64_field(item, &["discount", "remise", "globalDiscount"]).unwrap_or(0.0);
        let net =
            f64_field(item, &["net", "montantNet", "netAPayer"]).unwrap_or((gross - discount).max(0.0));
        let paid =
            f64_field(item, &["paid", "montantPaye", "avance", "amountPaid"]).unwrap_or(0.0);

        let client_name = label_field(item, &["clientName", "client", "nomClient"])
            .unwrap_or_default();
        let client_id = i64_field(item, &["clientId", "idClient"])
            .or_else(|| item.get("client").and_then(|c| i64_field(c, &["id"])))
            .map(ClientId::new);

        Some(Order {
            id: OrderId::new(id),
            number: str_field(item, &["number", "numero", "code"]).unwrap_or_else(|| id.to_string()),
            client_id,
            client_name,
            order_type: detect_order_type(item),
            status_label: str_field(item, &["status", "statut", "etat"]).unwrap_or_default(),
            lines,
            gross,
            discount,
            net,
            paid,
            reception_date: date_field(item, &["receptionDate", "dateReception"]),
            delivery_date: date_field(item, &["deliveryDate", "dateLivraison"]),
        })
    }
}

impl OrderLine {
    fn from_value(item: &Value) -> Option<OrderLine> {
        let label = label_field(item, &["label", "libelle", "article", "tranchePoids"])?;
        let unit_price = f64_field(item, &["unitPrice", "prix", "prixUnitaire", "prixKilo"])?;
        let quantity = f64_field(item, &["quantity", "quantite", "qte", "poids"])?;
        Some(OrderLine {
            label,
            service_label: label_field(item, &["serviceLabel", "service", "prestation"])
                .unwrap_or_default(),
            unit_price,
            quantity,
            line_total: f64_field(item, &["lineTotal", "montant", "total"])
                .unwrap_or(unit_price * quantity),
        })
    }
}

/// Résout le type d'une commande. Le discriminant explicite `orderType`
/// des serveurs récents fait foi; à défaut, la présence des champs
/// hérités du mode au kilo (`kilo`, `poids`, `tranchePoids`) tranche.
/// Seul endroit du code où cette heuristique existe.
fn detect_order_type(item: &Value) -> OrderType {
    if let Some(raw) = str_field(item, &["orderType", "typeCommande", "type"]) {
        let raw = raw.to_lowercase();
        if raw.contains("kilo") || raw.contains("poids") || raw.contains("weight") {
            return OrderType::ByWeight;
        }
        if raw.contains("detail") || raw.contains("détail") || raw.contains("article") || raw.contains("item") {
            return OrderType::ByItem;
        }
    }
    if has_field(item, &["kilo", "poids", "tranchePoids", "prixKilo"]) {
        OrderType::ByWeight
    } else {
        OrderType::ByItem
    }
}

/// Corps d'enregistrement d'un règlement sur une commande existante
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentRequest {
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_explicit_order_type_wins_over_heuristic() {
        // champ kilo présent mais discriminant explicite au détail
        let v = json!({
            "id": 1,
            "orderType": "DETAIL",
            "kilo": 4.5,
            "montantTotal": 1000
        });
        let order = Order::from_value(&v).unwrap();
        assert_eq!(order.order_type, OrderType::ByItem);

        let v = json!({ "id": 2, "orderType": "auKilo" });
        assert_eq!(Order::from_value(&v).unwrap().order_type, OrderType::ByWeight);
    }

    #[test]
    fn test_legacy_field_presence_heuristic() {
        let weighed = json!({ "id": 3, "tranchePoids": "0-5 kg", "montantTotal": 800 });
        assert_eq!(
            Order::from_value(&weighed).unwrap().order_type,
            OrderType::ByWeight
        );
        let itemized = json!({ "id": 4, "montantTotal": 800 });
        assert_eq!(
            Order::from_value(&itemized).unwrap().order_type,
            OrderType::ByItem
        );
    }

    #[test]
    fn test_totals_fall_back_to_line_sum() {
        let v = json!({
            "id": 5,
            "numero": "CMD-2024-012",
            "client": { "id": 9, "nom": "Mme Diallo" },
            "lignes": [
                { "libelle": "Chemise", "service": "Lavage", "prix": 1500, "quantite": 2 },
                { "libelle": "Drap", "service": "Repassage", "prixUnitaire": "800", "qte": 1 }
            ],
            "remise": 300
        });
        let order = Order::from_value(&v).unwrap();
        assert_eq!(order.number, "CMD-2024-012");
        assert_eq!(order.client_id, Some(ClientId::new(9)));
        assert_eq!(order.client_name, "Mme Diallo");
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.gross, 3800.0);
        assert_eq!(order.net, 3500.0);
        assert_eq!(order.balance_due(), 3500.0);
    }

    #[test]
    fn test_dates_and_status_are_tolerated_missing() {
        let v = json!({ "id": 6 });
        let order = Order::from_value(&v).unwrap();
        assert_eq!(order.number, "6");
        assert_eq!(order.status_label, "");
        assert_eq!(order.reception_date, None);
        assert!(order.lines.is_empty());

        let v = json!({
            "id": 7,
            "statut": "En cours",
            "dateReception": "2024-01-10",
            "dateLivraison": "2024-01-15T09:00:00"
        });
        let order = Order::from_value(&v).unwrap();
        assert_eq!(order.status_label, "En cours");
        assert_eq!(
            order.delivery_date,
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }
}
