use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::json::{f64_field, i64_field, label_field};
use crate::domain::common::CatalogEntryId;

/// Mode de tarification d'une entrée du catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricingMode {
    /// Prix à l'article (chemise, pantalon...)
    ByItem,
    /// Prix au kilo, par tranche de poids
    ByWeight,
}

impl PricingMode {
    pub fn label(&self) -> &'static str {
        match self {
            PricingMode::ByItem => "Au détail",
            PricingMode::ByWeight => "Au kilo",
        }
    }
}

/// Entrée du catalogue tarifaire: un couple (catégorie, service) et son
/// prix unitaire. En mode au kilo la catégorie est une tranche de poids
/// et le prix s'entend par kilogramme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: CatalogEntryId,
    pub category_label: String,
    pub service_label: String,
    pub unit_price: f64,
    pub mode: PricingMode,
}

impl CatalogEntry {
    /// Libellé complet pour la recherche et l'affichage.
    pub fn display_label(&self) -> String {
        format!("{} / {}", self.category_label, self.service_label)
    }

    /// Normalise un enregistrement tarifaire renvoyé par le serveur.
    ///
    /// Formes tolérées, au détail:
    /// `{ id, article: "Chemise" | { libelle }, service: ..., prix }`
    /// et au kilo:
    /// `{ id, tranchePoids: "0-5 kg" | { libelle }, service: ..., prixKilo }`.
    /// Les variantes camelCase récentes (`categoryLabel`, `unitPrice`)
    /// sont acceptées aussi.
    pub fn from_value(item: &Value, mode: PricingMode) -> Option<CatalogEntry> {
        let id = i64_field(item, &["id", "idTarif", "tarifId"])?;
        let category_label = match mode {
            PricingMode::ByItem => {
                label_field(item, &["categoryLabel", "article", "categorie", "category"])?
            }
            PricingMode::ByWeight => label_field(
                item,
                &["categoryLabel", "tranchePoids", "tranche", "bracket"],
            )?,
        };
        let service_label =
            label_field(item, &["serviceLabel", "service", "typeService", "prestation"])?;
        let unit_price = match mode {
            PricingMode::ByItem => f64_field(item, &["unitPrice", "prix", "price", "tarif"])?,
            PricingMode::ByWeight => {
                f64_field(item, &["unitPrice", "prixKilo", "prix", "pricePerKg"])?
            }
        };
        if category_label.trim().is_empty() || service_label.trim().is_empty() {
            return None;
        }
        if unit_price < 0.0 {
            return None;
        }
        Some(CatalogEntry {
            id: CatalogEntryId::new(id),
            category_label,
            service_label,
            unit_price,
            mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_by_item_nested_labels() {
        let v = json!({
            "id": 7,
            "article": { "libelle": "Chemise" },
            "service": { "libelle": "Lavage" },
            "prix": 1500
        });
        let entry = CatalogEntry::from_value(&v, PricingMode::ByItem).unwrap();
        assert_eq!(entry.category_label, "Chemise");
        assert_eq!(entry.service_label, "Lavage");
        assert_eq!(entry.unit_price, 1500.0);
        assert_eq!(entry.mode, PricingMode::ByItem);
    }

    #[test]
    fn test_from_value_by_weight_legacy_shape() {
        let v = json!({
            "id": 3,
            "tranchePoids": "0-5 kg",
            "service": "Lavage + séchage",
            "prixKilo": "800"
        });
        let entry = CatalogEntry::from_value(&v, PricingMode::ByWeight).unwrap();
        assert_eq!(entry.category_label, "0-5 kg");
        assert_eq!(entry.unit_price, 800.0);
        assert_eq!(entry.mode, PricingMode::ByWeight);
    }

    #[test]
    fn test_from_value_modern_camel_case() {
        let v = json!({
            "id": 21,
            "categoryLabel": "Costume 2 pièces",
            "serviceLabel": "Nettoyage à sec",
            "unitPrice": 4500.0
        });
        let entry = CatalogEntry::from_value(&v, PricingMode::ByItem).unwrap();
        assert_eq!(entry.display_label(), "Costume 2 pièces / Nettoyage à sec");
    }

    #[test]
    fn test_from_value_rejects_incomplete_records() {
        let no_price = json!({ "id": 1, "article": "Chemise", "service": "Lavage" });
        assert!(CatalogEntry::from_value(&no_price, PricingMode::ByItem).is_none());
        let negative = json!({ "id": 1, "article": "Chemise", "service": "Lavage", "prix": -10 });
        assert!(CatalogEntry::from_value(&negative, PricingMode::ByItem).is_none());
        let blank = json!({ "id": 1, "article": " ", "service": "Lavage", "prix": 100 });
        assert!(CatalogEntry::from_value(&blank, PricingMode::ByItem).is_none());
    }
}
