use super::aggregate::CatalogEntry;
use crate::domain::common::CatalogEntryId;

/// Catalogue tarifaire indexé pour la saisie en deux temps:
/// d'abord la catégorie, puis le service restreint à cette catégorie.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    entries: Vec<CatalogEntry>,
}

impl CatalogIndex {
    pub fn new(mut entries: Vec<CatalogEntry>) -> Self {
        entries.sort_by(|a, b| {
            a.category_label
                .cmp(&b.category_label)
                .then_with(|| a.service_label.cmp(&b.service_label))
        });
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Catégories distinctes, triées.
    pub fn categories(&self) -> Vec<String> {
        let mut result: Vec<String> = Vec::new();
        for entry in &self.entries {
            if result.last().map(|c| c.as_str()) != Some(entry.category_label.as_str()) {
                result.push(entry.category_label.clone());
            }
        }
        result
    }

    /// Services disponibles pour une catégorie donnée.
    pub fn services_for(&self, category: &str) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| e.category_label == category)
            .collect()
    }

    /// Entrée correspondant au couple (catégorie, service).
    pub fn resolve(&self, category: &str, service: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|e| e.category_label == category && e.service_label == service)
    }

    pub fn get(&self, id: CatalogEntryId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Recherche plein texte, sous-chaîne insensible à la casse sur le
    /// libellé complet. Aucun résultat n'est pas une erreur: la liste
    /// revient simplement vide.
    pub fn search(&self, needle: &str) -> Vec<&CatalogEntry> {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return self.entries.iter().collect();
        }
        self.entries
            .iter()
            .filter(|e| e.display_label().to_lowercase().contains(&needle))
            .collect()
    }
}

/// Sélection en cours dans le sélecteur de catalogue.
///
/// Choisir une catégorie efface le service et remet le prix dérivé à
/// zéro; choisir un service résout l'entrée et expose son prix; effacer
/// revient à l'état vide.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSelection {
    pub category: Option<String>,
    pub service: Option<String>,
    pub entry_id: Option<CatalogEntryId>,
    pub unit_price: f64,
}

impl CatalogSelection {
    pub fn choose_category(&mut self, category: &str) {
        self.category = Some(category.to_string());
        self.service = None;
        self.entry_id = None;
        self.unit_price = 0.0;
    }

    /// Résout le service dans la catégorie courante. Retourne `false`
    /// (sélection inchangée) si le couple n'existe pas au catalogue.
    pub fn choose_service(&mut self, index: &CatalogIndex, service: &str) -> bool {
        let Some(category) = self.category.clone() else {
            return false;
        };
        match index.resolve(&category, service) {
            Some(entry) => {
                self.service = Some(entry.service_label.clone());
                self.entry_id = Some(entry.id);
                self.unit_price = entry.unit_price;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        *self = CatalogSelection::default();
    }

    /// Efface le service et le prix mais garde la catégorie, pour
    /// enchaîner plusieurs lignes de la même catégorie.
    pub fn reset_service(&mut self) {
        self.service = None;
        self.entry_id = None;
        self.unit_price = 0.0;
    }

    pub fn is_complete(&self) -> bool {
        self.category.as_deref().is_some_and(|c| !c.trim().is_empty())
            && self.service.as_deref().is_some_and(|s| !s.trim().is_empty())
            && self.entry_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_tariff::aggregate::PricingMode;

    fn entry(id: i64, category: &str, service: &str, price: f64) -> CatalogEntry {
        CatalogEntry {
            id: CatalogEntryId::new(id),
            category_label: category.to_string(),
            service_label: service.to_string(),
            unit_price: price,
            mode: PricingMode::ByItem,
        }
    }

    fn sample_index() -> CatalogIndex {
        CatalogIndex::new(vec![
            entry(1, "Chemise", "Lavage", 1500.0),
            entry(2, "Chemise", "Repassage", 1000.0),
            entry(3, "Pantalon", "Lavage", 2000.0),
        ])
    }

    #[test]
    fn test_categories_are_distinct_and_sorted() {
        let index = sample_index();
        assert_eq!(index.categories(), vec!["Chemise", "Pantalon"]);
        assert_eq!(index.services_for("Chemise").len(), 2);
        assert_eq!(index.services_for("Costume").len(), 0);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let index = sample_index();
        assert_eq!(index.search("chem").len(), 2);
        assert_eq!(index.search("REPASS").len(), 1);
        assert_eq!(index.search("").len(), 3);
        // aucun résultat: liste vide, pas une erreur
        assert!(index.search("moquette").is_empty());
    }

    #[test]
    fn test_choose_category_clears_service_and_price() {
        let index = sample_index();
        let mut selection = CatalogSelection::default();
        selection.choose_category("Chemise");
        assert!(selection.choose_service(&index, "Lavage"));
        assert_eq!(selection.unit_price, 1500.0);
        assert!(selection.is_complete());

        selection.choose_category("Pantalon");
        assert_eq!(selection.service, None);
        assert_eq!(selection.entry_id, None);
        assert_eq!(selection.unit_price, 0.0);
        assert!(!selection.is_complete());
    }

    #[test]
    fn test_choose_service_requires_known_pair() {
        let index = sample_index();
        let mut selection = CatalogSelection::default();
        // pas de catégorie choisie
        assert!(!selection.choose_service(&index, "Lavage"));

        selection.choose_category("Pantalon");
        assert!(!selection.choose_service(&index, "Repassage"));
        assert_eq!(selection.unit_price, 0.0);
        assert!(selection.choose_service(&index, "Lavage"));
        assert_eq!(selection.unit_price, 2000.0);
    }

    #[test]
    fn test_clear_resets_everything() {
        let index = sample_index();
        let mut selection = CatalogSelection::default();
        selection.choose_category("Chemise");
        selection.choose_service(&index, "Repassage");
        selection.clear();
        assert_eq!(selection, CatalogSelection::default());
    }

    #[test]
    fn test_reset_service_keeps_category() {
        let index = sample_index();
        let mut selection = CatalogSelection::default();
        selection.choose_category("Chemise");
        selection.choose_service(&index, "Lavage");
        selection.reset_service();
        assert_eq!(selection.category.as_deref(), Some("Chemise"));
        assert_eq!(selection.service, None);
        assert_eq!(selection.unit_price, 0.0);
    }
}
