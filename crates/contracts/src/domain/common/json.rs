//! Lecture tolérante du JSON renvoyé par le serveur.
//!
//! Les différentes versions du back-office n'ont jamais fixé la casse ni
//! la langue des champs (`displayName` / `nom`, `prix` / `unitPrice`...).
//! Tous les adaptateurs de normalisation passent par ces helpers, le
//! reste du code ne voit que les types canoniques.

use chrono::NaiveDate;
use serde_json::Value;

/// Première valeur non nulle parmi plusieurs orthographes de champ.
pub fn any_field<'a>(value: &'a Value, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .filter_map(|name| value.get(name))
        .find(|v| !v.is_null())
}

/// Champ texte, la première orthographe trouvée gagne.
pub fn str_field(value: &Value, names: &[&str]) -> Option<String> {
    any_field(value, names)?.as_str().map(|s| s.to_string())
}

/// Champ numérique. Certains serveurs renvoient les montants en chaîne
/// ("1500.00"), on les accepte aussi.
pub fn f64_field(value: &Value, names: &[&str]) -> Option<f64> {
    let field = any_field(value, names)?;
    if let Some(n) = field.as_f64() {
        return Some(n);
    }
    field.as_str()?.trim().parse::<f64>().ok()
}

/// Champ entier, mêmes tolérances que [`f64_field`].
pub fn i64_field(value: &Value, names: &[&str]) -> Option<i64> {
    let field = any_field(value, names)?;
    if let Some(n) = field.as_i64() {
        return Some(n);
    }
    field.as_str()?.trim().parse::<i64>().ok()
}

/// Date au format `YYYY-MM-DD`. Les horodatages ISO complets sont
/// tronqués à la partie date.
pub fn date_field(value: &Value, names: &[&str]) -> Option<NaiveDate> {
    let raw = str_field(value, names)?;
    let date_part = raw.get(..10).unwrap_or(&raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Libellé d'un champ qui est tantôt une chaîne, tantôt un objet
/// (`"article": "Chemise"` ou `"article": { "libelle": "Chemise" }`).
pub fn label_field(value: &Value, names: &[&str]) -> Option<String> {
    let field = any_field(value, names)?;
    if let Some(s) = field.as_str() {
        return Some(s.to_string());
    }
    str_field(field, &["libelle", "label", "nom", "name"])
}

/// Vrai si au moins une des orthographes est présente (même nulle ou vide).
pub fn has_field(value: &Value, names: &[&str]) -> bool {
    names.iter().any(|name| value.get(name).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_str_field_alternates() {
        let v = json!({ "nom": "Dupont" });
        assert_eq!(
            str_field(&v, &["displayName", "nom"]),
            Some("Dupont".to_string())
        );
        assert_eq!(str_field(&v, &["phone", "telephone"]), None);
    }

    #[test]
    fn test_f64_field_accepts_numeric_strings() {
        let v = json!({ "prix": "1500.50", "remise": 200 });
        assert_eq!(f64_field(&v, &["unitPrice", "prix"]), Some(1500.50));
        assert_eq!(f64_field(&v, &["remise"]), Some(200.0));
    }

    #[test]
    fn test_null_fields_are_skipped() {
        let v = json!({ "phone": null, "telephone": "0601020304" });
        assert_eq!(
            str_field(&v, &["phone", "telephone"]),
            Some("0601020304".to_string())
        );
    }

    #[test]
    fn test_date_field_truncates_timestamps() {
        let v = json!({ "dateReception": "2024-01-10T14:32:00Z" });
        assert_eq!(
            date_field(&v, &["dateReception"]),
            NaiveDate::from_ymd_opt(2024, 1, 10)
        );
    }

    #[test]
    fn test_label_field_string_or_object() {
        let flat = json!({ "article": "Chemise" });
        let nested = json!({ "article": { "libelle": "Chemise" } });
        assert_eq!(
            label_field(&flat, &["article"]),
            Some("Chemise".to_string())
        );
        assert_eq!(
            label_field(&nested, &["article"]),
            Some("Chemise".to_string())
        );
    }
}
