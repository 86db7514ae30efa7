use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::json::{i64_field, str_field};
use crate::domain::common::ClientId;

/// Fiche client telle que vue par la console
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Identifiant serveur
    pub id: ClientId,
    /// Nom affiché (nom complet ou raison sociale)
    pub display_name: String,
    /// Téléphone de contact
    pub phone: Option<String>,
    /// Adresse postale
    pub address: Option<String>,
}

impl Client {
    /// Normalise un enregistrement client renvoyé par le serveur.
    ///
    /// Les anciens back-offices exposent `nom` / `telephone` / `adresse`,
    /// les récents `displayName` / `phone` / `address`. Un enregistrement
    /// sans identifiant ou sans nom est ignoré.
    pub fn from_value(item: &Value) -> Option<Client> {
        let id = i64_field(item, &["id", "idClient", "clientId"])?;
        let display_name = str_field(item, &["displayName", "nom", "name", "raisonSociale"])?;
        if display_name.trim().is_empty() {
            return None;
        }
        Some(Client {
            id: ClientId::new(id),
            display_name,
            phone: str_field(item, &["phone", "telephone", "tel"]),
            address: str_field(item, &["address", "adresse"]),
        })
    }
}

/// Corps de création/modification d'un client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    pub display_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl ClientDto {
    pub fn from_client(client: &Client) -> Self {
        Self {
            display_name: client.display_name.clone(),
            phone: client.phone.clone(),
            address: client.address.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.display_name.trim().is_empty() {
            return Err("Le nom du client est obligatoire".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_modern_shape() {
        let v = json!({ "id": 12, "displayName": "Mme Diallo", "phone": "0601020304" });
        let client = Client::from_value(&v).unwrap();
        assert_eq!(client.id, ClientId::new(12));
        assert_eq!(client.display_name, "Mme Diallo");
        assert_eq!(client.phone.as_deref(), Some("0601020304"));
        assert_eq!(client.address, None);
    }

    #[test]
    fn test_from_value_legacy_french_shape() {
        let v = json!({
            "idClient": "45",
            "nom": "Pressing du Centre",
            "telephone": "0477102030",
            "adresse": "12 rue des Lilas"
        });
        let client = Client::from_value(&v).unwrap();
        assert_eq!(client.id, ClientId::new(45));
        assert_eq!(client.display_name, "Pressing du Centre");
        assert_eq!(client.address.as_deref(), Some("12 rue des Lilas"));
    }

    #[test]
    fn test_from_value_rejects_unnamed_records() {
        assert!(Client::from_value(&json!({ "id": 1 })).is_none());
        assert!(Client::from_value(&json!({ "id": 1, "nom": "  " })).is_none());
        assert!(Client::from_value(&json!({ "nom": "Sans id" })).is_none());
    }

    #[test]
    fn test_dto_validate() {
        let mut dto = ClientDto::default();
        assert!(dto.validate().is_err());
        dto.display_name = "M. Ben Salah".into();
        assert!(dto.validate().is_ok());
    }
}
