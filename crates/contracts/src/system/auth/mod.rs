use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub full_name: Option<String>,
    /// Rôle tel que renvoyé par le serveur, voir [`Role::parse`]
    pub role: String,
}

impl UserInfo {
    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }
}

/// Niveau d'accès attaché à la session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Manager,
    Cashier,
}

impl Role {
    /// Lecture tolérante des libellés de rôle du serveur. Un libellé
    /// inconnu retombe sur le rôle le moins privilégié.
    pub fn parse(raw: &str) -> Role {
        let raw = raw.trim().to_lowercase();
        if raw.contains("admin") {
            Role::Admin
        } else if raw.contains("manager") || raw.contains("gerant") || raw.contains("gérant") || raw.contains("responsable") {
            Role::Manager
        } else {
            Role::Cashier
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrateur",
            Role::Manager => "Gérant",
            Role::Cashier => "Caissier",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// La création et la modification des fiches client sont réservées
    /// au gérant et à l'administrateur.
    pub fn can_edit_clients(&self) -> bool {
        matches!(self, Role::Admin | Role::Manager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tolerates_server_spellings() {
        assert_eq!(Role::parse("ADMIN"), Role::Admin);
        assert_eq!(Role::parse("Administrateur"), Role::Admin);
        assert_eq!(Role::parse("gérant"), Role::Manager);
        assert_eq!(Role::parse("ROLE_MANAGER"), Role::Manager);
        assert_eq!(Role::parse("caissier"), Role::Cashier);
        assert_eq!(Role::parse(""), Role::Cashier);
        assert_eq!(Role::parse("inconnu"), Role::Cashier);
    }

    #[test]
    fn test_client_edition_rights() {
        assert!(Role::Admin.can_edit_clients());
        assert!(Role::Manager.can_edit_clients());
        assert!(!Role::Cashier.can_edit_clients());
    }
}
